//! Shape checks for submitted listing and review payloads.
//!
//! Every violated constraint is collected, not just the first, and the
//! messages are joined with `,` into a single [`AppError::Validation`].
//! A payload that passes comes back as a typed input record, so nothing past
//! this module touches the untyped document again.
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::listing::ListingInput;
use crate::models::review::ReviewInput;
use crate::payload::METHOD_OVERRIDE_KEY;

pub const LISTING_KEY: &str = "listing";
pub const REVIEW_KEY: &str = "review";

const LISTING_FIELDS: [&str; 6] = ["title", "description", "image", "price", "location", "country"];
const REVIEW_FIELDS: [&str; 2] = ["comment", "rating"];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn push(&mut self, path: &str, problem: &str) {
        self.0.push(format!("\"{path}\" {problem}"));
    }

    fn finish<T>(self, value: Option<T>) -> AppResult<T> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(AppError::Validation(self.0.join(","))),
        }
    }
}

/// Find the object under `key`, flagging unknown siblings along the way.
fn section<'a>(
    payload: &'a Value,
    key: &str,
    violations: &mut Violations,
) -> Option<&'a Map<String, Value>> {
    let Some(root) = payload.as_object() else {
        violations.push("value", "must be of type object");
        return None;
    };

    let section = match root.get(key) {
        None | Some(Value::Null) => {
            violations.push(key, "is required");
            None
        }
        Some(Value::Object(fields)) => Some(fields),
        Some(_) => {
            violations.push(key, "must be of type object");
            None
        }
    };

    for other in root.keys() {
        if other != key && other != METHOD_OVERRIDE_KEY {
            violations.push(other, "is not allowed");
        }
    }

    section
}

fn unknown_fields(fields: &Map<String, Value>, prefix: &str, known: &[&str], violations: &mut Violations) {
    for name in fields.keys() {
        if !known.contains(&name.as_str()) {
            violations.push(&format!("{prefix}.{name}"), "is not allowed");
        }
    }
}

fn required_text(fields: &Map<String, Value>, prefix: &str, name: &str, violations: &mut Violations) -> Option<String> {
    let path = format!("{prefix}.{name}");
    match fields.get(name) {
        None | Some(Value::Null) => {
            violations.push(&path, "is required");
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            violations.push(&path, "is not allowed to be empty");
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            violations.push(&path, "must be a string");
            None
        }
    }
}

// Numeric strings count as numbers, the way form submissions send them
fn required_number(fields: &Map<String, Value>, prefix: &str, name: &str, violations: &mut Violations) -> Option<f64> {
    let path = format!("{prefix}.{name}");
    let number = match fields.get(name) {
        None | Some(Value::Null) => {
            violations.push(&path, "is required");
            return None;
        }
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(number) if number.is_finite() => Some(number),
        _ => {
            violations.push(&path, "must be a number");
            None
        }
    }
}

fn optional_text(fields: &Map<String, Value>, prefix: &str, name: &str, violations: &mut Violations) -> Option<Option<String>> {
    match fields.get(name) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(text)) if text.is_empty() => Some(None),
        Some(Value::String(text)) => Some(Some(text.clone())),
        Some(_) => {
            violations.push(&format!("{prefix}.{name}"), "must be a string");
            None
        }
    }
}

/// Check a `{ listing: { ... } }` payload.
pub fn validate_listing(payload: &Value) -> AppResult<ListingInput> {
    let mut violations = Violations::default();
    let Some(fields) = section(payload, LISTING_KEY, &mut violations) else {
        return violations.finish(None);
    };
    let prefix = LISTING_KEY;

    let title = required_text(fields, prefix, "title", &mut violations);
    let description = required_text(fields, prefix, "description", &mut violations);
    let image = optional_text(fields, prefix, "image", &mut violations);
    // `+ 0.0` folds a "-0" price into plain zero
    let price = required_number(fields, prefix, "price", &mut violations).map(|p| p + 0.0);
    if let Some(price) = price {
        if price < 0.0 {
            violations.push(&format!("{prefix}.price"), "must be greater than or equal to 0");
        }
    }
    let location = required_text(fields, prefix, "location", &mut violations);
    let country = required_text(fields, prefix, "country", &mut violations);
    unknown_fields(fields, prefix, &LISTING_FIELDS, &mut violations);

    let input = match (title, description, image, price, location, country) {
        (Some(title), Some(description), Some(image), Some(price), Some(location), Some(country)) => {
            Some(ListingInput {
                title,
                description,
                image,
                price,
                location,
                country,
            })
        }
        _ => None,
    };
    violations.finish(input)
}

/// Check a `{ review: { ... } }` payload.
pub fn validate_review(payload: &Value) -> AppResult<ReviewInput> {
    let mut violations = Violations::default();
    let Some(fields) = section(payload, REVIEW_KEY, &mut violations) else {
        return violations.finish(None);
    };
    let prefix = REVIEW_KEY;

    let comment = required_text(fields, prefix, "comment", &mut violations);
    let rating = required_number(fields, prefix, "rating", &mut violations).and_then(|rating| {
        let path = format!("{prefix}.rating");
        if rating.fract() != 0.0 {
            violations.push(&path, "must be an integer");
            None
        } else if rating < f64::from(MIN_RATING) {
            violations.push(&path, &format!("must be greater than or equal to {MIN_RATING}"));
            None
        } else if rating > f64::from(MAX_RATING) {
            violations.push(&path, &format!("must be less than or equal to {MAX_RATING}"));
            None
        } else {
            Some(rating as u8)
        }
    });
    unknown_fields(fields, prefix, &REVIEW_FIELDS, &mut violations);

    let input = match (comment, rating) {
        (Some(comment), Some(rating)) => Some(ReviewInput { comment, rating }),
        _ => None,
    };
    violations.finish(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: AppResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    fn listing() -> Value {
        json!({
            "listing": {
                "title": "Cozy Cabin",
                "description": "Quiet place",
                "image": "",
                "price": "1500",
                "location": "Manali",
                "country": "India"
            }
        })
    }

    #[test]
    fn test_valid_listing_is_typed() {
        let input = validate_listing(&listing()).unwrap();
        assert_eq!(input.title, "Cozy Cabin");
        assert_eq!(input.price, 1500.0);
        assert_eq!(input.image, None);
        assert_eq!(input.country, "India");
    }

    #[test]
    fn test_method_override_key_is_ignored() {
        let mut payload = listing();
        payload["_method"] = json!("PUT");
        assert!(validate_listing(&payload).is_ok());
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let msg = message(validate_listing(&json!({ "listing": { "price": "10" } })));
        assert_eq!(
            msg,
            "\"listing.title\" is required,\"listing.description\" is required,\
             \"listing.location\" is required,\"listing.country\" is required"
        );
    }

    #[test]
    fn test_price_rules() {
        let mut payload = listing();
        payload["listing"]["price"] = json!("-1");
        assert_eq!(
            message(validate_listing(&payload)),
            "\"listing.price\" must be greater than or equal to 0"
        );

        payload["listing"]["price"] = json!("cheap");
        assert_eq!(message(validate_listing(&payload)), "\"listing.price\" must be a number");

        payload["listing"]["price"] = json!(0);
        assert_eq!(validate_listing(&payload).unwrap().price, 0.0);
    }

    #[test]
    fn test_negative_zero_price_is_plain_zero() {
        let mut payload = listing();
        payload["listing"]["price"] = json!("-0");
        let price = validate_listing(&payload).unwrap().price;
        assert_eq!(price, 0.0);
        assert!(price.is_sign_positive());
    }

    #[test]
    fn test_empty_and_unknown_fields() {
        let mut payload = listing();
        payload["listing"]["title"] = json!("");
        payload["listing"]["owner"] = json!("me");
        assert_eq!(
            message(validate_listing(&payload)),
            "\"listing.title\" is not allowed to be empty,\"listing.owner\" is not allowed"
        );
    }

    #[test]
    fn test_missing_or_wrong_section() {
        assert_eq!(message(validate_listing(&json!({}))), "\"listing\" is required");
        assert_eq!(
            message(validate_listing(&json!({ "listing": "x" }))),
            "\"listing\" must be of type object"
        );
    }

    #[test]
    fn test_foreign_section_is_rejected() {
        let mut payload = listing();
        payload["review"] = json!({ "rating": "6" });
        assert_eq!(message(validate_listing(&payload)), "\"review\" is not allowed");
    }

    #[test]
    fn test_review_rating_bounds() {
        let review = |rating: Value| json!({ "review": { "comment": "Great stay", "rating": rating } });

        assert_eq!(
            validate_review(&review(json!("5"))).unwrap(),
            ReviewInput { comment: "Great stay".into(), rating: 5 }
        );
        assert_eq!(
            message(validate_review(&review(json!("6")))),
            "\"review.rating\" must be less than or equal to 5"
        );
        assert_eq!(
            message(validate_review(&review(json!(0)))),
            "\"review.rating\" must be greater than or equal to 1"
        );
        assert_eq!(
            message(validate_review(&review(json!("4.5")))),
            "\"review.rating\" must be an integer"
        );
    }

    #[test]
    fn test_review_missing_comment() {
        let msg = message(validate_review(&json!({ "review": { "rating": "3" } })));
        assert_eq!(msg, "\"review.comment\" is required");
    }
}
