//! Browsers only submit GET and POST. A POST carrying `?_method=PUT` (or
//! `DELETE`) is re-labelled before routing so it reaches the matching route.
//! The same key sent as a form field is handled by the POST fallback routes
//! in [`crate::api`], since the body is not read here.
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    middleware::Next,
    web, Error,
};
use leptos::logging::log;
use std::collections::HashMap;

use crate::payload::METHOD_OVERRIDE_KEY;

/// Methods a POST may be turned into.
pub fn parse_override(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

pub async fn method_override(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if *req.method() == Method::POST {
        let requested = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.get(METHOD_OVERRIDE_KEY).and_then(|m| parse_override(m)));

        if let Some(method) = requested {
            log!("[API] {} {} overridden to {}", req.method(), req.path(), method);
            req.head_mut().method = method;
        }
    }

    next.call(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("put"), Some(Method::PUT));
        assert_eq!(parse_override(" DELETE "), Some(Method::DELETE));
        assert_eq!(parse_override("GET"), None);
        assert_eq!(parse_override(""), None);
    }
}
