use serde::{Deserialize, Serialize};

use super::review::Review;

/// Shown when a listing is saved without an image.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1625505826533-5c80aca7d157?auto=format&fit=crop&w=800&q=60";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,          // Unique ID for the listing
    pub title: String,
    pub description: String,
    pub image: String,       // Image URL, never empty once stored
    pub price: f64,
    pub location: String,
    pub country: String,
    pub reviews: Vec<String>, // Review IDs in insertion order
}

/// Validated listing fields, as accepted by create and update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl ListingInput {
    // Empty and missing images both fall back to the placeholder
    pub fn image_or_default(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => DEFAULT_IMAGE,
        }
    }
}

impl From<&Listing> for ListingInput {
    fn from(listing: &Listing) -> Self {
        ListingInput {
            title: listing.title.clone(),
            description: listing.description.clone(),
            image: Some(listing.image.clone()),
            price: listing.price,
            location: listing.location.clone(),
            country: listing.country.clone(),
        }
    }
}

/// Price as shown on pages: whole amounts drop the decimals.
pub fn price_label(price: f64) -> String {
    let price = price + 0.0;
    if price.fract() == 0.0 {
        format!("\u{20b9}{price:.0}")
    } else {
        format!("\u{20b9}{price:.2}")
    }
}

/// A listing with its review references resolved to full records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub listing: Listing,
    pub reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(image: Option<&str>) -> ListingInput {
        ListingInput {
            title: "Cozy Cabin".into(),
            description: "A cabin in the woods".into(),
            image: image.map(Into::into),
            price: 1200.0,
            location: "Manali".into(),
            country: "India".into(),
        }
    }

    #[test]
    fn test_image_defaults_when_missing_or_blank() {
        assert_eq!(input(None).image_or_default(), DEFAULT_IMAGE);
        assert_eq!(input(Some("  ")).image_or_default(), DEFAULT_IMAGE);
        assert_eq!(
            input(Some("https://example.com/a.jpg")).image_or_default(),
            "https://example.com/a.jpg"
        );
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(1500.0), "\u{20b9}1500");
        assert_eq!(price_label(99.5), "\u{20b9}99.50");
        assert_eq!(price_label(-0.0), "\u{20b9}0");
    }
}
