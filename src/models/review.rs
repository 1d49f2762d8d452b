// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,         // Unique ID for the review
    pub comment: String,    // Content of the review
    pub rating: u8,         // 1 to 5
    pub created_at: String, // RFC 3339 creation time
}

/// Validated review fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewInput {
    pub comment: String,
    pub rating: u8,
}
