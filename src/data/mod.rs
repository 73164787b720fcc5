//! Core data models for Revboard
//!
//! This module contains the review record as served by the backend and the
//! HTTP client used to fetch it.

pub mod reviews;

pub use reviews::{FetchError, ReviewsClient};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a review as served by the backend.
///
/// The API serves ids either as JSON numbers or as strings depending on the
/// backing store; both forms are accepted and kept verbatim. Used as the
/// stable display key for table rows across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    /// Numeric id (e.g. an auto-increment primary key)
    Number(i64),
    /// String id
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(n) => write!(f, "{}", n),
            ReviewId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single product review as received from the server.
///
/// Fields are passed through without validation or normalization; in
/// particular `created_at` stays the raw timestamp string and is only
/// converted to local time at render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique, stable identifier
    pub id: ReviewId,
    /// Name of the reviewed product
    pub product_name: String,
    /// Name of the reviewer
    pub user_name: String,
    /// Review text
    pub product_review: String,
    /// Creation timestamp as an ISO-8601-like string
    pub created_at: String,
}
