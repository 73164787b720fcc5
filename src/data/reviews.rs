//! Reviews API client
//!
//! This module performs one round-trip to the reviews endpoint and returns
//! the decoded collection, or a single error type covering transport,
//! status, and decode failures.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::Review;

/// Default endpoint when no --url is given (dev backend on localhost)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/reviews";

/// Per-request timeout. Kept below the 5s refresh interval so outstanding
/// fetches cannot pile up across ticks.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Errors that can occur when fetching the review collection
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (no usable response)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status code: {0}")]
    BadStatus(StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching the review collection from the backend
#[derive(Debug, Clone)]
pub struct ReviewsClient {
    client: Client,
    endpoint: String,
}

impl Default for ReviewsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ReviewsClient {
    /// Create a new ReviewsClient for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a new ReviewsClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint URL this client targets
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full review collection
    ///
    /// # Returns
    /// * `Ok(Vec<Review>)` - The decoded collection in server order
    /// * `Err(FetchError)` - If the request, status, or parsing fails
    pub async fn fetch_reviews(&self) -> Result<Vec<Review>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        let text = response.text().await?;
        let reviews: Vec<Review> = serde_json::from_str(&text)?;

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReviewId;

    /// Sample valid reviews payload as served by the backend
    const VALID_RESPONSE: &str = r#"[
        {
            "id": 1,
            "product_name": "Widget",
            "user_name": "Ann",
            "product_review": "Great",
            "created_at": "2024-01-01T00:00:00Z"
        },
        {
            "id": 2,
            "product_name": "Gadget",
            "user_name": "Bob",
            "product_review": "Works as advertised",
            "created_at": "2024-01-02T12:30:00Z"
        },
        {
            "id": "legacy-3",
            "product_name": "Sprocket",
            "user_name": "Cam",
            "product_review": "Could be better",
            "created_at": "2024-01-03T08:15:00Z"
        }
    ]"#;

    #[test]
    fn test_parse_valid_response() {
        let reviews: Vec<Review> =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].id, ReviewId::Number(1));
        assert_eq!(reviews[0].product_name, "Widget");
        assert_eq!(reviews[1].user_name, "Bob");
        assert_eq!(reviews[2].id, ReviewId::Text("legacy-3".to_string()));
    }

    #[test]
    fn test_parse_preserves_server_order() {
        let reviews: Vec<Review> =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        let ids: Vec<String> = reviews.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "legacy-3"]);
    }

    #[test]
    fn test_parse_empty_array() {
        let reviews: Vec<Review> = serde_json::from_str("[]").expect("Failed to parse empty array");
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let malformed = "{ invalid json }";
        let result: Result<Vec<Review>, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_object_instead_of_array_is_an_error() {
        let object = r#"{"detail": "Internal Server Error"}"#;
        let result: Result<Vec<Review>, _> = serde_json::from_str(object);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_default_targets_default_endpoint() {
        let client = ReviewsClient::default();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_new_keeps_custom_endpoint() {
        let client = ReviewsClient::new("http://example.com/api/reviews");
        assert_eq!(client.endpoint(), "http://example.com/api/reviews");
    }

    #[test]
    fn test_request_timeout_is_shorter_than_refresh_interval() {
        assert!(REQUEST_TIMEOUT < Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_fetch_against_unreachable_endpoint_fails() {
        // Port 1 is never listening; the connect error must surface as a
        // FetchError rather than a panic.
        let client = ReviewsClient::new("http://127.0.0.1:1/api/reviews");
        let result = client.fetch_reviews().await;

        match result {
            Err(FetchError::RequestFailed(_)) => {}
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }
}
