//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when fetching the catalog.
///
/// The sub-causes exist for logging and tests; at the store boundary they
/// all collapse to a single user-visible message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
            }
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = FetchError::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let bad: Result<Vec<u64>, serde_json::Error> = serde_json::from_str("not json");
        let err: FetchError = bad.unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
