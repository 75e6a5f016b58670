//! Gateway error type

use bookshelf_core::CatalogError;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned an error response (4xx or 5xx).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error text from the response body.
        message: String,
    },

    /// The response body was not JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The rows did not match the wire schema.
    #[error("Failed to decode rows: {0}")]
    Decode(#[from] CatalogError),
}

/// Error body the backend sends with 4xx/5xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

impl ClientError {
    /// Build an `Api` error from a status code and an optional parsed body.
    pub(crate) fn from_status(status: u16, body: Option<ApiErrorBody>) -> Self {
        Self::Api {
            status,
            message: body
                .map(|b| b.error)
                .unwrap_or_else(|| format!("Server returned status {status}")),
        }
    }

    /// Get the user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_timeout() {
                    "Request timed out.".to_string()
                } else if e.is_connect() {
                    "Unable to reach the catalog server.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            Self::Api { message, .. } => message.clone(),
            Self::Parse(_) | Self::Decode(_) => {
                "Received an unexpected response from the server.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Collection;

    #[test]
    fn test_api_error_from_body() {
        let err = ClientError::from_status(
            400,
            Some(ApiErrorBody {
                error: "Invalid email format".into(),
            }),
        );
        assert_eq!(err.user_message(), "Invalid email format");
        assert_eq!(err.to_string(), "API error (400): Invalid email format");
    }

    #[test]
    fn test_api_error_without_body() {
        let err = ClientError::from_status(404, None);
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(err.user_message(), "Server returned status 404");
    }

    #[test]
    fn test_decode_error_message() {
        let err: ClientError = CatalogError::RowTooShort {
            collection: Collection::Books,
            expected: 7,
            found: 3,
        }
        .into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(
            err.user_message(),
            "Received an unexpected response from the server."
        );
    }
}
