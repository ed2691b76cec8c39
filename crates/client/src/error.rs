//! Transport errors
//!
//! Every variant here is a request that produced no usable
//! `{code, message}` body. The form surfaces all of them with the same
//! generic alert; the detail only goes to the logs.

use thiserror::Error;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status
    #[error("Server returned status {status}")]
    Status { status: u16 },

    /// The response body was not a `{code, message}` object
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Whether the connection could not be established
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = ClientError::Status { status: 502 };
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "Server returned status 502");
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = ClientError::Parse("expected value".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_connect());
    }
}
