//! Failures of the single users fetch.
//!
//! Every variant is terminal for the current mount. The `Display` text is
//! exactly what the error view shows.

use thiserror::Error;

/// Network/fetch-related errors for the users request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Response received with a non-2xx status.
    #[error("Error: {status}{}", status_text_suffix(.status_text))]
    HttpStatus { status: u16, status_text: String },

    /// Response received with a 2xx status other than 200.
    #[error("Error: Received status code {0}")]
    UnexpectedStatus(u16),

    /// Request was sent but no response came back (network down, CORS).
    #[error("Error: No response received from server")]
    NoResponse,

    /// Request construction, body read, or decode failure.
    #[error("Error: {0}")]
    Request(String),
}

fn status_text_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(" - {}", status_text)
    }
}

impl FetchError {
    /// Classify a received response status.
    ///
    /// Only 200 counts as success; other 2xx codes are reported separately
    /// from error statuses.
    pub fn check_status(status: u16, status_text: &str) -> Result<(), Self> {
        match status {
            200 => Ok(()),
            200..=299 => Err(Self::UnexpectedStatus(status)),
            _ => Err(Self::HttpStatus {
                status,
                status_text: status_text.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = FetchError::HttpStatus {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 404 - Not Found");
    }

    #[test]
    fn test_http_status_without_text() {
        let err = FetchError::HttpStatus {
            status: 503,
            status_text: String::new(),
        };
        assert_eq!(err.to_string(), "Error: 503");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            FetchError::NoResponse.to_string(),
            "Error: No response received from server"
        );
        assert_eq!(
            FetchError::UnexpectedStatus(204).to_string(),
            "Error: Received status code 204"
        );
        assert_eq!(
            FetchError::Request("invalid URL".to_string()).to_string(),
            "Error: invalid URL"
        );
    }

    #[test]
    fn test_check_status() {
        assert_eq!(FetchError::check_status(200, "OK"), Ok(()));
        assert_eq!(
            FetchError::check_status(204, "No Content"),
            Err(FetchError::UnexpectedStatus(204))
        );
        assert_eq!(
            FetchError::check_status(500, "Internal Server Error"),
            Err(FetchError::HttpStatus {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
        );
        assert!(matches!(
            FetchError::check_status(301, ""),
            Err(FetchError::HttpStatus { status: 301, .. })
        ));
    }
}
