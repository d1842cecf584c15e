//! The single failure type surfaced by every client operation.

/// Errors from the workflow-queue API layer.
///
/// Transport, server, and decoding failures are all normalised into
/// this one type. Nothing in the client recovers from or retries them.
#[derive(Debug, thiserror::Error)]
pub enum QueueApiError {
    /// No response came back: connection refused, DNS, TLS or timeout.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The queue answered, but with a non-2xx status.
    #[error("Queue API error ({status}): {body}")]
    Api {
        status: u16,
        /// Whatever the server sent back, kept verbatim for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API root could not be turned into a request URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl QueueApiError {
    /// HTTP status code for server-signalled failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_api_error() {
        let err = QueueApiError::Api {
            status: 404,
            body: "no such execution".to_string(),
        };
        assert_eq!(err.to_string(), "Queue API error (404): no such execution");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn display_request_error() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = QueueApiError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: QueueApiError = serde_err.into();
        assert!(err.to_string().starts_with("Failed to decode response"));
        assert_eq!(err.status(), None);
    }
}
