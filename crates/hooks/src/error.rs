//! Error types for hook execution.

use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors that abort a hook's execution.
///
/// Note the deliberate asymmetry: a malformed body on a successful (200)
/// response is a hook-execution error, while a malformed body on an error
/// response is only logged, since error bodies may legitimately be non-JSON.
#[derive(Error, Debug)]
pub enum HookError {
    /// Reading the response body failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The success-path response body was not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl HookError {
    /// Check if this error came from body parsing rather than transport.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidJson(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_parse_error() {
        let err: HookError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_parse_error_display_mentions_json() {
        let err: HookError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
