//! Response body models.

use serde::Deserialize;

/// Error payload the backend emits on failed logins.
///
/// Used only to pretty up the non-200 diagnostic log line; bodies that do
/// not match fall back to being logged as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Short error category, e.g. "Authentication failed".
    pub error: String,
    /// Human-readable detail message.
    pub message: String,
}
