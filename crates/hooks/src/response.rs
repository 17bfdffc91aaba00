//! Response snapshot passed to hooks.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// An owned snapshot of an HTTP response, read-only to hooks.
///
/// Hooks run after the host has already received the response, so the body
/// is captured up front and parsed on demand. The snapshot carries no
/// connection state and can be re-run against any number of hooks.
#[derive(Debug, Clone)]
pub struct HookResponse {
    status: u16,
    body: Vec<u8>,
}

impl HookResponse {
    /// Create a snapshot from a status code and raw body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Capture a snapshot from a live response, consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::Http`] if reading the body fails.
    pub async fn from_http(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, body_len = body.len(), "Captured response snapshot");
        Ok(Self { status, body })
    }

    /// The response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::InvalidJson`] if the body is not valid
    /// JSON. Callers on the diagnostic path are expected to catch this.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
