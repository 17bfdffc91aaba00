//! Login token extraction hook.

use postflight_env::constants::{OPTIONAL_FIELD_VARS, TOKEN_PREVIEW_LEN, TOKEN_VAR};
use postflight_env::EnvironmentStore;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::hook::ResponseHook;
use crate::models::ErrorBody;
use crate::report::HookReport;
use crate::response::HookResponse;

/// Check name for the unconditional status assertion.
const STATUS_CHECK: &str = "status code is 200";

/// Check name recorded when a 200 body carries no usable token.
const TOKEN_EXISTS_CHECK: &str = "token exists in response";

/// Check name for the post-write self-check.
const TOKEN_STORED_CHECK: &str = "token stored in environment";

/// Hook that pulls the authentication token and a few user fields out of a
/// login response and persists them as environment variables.
///
/// On a 200 response with a non-empty `token` field it writes `TOKEN` and,
/// for each optional field present (`id`, `email`, `role`, `fullName`), the
/// matching `user*` variable. Any other outcome leaves the environment
/// untouched and is reported through named checks, except a malformed
/// success body, which aborts the run with
/// [`HookError::InvalidJson`](crate::HookError::InvalidJson).
#[derive(Debug, Clone, Default)]
pub struct TokenExtractor;

impl TokenExtractor {
    /// Create the extractor.
    pub fn new() -> Self {
        Self
    }

    /// Log whatever diagnostics the error body offers.
    ///
    /// Error bodies may legitimately be non-JSON (proxies, HTML error
    /// pages), so parse failures here are logged and swallowed rather than
    /// propagated.
    fn log_error_body(response: &HookResponse) {
        match response.json() {
            Ok(body) => match serde_json::from_value::<ErrorBody>(body.clone()) {
                Ok(err) => error!(error = %err.error, message = %err.message, "Server error"),
                Err(_) => error!(body = %body, "Server error body"),
            },
            Err(e) => error!("Failed to read error body as JSON: {}", e),
        }
    }

    /// String form of a JSON value as the environment stores it.
    ///
    /// Strings are taken verbatim (no surrounding quotes), other non-null
    /// values use their JSON rendering (`7` → `"7"`). Null and absent
    /// fields yield `None`.
    fn stringify(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl ResponseHook for TokenExtractor {
    fn name(&self) -> &str {
        "login token extraction"
    }

    fn run(&self, response: &HookResponse, env: &mut dyn EnvironmentStore) -> Result<HookReport> {
        let mut report = HookReport::new();

        let status_ok = response.status() == 200;
        report.record(STATUS_CHECK, status_ok);

        if !status_ok {
            error!(status = response.status(), "Login request failed");
            Self::log_error_body(response);
            return Ok(report);
        }

        // Success-path parse failures abort the hook.
        let body = response.json()?;

        let token = Self::stringify(&body["token"]).filter(|t| !t.is_empty());
        let Some(token) = token else {
            error!("Token not found in login response");
            report.record(TOKEN_EXISTS_CHECK, false);
            return Ok(report);
        };

        let preview: String = token.chars().take(TOKEN_PREVIEW_LEN).collect();
        env.set(TOKEN_VAR, token);
        report.note_written(TOKEN_VAR);

        for (field, var) in OPTIONAL_FIELD_VARS {
            if let Some(value) = Self::stringify(&body[field]) {
                debug!(field, var, "Storing optional login field");
                env.set(var, value);
                report.note_written(var);
            }
        }

        info!(
            token_preview = %format!("{}...", preview),
            user_id = env.get("userId").as_deref().unwrap_or("-"),
            user_role = env.get("userRole").as_deref().unwrap_or("-"),
            "Token extracted and stored"
        );

        // Self-check that the write actually landed in the host's store.
        let stored = env.get(TOKEN_VAR).is_some_and(|t| !t.is_empty());
        report.record(TOKEN_STORED_CHECK, stored);

        Ok(report)
    }
}
