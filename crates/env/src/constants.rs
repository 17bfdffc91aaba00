//! Centralized constants for the postflight workspace.
//!
//! This module contains the fixed environment variable names used across
//! crates to avoid magic string duplication.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Variable the extracted authentication token is stored under.
pub const TOKEN_VAR: &str = "TOKEN";

/// Variable the user's id is stored under.
pub const USER_ID_VAR: &str = "userId";

/// Variable the user's email is stored under.
pub const USER_EMAIL_VAR: &str = "userEmail";

/// Variable the user's role is stored under.
pub const USER_ROLE_VAR: &str = "userRole";

/// Variable the user's full name is stored under.
pub const USER_FULL_NAME_VAR: &str = "userFullName";

/// Optional login response fields and the variables they map to.
///
/// Each entry is `(source field, environment variable)`. Fields absent from
/// the response are skipped; there is no placeholder value.
pub const OPTIONAL_FIELD_VARS: [(&str, &str); 4] = [
    ("id", USER_ID_VAR),
    ("email", USER_EMAIL_VAR),
    ("role", USER_ROLE_VAR),
    ("fullName", USER_FULL_NAME_VAR),
];

// =============================================================================
// Logging Defaults
// =============================================================================

/// Maximum number of token characters included in diagnostic log lines.
/// The full token is never logged.
pub const TOKEN_PREVIEW_LEN: usize = 20;
