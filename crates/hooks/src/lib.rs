//! Post-response hooks for API test clients.
//!
//! This crate provides the hook runtime invoked by a host tool immediately
//! after a response is received: a read-only response snapshot, named check
//! reporting, and the login token extractor that persists the token and a
//! few user fields into the host's environment store.

pub mod error;
mod extract;
mod hook;
mod models;
mod report;
mod response;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use error::{HookError, Result};
pub use extract::TokenExtractor;
pub use hook::ResponseHook;
pub use models::ErrorBody;
pub use report::{Check, HookReport};
pub use response::HookResponse;
