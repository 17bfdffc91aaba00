//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader and the types most tests need, used via
//! `use common::*;` in test files.

// Re-export test utilities from postflight-hooks
#[allow(unused_imports)]
pub use postflight_hooks::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use postflight_env::{EnvironmentStore, MemoryEnvironment};
#[allow(unused_imports)]
pub use postflight_hooks::{HookResponse, ResponseHook, TokenExtractor};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
