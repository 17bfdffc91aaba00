//! The hook seam invoked by host tools.

use postflight_env::EnvironmentStore;

use crate::error::Result;
use crate::report::HookReport;
use crate::response::HookResponse;

/// A hook the host runs against each received response.
///
/// Hooks get a read-only response snapshot and exclusive access to the
/// host's environment store for the duration of the call. Returning an
/// error marks the hook execution itself as failed; ordinary failed checks
/// belong in the [`HookReport`] instead.
pub trait ResponseHook {
    /// Name the host uses to attribute checks in its report.
    fn name(&self) -> &str;

    /// Run the hook against a response.
    ///
    /// # Errors
    ///
    /// Implementations should reserve errors for conditions that make the
    /// run itself meaningless (for example an unreadable success body), not
    /// for assertion failures.
    fn run(&self, response: &HookResponse, env: &mut dyn EnvironmentStore) -> Result<HookReport>;
}
