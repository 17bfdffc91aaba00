//! Named check records produced by hook runs.

use serde::Serialize;

/// Outcome of a single named check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Check {
    /// Human-readable check name, stable across runs.
    pub name: &'static str,
    /// Whether the check passed.
    pub passed: bool,
}

/// Report accumulated over one hook invocation.
///
/// A failed check does not stop the hook; independent checks keep running
/// and the host renders the full list. Fatal conditions (success-body parse
/// failures) surface as errors instead and never produce a report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HookReport {
    checks: Vec<Check>,
    vars_written: Vec<&'static str>,
}

impl HookReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a named check.
    pub(crate) fn record(&mut self, name: &'static str, passed: bool) {
        self.checks.push(Check { name, passed });
    }

    /// Note that an environment variable was written.
    pub(crate) fn note_written(&mut self, var: &'static str) {
        self.vars_written.push(var);
    }

    /// All checks in the order they ran.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Names of environment variables written during the run.
    pub fn vars_written(&self) -> &[&'static str] {
        &self.vars_written
    }

    /// True if every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Checks that failed, in order.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }
}
