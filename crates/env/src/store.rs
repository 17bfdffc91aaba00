//! Host environment store abstraction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mutable string key/value store owned by the host tool.
///
/// Hooks receive exclusive access to the store for the duration of one
/// invocation and write extracted variables into it. The store's lifecycle
/// (persistence across requests, sharing between hooks) is entirely the
/// host's concern.
pub trait EnvironmentStore {
    /// Look up a variable by name.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a variable. Last write wins.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`EnvironmentStore`] backed by a `HashMap`.
///
/// This is both the reference implementation for tests and a usable store
/// for hosts that keep environments in memory for the run. The serde derives
/// let a host persist an environment between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
}

impl MemoryEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvironmentStore for MemoryEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.vars.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_none_for_unset_key() {
        let env = MemoryEnvironment::new();
        assert!(env.get("TOKEN").is_none());
        assert!(env.is_empty());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut env = MemoryEnvironment::new();
        env.set("TOKEN", "abc123".to_string());
        assert_eq!(env.get("TOKEN"), Some("abc123".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut env = MemoryEnvironment::new();
        env.set("userRole", "PATIENT".to_string());
        env.set("userRole", "DOCTOR".to_string());
        assert_eq!(env.get("userRole"), Some("DOCTOR".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut env = MemoryEnvironment::new();
        env.set("TOKEN", "xyz".to_string());
        env.set("userId", "7".to_string());

        let json = serde_json::to_string(&env).unwrap();
        let restored: MemoryEnvironment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, env);
    }
}
