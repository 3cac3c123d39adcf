use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only access to a key/value environment.
///
/// The validator only ever asks "is this key set to something", so any
/// map-like store can stand in for the process environment.
pub trait EnvSource {
    /// Get the raw value for `key`, or `None` if it is not set.
    fn get_var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set to a non-empty value.
    fn has_value(&self, key: &str) -> bool {
        self.get_var(key).is_some_and(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_var(&self, key: &str) -> Option<String> {
        // Non-unicode values still count as set
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn get_var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}
