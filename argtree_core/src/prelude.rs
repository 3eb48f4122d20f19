//! Traits which, typically, may be imported without concern: `use argtree::prelude::*`.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Behaviour for receiving the `(key, value)` pairs of a parsed command line.
// Needs to be imported in order to implement a custom `ConfigurationSink`.
pub trait ConfigurationSink {
    /// Record `value` under `key`; a later value for the same key replaces the earlier one.
    fn set(&mut self, key: String, value: String);
}

impl ConfigurationSink for Vec<(String, String)> {
    fn set(&mut self, key: String, value: String) {
        self.push((key, value));
    }
}

impl<S: BuildHasher> ConfigurationSink for HashMap<String, String, S> {
    fn set(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl ConfigurationSink for BTreeMap<String, String> {
    fn set(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}
