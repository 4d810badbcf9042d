//! Static lookup tables keyed by normalized strings

use std::collections::HashMap;

/// Read-only reference table.
///
/// The table owns its normalizer and applies it to every key part on both
/// insert and get. Composite keys join the normalized parts with `-`.
#[derive(Debug, Clone)]
pub struct LookupTable<V> {
    normalize: fn(&str) -> String,
    order: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> LookupTable<V> {
    pub fn new(normalize: fn(&str) -> String) -> Self {
        Self {
            normalize,
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a table from single-part keys
    pub fn from_entries<'a>(normalize: fn(&str) -> String, entries: impl IntoIterator<Item = (&'a str, V)>) -> Self {
        let mut table = Self::new(normalize);
        for (key, value) in entries {
            table.insert(&[key], value);
        }
        table
    }

    /// Canonical key for the given raw parts
    pub fn key(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| (self.normalize)(part))
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn insert(&mut self, parts: &[&str], value: V) {
        let key = self.key(parts);
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, parts: &[&str]) -> Option<&V> {
        self.entries.get(&self.key(parts))
    }

    pub fn contains(&self, parts: &[&str]) -> bool {
        self.get(parts).is_some()
    }

    /// Canonical keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
