//! User annotations carried alongside entities.
//!
//! Annotations are free-form key/value notes attached by tooling. They are
//! copied with the entity but never take part in diffs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An insertion-ordered string map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotations {
    entries: Vec<(String, String)>,
}

impl Annotations {
    /// Creates an empty annotation map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Stores `value` under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Removes every annotation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut notes = Annotations::new();
        notes.set("a", "1");
        notes.set("b", "2");
        notes.set("a", "3");

        let keys: Vec<_> = notes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(notes.get("a"), Some("3"));
    }

    #[test]
    fn remove_and_clear() {
        let mut notes = Annotations::new();
        notes.set("a", "1");
        assert_eq!(notes.remove("a"), Some("1".to_string()));
        assert_eq!(notes.remove("a"), None);
        notes.set("b", "2");
        notes.clear();
        assert!(notes.is_empty());
    }
}
