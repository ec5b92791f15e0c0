use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Par times in seconds, keyed by `(episode, map)`. Episode 0 means a
/// `MAPxx` level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParTable {
    entries: BTreeMap<(u32, u32), u32>,
}

impl ParTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Par time for a level.
    #[must_use]
    pub fn get(&self, episode: u32, map: u32) -> Option<u32> {
        self.entries.get(&(episode, map)).copied()
    }

    /// Sets the par time for a level.
    pub fn set(&mut self, episode: u32, map: u32, seconds: u32) {
        self.entries.insert((episode, map), seconds);
    }

    /// Whether no par times are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(episode, map, seconds)` in level order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.entries.iter().map(|(&(e, m), &s)| (e, m, s))
    }
}
