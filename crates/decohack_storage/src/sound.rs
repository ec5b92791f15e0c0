//! Sound effect rows.

use decohack_foundation::{FeatureLevel, Result, check_range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotations;
use crate::diff::{DiffBuilder, DiffField, Diffable};

/// Highest playback priority.
pub const MAX_PRIORITY: i32 = 127;

/// One row of the sound table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sound {
    name: String,
    priority: i32,
    singular: bool,
    annotations: Annotations,
}

impl Sound {
    /// Creates a sound row.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: i32, singular: bool) -> Self {
        Self {
            name: name.into(),
            priority,
            singular,
            annotations: Annotations::new(),
        }
    }

    /// Lump name without the `DS` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Playback priority.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Sets the playback priority.
    ///
    /// # Errors
    /// Fails if `priority` is outside `0..=127`.
    pub fn set_priority(&mut self, priority: i32) -> Result<()> {
        check_range("Priority", 0, MAX_PRIORITY.into(), priority.into())?;
        self.priority = priority;
        Ok(())
    }

    /// Whether only one instance may play at a time.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Sets the singular flag.
    pub fn set_singular(&mut self, singular: bool) {
        self.singular = singular;
    }
}

impl Diffable for Sound {
    fn diff(&self, baseline: &Self, _level: FeatureLevel) -> Vec<DiffField> {
        let mut out = DiffBuilder::new();
        out.field(
            "Zero/One",
            i64::from(self.singular),
            i64::from(baseline.singular),
        )
        .field("Value", self.priority.into(), baseline.priority.into());
        out.build()
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_range() {
        let mut s = Sound::new("PISTOL", 64, false);
        assert!(s.set_priority(128).is_err());
        assert!(s.set_priority(0).is_ok());
    }

    #[test]
    fn diff_orders_singular_before_value() {
        let base = Sound::new("PISTOL", 64, false);
        let mut s = base.clone();
        s.set_priority(100).unwrap();
        s.set_singular(true);
        assert_eq!(
            s.diff(&base, FeatureLevel::Boom),
            vec![DiffField::new("Zero/One", 1), DiffField::new("Value", 100)]
        );
    }
}
