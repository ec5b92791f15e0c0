//! Ammo type rows.

use decohack_foundation::{FeatureLevel, Result, check_range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotations;
use crate::diff::{DiffBuilder, DiffField, Diffable};

/// One row of the ammo table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ammo {
    name: String,
    max: i32,
    pickup: i32,
    annotations: Annotations,
}

impl Ammo {
    /// Creates an ammo row.
    #[must_use]
    pub fn new(name: impl Into<String>, max: i32, pickup: i32) -> Self {
        Self {
            name: name.into(),
            max,
            pickup,
            annotations: Annotations::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Maximum carried amount without a backpack.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Sets the maximum carried amount.
    ///
    /// # Errors
    /// Fails if `max` is negative.
    pub fn set_max(&mut self, max: i32) -> Result<()> {
        check_range("Max ammo", 0, i64::from(i32::MAX), max.into())?;
        self.max = max;
        Ok(())
    }

    /// Amount given by a small pickup.
    #[must_use]
    pub fn pickup(&self) -> i32 {
        self.pickup
    }

    /// Sets the pickup amount.
    ///
    /// # Errors
    /// Fails if `pickup` is negative.
    pub fn set_pickup(&mut self, pickup: i32) -> Result<()> {
        check_range("Pickup ammo", 0, i64::from(i32::MAX), pickup.into())?;
        self.pickup = pickup;
        Ok(())
    }
}

impl Diffable for Ammo {
    fn diff(&self, baseline: &Self, _level: FeatureLevel) -> Vec<DiffField> {
        let mut out = DiffBuilder::new();
        out.field("Max ammo", self.max.into(), baseline.max.into())
            .field("Per ammo", self.pickup.into(), baseline.pickup.into());
        out.build()
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}
