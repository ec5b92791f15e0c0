//! The singleton table of global gameplay constants.

use decohack_foundation::{FeatureLevel, Result, check_range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotations;
use crate::diff::{DiffBuilder, DiffField, Diffable};

/// Exported `Monsters Infight` value when infighting is on.
pub const INFIGHT_ON: i64 = 202;
/// Exported `Monsters Infight` value when infighting is off.
pub const INFIGHT_OFF: i64 = 221;

/// Global constants such as starting health and armor classes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Misc {
    initial_health: i32,
    initial_bullets: i32,
    max_health: i32,
    max_armor: i32,
    green_armor_class: i32,
    blue_armor_class: i32,
    max_soulsphere_health: i32,
    soulsphere_health: i32,
    megasphere_health: i32,
    god_mode_health: i32,
    idfa_armor: i32,
    idfa_armor_class: i32,
    idkfa_armor: i32,
    idkfa_armor_class: i32,
    bfg_cells_per_shot: i32,
    monster_infighting: bool,
    annotations: Annotations,
}

impl Default for Misc {
    fn default() -> Self {
        Self {
            initial_health: 100,
            initial_bullets: 50,
            max_health: 200,
            max_armor: 200,
            green_armor_class: 1,
            blue_armor_class: 2,
            max_soulsphere_health: 200,
            soulsphere_health: 100,
            megasphere_health: 200,
            god_mode_health: 100,
            idfa_armor: 200,
            idfa_armor_class: 2,
            idkfa_armor: 200,
            idkfa_armor_class: 2,
            bfg_cells_per_shot: 40,
            monster_infighting: false,
            annotations: Annotations::new(),
        }
    }
}

macro_rules! misc_field {
    ($get:ident, $set:ident, $label:literal) => {
        #[doc = concat!("Current ", $label, " value.")]
        #[must_use]
        pub fn $get(&self) -> i32 {
            self.$get
        }

        #[doc = concat!("Sets ", $label, ".")]
        ///
        /// # Errors
        /// Fails if the value is negative.
        pub fn $set(&mut self, value: i32) -> Result<()> {
            check_range($label, 0, i64::from(i32::MAX), value.into())?;
            self.$get = value;
            Ok(())
        }
    };
}

impl Misc {
    /// Creates the table with vanilla values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    misc_field!(initial_health, set_initial_health, "Initial Health");
    misc_field!(initial_bullets, set_initial_bullets, "Initial Bullets");
    misc_field!(max_health, set_max_health, "Max Health");
    misc_field!(max_armor, set_max_armor, "Max Armor");
    misc_field!(green_armor_class, set_green_armor_class, "Green Armor Class");
    misc_field!(blue_armor_class, set_blue_armor_class, "Blue Armor Class");
    misc_field!(max_soulsphere_health, set_max_soulsphere_health, "Max Soulsphere");
    misc_field!(soulsphere_health, set_soulsphere_health, "Soulsphere Health");
    misc_field!(megasphere_health, set_megasphere_health, "Megasphere Health");
    misc_field!(god_mode_health, set_god_mode_health, "God Mode Health");
    misc_field!(idfa_armor, set_idfa_armor, "IDFA Armor");
    misc_field!(idfa_armor_class, set_idfa_armor_class, "IDFA Armor Class");
    misc_field!(idkfa_armor, set_idkfa_armor, "IDKFA Armor");
    misc_field!(idkfa_armor_class, set_idkfa_armor_class, "IDKFA Armor Class");
    misc_field!(bfg_cells_per_shot, set_bfg_cells_per_shot, "BFG Cells/Shot");

    /// Whether monsters of the same species fight each other.
    #[must_use]
    pub fn monster_infighting(&self) -> bool {
        self.monster_infighting
    }

    /// Sets the infighting flag.
    pub fn set_monster_infighting(&mut self, enabled: bool) {
        self.monster_infighting = enabled;
    }

    fn infight_value(&self) -> i64 {
        if self.monster_infighting {
            INFIGHT_ON
        } else {
            INFIGHT_OFF
        }
    }
}

impl Diffable for Misc {
    fn diff(&self, baseline: &Self, _level: FeatureLevel) -> Vec<DiffField> {
        let mut out = DiffBuilder::new();
        for (name, value, base) in [
            ("Initial Health", self.initial_health, baseline.initial_health),
            ("Initial Bullets", self.initial_bullets, baseline.initial_bullets),
            ("Max Health", self.max_health, baseline.max_health),
            ("Max Armor", self.max_armor, baseline.max_armor),
            ("Green Armor Class", self.green_armor_class, baseline.green_armor_class),
            ("Blue Armor Class", self.blue_armor_class, baseline.blue_armor_class),
            ("Max Soulsphere", self.max_soulsphere_health, baseline.max_soulsphere_health),
            ("Soulsphere Health", self.soulsphere_health, baseline.soulsphere_health),
            ("Megasphere Health", self.megasphere_health, baseline.megasphere_health),
            ("God Mode Health", self.god_mode_health, baseline.god_mode_health),
            ("IDFA Armor", self.idfa_armor, baseline.idfa_armor),
            ("IDFA Armor Class", self.idfa_armor_class, baseline.idfa_armor_class),
            ("IDKFA Armor", self.idkfa_armor, baseline.idkfa_armor),
            ("IDKFA Armor Class", self.idkfa_armor_class, baseline.idkfa_armor_class),
            ("BFG Cells/Shot", self.bfg_cells_per_shot, baseline.bfg_cells_per_shot),
        ] {
            out.field(name, value.into(), base.into());
        }
        out.field("Monsters Infight", self.infight_value(), baseline.infight_value());
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
    fn vanilla_defaults() {
        let m = Misc::new();
        assert_eq!(m.initial_health(), 100);
        assert_eq!(m.bfg_cells_per_shot(), 40);
        assert!(!m.monster_infighting());
    }

    #[test]
    fn infighting_exports_magic_values() {
        let base = Misc::new();
        let mut m = Misc::new();
        m.set_monster_infighting(true);
        assert_eq!(
            m.diff(&base, FeatureLevel::Doom19),
            vec![DiffField::new("Monsters Infight", INFIGHT_ON)]
        );
    }

    #[test]
    fn negative_values_rejected() {
        let mut m = Misc::new();
        assert!(m.set_max_armor(-5).is_err());
        assert_eq!(m.max_armor(), 200);
    }
}
