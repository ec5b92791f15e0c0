//! Actor template rows.
//!
//! A [`Thing`] holds the numeric properties of one actor type plus its
//! named state entry points. Entry points live in a case-insensitive label
//! map so new hooks need no schema change.

use std::collections::BTreeMap;

use decohack_foundation::{Error, FeatureLevel, Result, check_range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotations;
use crate::diff::{DiffBuilder, DiffField, Diffable};

/// Editor number meaning "not placeable".
pub const EDITOR_NUMBER_NONE: i32 = -1;
/// Fast speed meaning "same as speed".
pub const DEFAULT_FAST_SPEED: i32 = -1;
/// Default MBF21 melee range in map units.
pub const DEFAULT_MELEE_RANGE: i32 = 64;
/// Sound position meaning "no sound".
pub const SOUND_NONE: i32 = 0;
/// The `MISSILE` bit of [`Thing::flags`].
pub const FLAG_MISSILE: i32 = 0x0001_0000;

/// Well-known state label names.
pub mod label {
    /// Spawn/idle entry.
    pub const SPAWN: &str = "spawn";
    /// Chase entry.
    pub const SEE: &str = "see";
    /// Pain entry.
    pub const PAIN: &str = "pain";
    /// Melee attack entry.
    pub const MELEE: &str = "melee";
    /// Ranged attack entry.
    pub const MISSILE: &str = "missile";
    /// Death entry.
    pub const DEATH: &str = "death";
    /// Gibbed death entry.
    pub const XDEATH: &str = "xdeath";
    /// Resurrection entry.
    pub const RAISE: &str = "raise";
}

/// One row of the thing table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thing {
    name: String,
    editor_number: i32,
    health: i32,
    speed: i32,
    radius: i32,
    height: i32,
    damage: i32,
    reaction_time: i32,
    pain_chance: i32,
    flags: i32,
    mass: i32,
    labels: BTreeMap<String, i32>,
    see_sound: i32,
    attack_sound: i32,
    pain_sound: i32,
    death_sound: i32,
    active_sound: i32,
    dropped_item: i32,
    mbf21_flags: i32,
    infighting_group: i32,
    projectile_group: i32,
    splash_group: i32,
    fast_speed: i32,
    melee_range: i32,
    rip_sound: i32,
    annotations: Annotations,
}

impl Default for Thing {
    fn default() -> Self {
        Self {
            name: String::new(),
            editor_number: EDITOR_NUMBER_NONE,
            health: 0,
            speed: 0,
            radius: 0,
            height: 0,
            damage: 0,
            reaction_time: 0,
            pain_chance: 0,
            flags: 0,
            mass: 0,
            labels: BTreeMap::new(),
            see_sound: SOUND_NONE,
            attack_sound: SOUND_NONE,
            pain_sound: SOUND_NONE,
            death_sound: SOUND_NONE,
            active_sound: SOUND_NONE,
            dropped_item: 0,
            mbf21_flags: 0,
            infighting_group: 0,
            projectile_group: 0,
            splash_group: 0,
            fast_speed: DEFAULT_FAST_SPEED,
            melee_range: DEFAULT_MELEE_RANGE,
            rip_sound: SOUND_NONE,
            annotations: Annotations::new(),
        }
    }
}

macro_rules! ranged_field {
    ($(#[$doc:meta])* $get:ident, $set:ident, $field:ident, $label:literal, $min:expr, $max:expr) => {
        $(#[$doc])*
        #[must_use]
        pub fn $get(&self) -> i32 {
            self.$field
        }

        $(#[$doc])*
        ///
        /// # Errors
        #[doc = concat!("Fails if the value is outside the legal ", $label, " range.")]
        pub fn $set(&mut self, value: i32) -> Result<()> {
            check_range($label, i64::from($min), i64::from($max), i64::from(value))?;
            self.$field = value;
            Ok(())
        }
    };
}

impl Thing {
    /// Creates a blank thing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Map editor number; `-1` means none.
    #[must_use]
    pub fn editor_number(&self) -> i32 {
        self.editor_number
    }

    /// Sets the map editor number.
    ///
    /// # Errors
    /// Fails if the number is 0 or outside `-1..=65536`.
    pub fn set_editor_number(&mut self, number: i32) -> Result<()> {
        if number == 0 {
            return Err(Error::invalid_value("Editor number can not be 0"));
        }
        check_range("Editor number", -1, 0x10000, i64::from(number))?;
        self.editor_number = number;
        Ok(())
    }

    ranged_field!(
        /// Spawn health.
        health, set_health, health, "Health", 0, 999_999
    );
    ranged_field!(
        /// Movement speed.
        speed, set_speed, speed, "Speed", -32768, 32767
    );
    ranged_field!(
        /// Collision radius in map units.
        radius, set_radius, radius, "Radius", 0, 65535
    );
    ranged_field!(
        /// Collision height in map units.
        height, set_height, height, "Height", 0, 65535
    );
    ranged_field!(
        /// Missile impact damage.
        damage, set_damage, damage, "Damage", -999_999, 999_999
    );
    ranged_field!(
        /// Tics before the first attack.
        reaction_time, set_reaction_time, reaction_time, "Reaction time", 0, i32::MAX
    );
    ranged_field!(
        /// Chance out of 256 of entering pain.
        pain_chance, set_pain_chance, pain_chance, "Pain chance", 0, i32::MAX
    );
    ranged_field!(
        /// Mass.
        mass, set_mass, mass, "Mass", 0, i32::MAX
    );
    ranged_field!(
        /// Thing index dropped on death; 0 for none.
        dropped_item, set_dropped_item, dropped_item, "Dropped item", 0, i32::MAX
    );
    ranged_field!(
        /// MBF21 infighting group.
        infighting_group, set_infighting_group, infighting_group, "Infighting group", 0, i32::MAX
    );
    ranged_field!(
        /// MBF21 projectile group; `-1` means no projectile immunity.
        projectile_group, set_projectile_group, projectile_group, "Projectile group", -1, i32::MAX
    );
    ranged_field!(
        /// MBF21 splash group.
        splash_group, set_splash_group, splash_group, "Splash group", 0, i32::MAX
    );
    ranged_field!(
        /// MBF21 fast-monsters speed; `-1` means same as speed.
        fast_speed, set_fast_speed, fast_speed, "Fast speed", -1, 65535
    );
    ranged_field!(
        /// MBF21 melee range in map units.
        melee_range, set_melee_range, melee_range, "Melee range", 0, 65535
    );
    ranged_field!(
        /// Alert sound position (1-based, 0 for none).
        see_sound, set_see_sound, see_sound, "Alert sound position", 0, i32::MAX
    );
    ranged_field!(
        /// Attack sound position (1-based, 0 for none).
        attack_sound, set_attack_sound, attack_sound, "Attack sound position", 0, i32::MAX
    );
    ranged_field!(
        /// Pain sound position (1-based, 0 for none).
        pain_sound, set_pain_sound, pain_sound, "Pain sound position", 0, i32::MAX
    );
    ranged_field!(
        /// Death sound position (1-based, 0 for none).
        death_sound, set_death_sound, death_sound, "Death sound position", 0, i32::MAX
    );
    ranged_field!(
        /// Active sound position (1-based, 0 for none).
        active_sound, set_active_sound, active_sound, "Active sound position", 0, i32::MAX
    );
    ranged_field!(
        /// MBF21 rip sound position (1-based, 0 for none).
        rip_sound, set_rip_sound, rip_sound, "Rip sound position", 0, i32::MAX
    );

    /// Behavior flag bits.
    #[must_use]
    pub fn flags(&self) -> i32 {
        self.flags
    }

    /// Sets the behavior flag bits.
    pub fn set_flags(&mut self, flags: i32) {
        self.flags = flags;
    }

    /// MBF21 flag bits.
    #[must_use]
    pub fn mbf21_flags(&self) -> i32 {
        self.mbf21_flags
    }

    /// Sets the MBF21 flag bits.
    pub fn set_mbf21_flags(&mut self, flags: i32) {
        self.mbf21_flags = flags;
    }

    /// Whether the `MISSILE` flag is set.
    #[must_use]
    pub fn is_projectile(&self) -> bool {
        self.flags & FLAG_MISSILE != 0
    }

    /// State index bound to `name`, or 0 if unbound.
    #[must_use]
    pub fn label(&self, name: &str) -> i32 {
        self.labels
            .get(&name.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Binds `name` to a state index. Binding to 0 removes the label.
    ///
    /// # Errors
    /// Fails if `index` is negative.
    pub fn set_label(&mut self, name: &str, index: i32) -> Result<()> {
        if index < 0 {
            return Err(Error::field_range("State label index", 0, i64::from(i32::MAX), index.into()));
        }
        let key = name.to_ascii_lowercase();
        if index == 0 {
            self.labels.remove(&key);
        } else {
            self.labels.insert(key, index);
        }
        Ok(())
    }

    /// Bound labels, lowercased, in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, i32)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Removes every label.
    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    fn export_speed(&self) -> i64 {
        let speed = i64::from(self.speed);
        if self.is_projectile() { speed << 16 } else { speed }
    }

    fn export_fast_speed(&self) -> i64 {
        let fast = i64::from(self.fast_speed);
        if self.is_projectile() && self.fast_speed != DEFAULT_FAST_SPEED {
            fast << 16
        } else {
            fast
        }
    }
}

impl Diffable for Thing {
    fn diff(&self, baseline: &Self, level: FeatureLevel) -> Vec<DiffField> {
        let mut out = DiffBuilder::new();
        out.field(
            "ID #",
            self.editor_number.into(),
            baseline.editor_number.into(),
        )
        .field("Hit points", self.health.into(), baseline.health.into())
        .field("Speed", self.export_speed(), baseline.export_speed());

        // Width, height and melee range are always 16.16 on export.
        if self.radius != baseline.radius {
            out.push(DiffField::new("Width", i64::from(self.radius) << 16));
        }
        if self.height != baseline.height {
            out.push(DiffField::new("Height", i64::from(self.height) << 16));
        }

        out.field("Missile damage", self.damage.into(), baseline.damage.into())
            .field(
                "Reaction time",
                self.reaction_time.into(),
                baseline.reaction_time.into(),
            )
            .field(
                "Pain chance",
                self.pain_chance.into(),
                baseline.pain_chance.into(),
            )
            .field("Bits", self.flags.into(), baseline.flags.into())
            .field("Mass", self.mass.into(), baseline.mass.into());

        for (attribute, name) in [
            ("Initial frame", label::SPAWN),
            ("First moving frame", label::SEE),
            ("Injury frame", label::PAIN),
            ("Close attack frame", label::MELEE),
            ("Far attack frame", label::MISSILE),
            ("Death frame", label::DEATH),
            ("Exploding frame", label::XDEATH),
            ("Respawn frame", label::RAISE),
        ] {
            out.field(
                attribute,
                self.label(name).into(),
                baseline.label(name).into(),
            );
        }

        out.field("Alert sound", self.see_sound.into(), baseline.see_sound.into())
            .field(
                "Action sound",
                self.active_sound.into(),
                baseline.active_sound.into(),
            )
            .field(
                "Attack sound",
                self.attack_sound.into(),
                baseline.attack_sound.into(),
            )
            .field("Pain sound", self.pain_sound.into(), baseline.pain_sound.into())
            .field(
                "Death sound",
                self.death_sound.into(),
                baseline.death_sound.into(),
            );

        if level.supports(FeatureLevel::Mbf21) {
            out.field(
                "Dropped item",
                self.dropped_item.into(),
                baseline.dropped_item.into(),
            )
            .field(
                "MBF21 Bits",
                self.mbf21_flags.into(),
                baseline.mbf21_flags.into(),
            )
            .field(
                "Infighting group",
                self.infighting_group.into(),
                baseline.infighting_group.into(),
            )
            .field(
                "Projectile group",
                self.projectile_group.into(),
                baseline.projectile_group.into(),
            )
            .field(
                "Splash group",
                self.splash_group.into(),
                baseline.splash_group.into(),
            )
            .field(
                "Fast speed",
                self.export_fast_speed(),
                baseline.export_fast_speed(),
            );
            if self.melee_range != baseline.melee_range {
                out.push(DiffField::new(
                    "Melee range",
                    i64::from(self.melee_range) << 16,
                ));
            }
            out.field("Rip sound", self.rip_sound.into(), baseline.rip_sound.into());
        }
        out.build()
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

/// Compact constructor for baseline rows.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ThingDef {
    pub name: &'static str,
    pub editor_number: i32,
    pub spawn: i32,
    pub health: i32,
    pub see: i32,
    pub see_sound: i32,
    pub reaction_time: i32,
    pub attack_sound: i32,
    pub pain: i32,
    pub pain_chance: i32,
    pub pain_sound: i32,
    pub melee: i32,
    pub missile: i32,
    pub death: i32,
    pub xdeath: i32,
    pub death_sound: i32,
    pub speed: i32,
    pub radius: i32,
    pub height: i32,
    pub mass: i32,
    pub damage: i32,
    pub active_sound: i32,
    pub flags: i32,
    pub raise: i32,
}

impl From<&ThingDef> for Thing {
    fn from(def: &ThingDef) -> Self {
        let mut labels = BTreeMap::new();
        for (name, index) in [
            (label::SPAWN, def.spawn),
            (label::SEE, def.see),
            (label::PAIN, def.pain),
            (label::MELEE, def.melee),
            (label::MISSILE, def.missile),
            (label::DEATH, def.death),
            (label::XDEATH, def.xdeath),
            (label::RAISE, def.raise),
        ] {
            if index != 0 {
                labels.insert(name.to_string(), index);
            }
        }
        Self {
            name: def.name.to_string(),
            editor_number: def.editor_number,
            health: def.health,
            speed: def.speed,
            radius: def.radius,
            height: def.height,
            damage: def.damage,
            reaction_time: def.reaction_time,
            pain_chance: def.pain_chance,
            flags: def.flags,
            mass: def.mass,
            labels,
            see_sound: def.see_sound,
            attack_sound: def.attack_sound,
            pain_sound: def.pain_sound,
            death_sound: def.death_sound,
            active_sound: def.active_sound,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_number_rejects_zero_and_out_of_range() {
        let mut t = Thing::new();
        assert!(t.set_editor_number(0).is_err());
        assert!(t.set_editor_number(-2).is_err());
        assert!(t.set_editor_number(0x10001).is_err());
        assert!(t.set_editor_number(0x10000).is_ok());
        assert!(t.set_editor_number(-1).is_ok());
    }

    #[test]
    fn ranged_setters() {
        let mut t = Thing::new();
        assert!(t.set_health(1_000_000).is_err());
        assert!(t.set_speed(32768).is_err());
        assert!(t.set_fast_speed(-2).is_err());
        assert!(t.set_projectile_group(-1).is_ok());
        assert!(t.set_splash_group(-1).is_err());
        assert!(t.set_see_sound(-1).is_err());
    }

    #[test]
    fn labels_are_case_insensitive_and_zero_removes() {
        let mut t = Thing::new();
        t.set_label("Spawn", 174).unwrap();
        assert_eq!(t.label("SPAWN"), 174);
        t.set_label("spawn", 0).unwrap();
        assert_eq!(t.labels().count(), 0);
    }

    #[test]
    fn projectile_speed_is_fixed_point() {
        let base = Thing::new();
        let mut t = Thing::new();
        t.set_speed(10).unwrap();
        assert_eq!(
            t.diff(&base, FeatureLevel::Doom19),
            vec![DiffField::new("Speed", 10)]
        );

        t.set_flags(FLAG_MISSILE);
        let diff = t.diff(&base, FeatureLevel::Doom19);
        assert!(diff.contains(&DiffField::new("Speed", 10 << 16)));
        assert!(diff.contains(&DiffField::new("Bits", i64::from(FLAG_MISSILE))));
    }

    #[test]
    fn radius_and_height_always_fixed_point() {
        let base = Thing::new();
        let mut t = Thing::new();
        t.set_radius(20).unwrap();
        t.set_height(56).unwrap();
        assert_eq!(
            t.diff(&base, FeatureLevel::Doom19),
            vec![
                DiffField::new("Width", 20 << 16),
                DiffField::new("Height", 56 << 16)
            ]
        );
    }

    #[test]
    fn mbf21_fields_are_gated() {
        let base = Thing::new();
        let mut t = Thing::new();
        t.set_infighting_group(2).unwrap();
        t.set_dropped_item(5).unwrap();
        assert!(t.diff(&base, FeatureLevel::Mbf).is_empty());
        let names: Vec<_> = t
            .diff(&base, FeatureLevel::Mbf21)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Dropped item", "Infighting group"]);
    }

    #[test]
    fn default_fast_speed_is_not_shifted() {
        let mut base = Thing::new();
        base.set_fast_speed(20).unwrap();
        let mut t = Thing::new();
        t.set_flags(FLAG_MISSILE);
        base.set_flags(FLAG_MISSILE);
        let diff = t.diff(&base, FeatureLevel::Mbf21);
        assert_eq!(diff, vec![DiffField::new("Fast speed", -1)]);
    }

    #[test]
    fn copy_from_overwrites_annotations() {
        let mut a = Thing::new();
        a.set_annotation("note", "x");
        let mut b = Thing::new();
        b.set_health(5).unwrap();
        b.copy_from(&a);
        assert_eq!(b.health(), 0);
        assert_eq!(b.annotation("note"), Some("x"));
    }
}
