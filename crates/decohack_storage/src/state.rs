//! Animation state rows.

// Table indices always fit in i32
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use decohack_foundation::{Error, FeatureLevel, Result, check_range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotations;
use crate::diff::{DiffBuilder, DiffField, Diffable};

/// Highest legal frame index (`]`).
pub const MAX_FRAME_INDEX: i32 = 28;
/// Longest legal duration in tics.
pub const MAX_DURATION: i32 = 9999;
/// Most arguments a state may carry.
pub const MAX_ARGS: usize = 7;
/// Sprite subnumber bit marking a full-bright frame.
pub const BRIGHT_BIT: i32 = 0x8000;

/// One row of the state table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    sprite_index: i32,
    frame_index: i32,
    bright: bool,
    next_state_index: i32,
    duration: i32,
    misc1: i32,
    misc2: i32,
    args: Vec<i32>,
    mbf21_flags: i32,
    annotations: Annotations,
}

impl Default for State {
    fn default() -> Self {
        Self {
            sprite_index: 0,
            frame_index: 0,
            bright: false,
            next_state_index: 0,
            duration: -1,
            misc1: 0,
            misc2: 0,
            args: Vec::new(),
            mbf21_flags: 0,
            annotations: Annotations::new(),
        }
    }
}

impl State {
    /// Creates a state with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a baseline row. Values are trusted.
    pub(crate) fn baseline(sprite: usize, frame: i32, duration: i32, next: usize) -> Self {
        Self {
            sprite_index: sprite as i32,
            frame_index: frame & 0x7fff,
            bright: frame & BRIGHT_BIT != 0,
            next_state_index: next as i32,
            duration,
            ..Self::default()
        }
    }

    /// Sprite table index.
    #[must_use]
    pub fn sprite_index(&self) -> i32 {
        self.sprite_index
    }

    /// Sets the sprite table index.
    ///
    /// # Errors
    /// Fails if `index` is negative.
    pub fn set_sprite_index(&mut self, index: i32) -> Result<()> {
        check_range("Sprite index", 0, i64::from(i32::MAX), i64::from(index))?;
        self.sprite_index = index;
        Ok(())
    }

    /// Frame index within the sprite, `0..=28`.
    #[must_use]
    pub fn frame_index(&self) -> i32 {
        self.frame_index
    }

    /// Sets the frame index.
    ///
    /// # Errors
    /// Fails if `index` is outside `0..=28`.
    pub fn set_frame_index(&mut self, index: i32) -> Result<()> {
        check_range(
            "Sprite frame index",
            0,
            i64::from(MAX_FRAME_INDEX),
            i64::from(index),
        )?;
        self.frame_index = index;
        Ok(())
    }

    /// Whether the frame is drawn full-bright.
    #[must_use]
    pub fn is_bright(&self) -> bool {
        self.bright
    }

    /// Sets the full-bright flag.
    pub fn set_bright(&mut self, bright: bool) {
        self.bright = bright;
    }

    /// Index of the state that follows this one.
    #[must_use]
    pub fn next_state_index(&self) -> i32 {
        self.next_state_index
    }

    /// Sets the next state index.
    ///
    /// # Errors
    /// Fails if `index` is negative.
    pub fn set_next_state_index(&mut self, index: i32) -> Result<()> {
        check_range("Next state index", 0, i64::from(i32::MAX), i64::from(index))?;
        self.next_state_index = index;
        Ok(())
    }

    /// Duration in tics; `-1` is infinite.
    #[must_use]
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Sets the duration.
    ///
    /// # Errors
    /// Fails if `duration` is outside `-1..=9999`.
    pub fn set_duration(&mut self, duration: i32) -> Result<()> {
        check_range("Duration", -1, i64::from(MAX_DURATION), i64::from(duration))?;
        self.duration = duration;
        Ok(())
    }

    /// First free-form parameter.
    #[must_use]
    pub fn misc1(&self) -> i32 {
        self.misc1
    }

    /// Sets the first free-form parameter.
    pub fn set_misc1(&mut self, value: i32) {
        self.misc1 = value;
    }

    /// Second free-form parameter.
    #[must_use]
    pub fn misc2(&self) -> i32 {
        self.misc2
    }

    /// Sets the second free-form parameter.
    pub fn set_misc2(&mut self, value: i32) {
        self.misc2 = value;
    }

    /// MBF21 pointer arguments.
    #[must_use]
    pub fn args(&self) -> &[i32] {
        &self.args
    }

    /// Replaces the MBF21 pointer arguments.
    ///
    /// # Errors
    /// Fails if more than seven arguments are supplied.
    pub fn set_args(&mut self, args: &[i32]) -> Result<()> {
        if args.len() > MAX_ARGS {
            return Err(Error::invalid_value(format!(
                "a state can have at most {MAX_ARGS} args, got {}",
                args.len()
            )));
        }
        self.args = args.to_vec();
        Ok(())
    }

    /// MBF21 state flag bits.
    #[must_use]
    pub fn mbf21_flags(&self) -> i32 {
        self.mbf21_flags
    }

    /// Sets the MBF21 state flag bits.
    pub fn set_mbf21_flags(&mut self, flags: i32) {
        self.mbf21_flags = flags;
    }

    /// The exported `Sprite subnumber`, frame index plus bright bit.
    #[must_use]
    pub fn sprite_subnumber(&self) -> i32 {
        self.frame_index | if self.bright { BRIGHT_BIT } else { 0 }
    }
}

impl Diffable for State {
    fn diff(&self, baseline: &Self, level: FeatureLevel) -> Vec<DiffField> {
        let mut out = DiffBuilder::new();
        out.field(
            "Sprite number",
            self.sprite_index.into(),
            baseline.sprite_index.into(),
        )
        .field(
            "Sprite subnumber",
            self.sprite_subnumber().into(),
            baseline.sprite_subnumber().into(),
        )
        .field(
            "Next frame",
            self.next_state_index.into(),
            baseline.next_state_index.into(),
        )
        .field("Duration", self.duration.into(), baseline.duration.into())
        .field("Unknown 1", self.misc1.into(), baseline.misc1.into())
        .field("Unknown 2", self.misc2.into(), baseline.misc2.into());

        if level.supports(FeatureLevel::Mbf21) {
            // Only positions present in `self.args` are compared. A baseline
            // argument past the end of `self.args` is never reported, so
            // shortening the list cannot clear it in the patch.
            for (i, arg) in self.args.iter().enumerate() {
                if baseline.args.get(i) != Some(arg) {
                    out.push(DiffField::owned(format!("Args{}", i + 1), (*arg).into()));
                }
            }
            out.field(
                "MBF21 Bits",
                self.mbf21_flags.into(),
                baseline.mbf21_flags.into(),
            );
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

#[cfg(test)]
mod tests {
    use super::*;
    use decohack_foundation::ErrorKind;

    #[test]
    fn defaults() {
        let s = State::new();
        assert_eq!(s.duration(), -1);
        assert_eq!(s.next_state_index(), 0);
        assert!(s.args().is_empty());
    }

    #[test]
    fn setters_check_ranges() {
        let mut s = State::new();
        assert!(s.set_frame_index(28).is_ok());
        let err = s.set_frame_index(29).unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::FieldRange {
                min: 0,
                max: 28,
                value: 29,
                ..
            }
        ));
        assert!(s.set_duration(-1).is_ok());
        assert!(s.set_duration(-2).is_err());
        assert!(s.set_duration(10000).is_err());
        assert!(s.set_next_state_index(-1).is_err());
        assert!(s.set_args(&[1, 2, 3, 4, 5, 6, 7, 8]).is_err());
        assert_eq!(s.frame_index(), 28);
    }

    #[test]
    fn bright_folds_into_subnumber() {
        let base = State::new();
        let mut s = State::new();
        s.set_bright(true);
        let diff = s.diff(&base, FeatureLevel::Doom19);
        assert_eq!(diff, vec![DiffField::new("Sprite subnumber", 0x8000)]);
    }

    #[test]
    fn args_are_gated_to_mbf21() {
        let base = State::new();
        let mut s = State::new();
        s.set_args(&[0, 5]).unwrap();
        s.set_mbf21_flags(1);

        assert!(s.diff(&base, FeatureLevel::Mbf).is_empty());

        let diff = s.diff(&base, FeatureLevel::Mbf21);
        let names: Vec<_> = diff.iter().map(|f| f.name.as_ref()).collect();
        assert_eq!(names, vec!["Args1", "Args2", "MBF21 Bits"]);
    }

    #[test]
    fn dropped_args_are_not_reported() {
        let mut base = State::new();
        base.set_args(&[1, 2, 3]).unwrap();
        let mut s = base.clone();
        s.set_args(&[1]).unwrap();
        assert!(s.diff(&base, FeatureLevel::Mbf21).is_empty());

        s.set_args(&[9]).unwrap();
        let diff = s.diff(&base, FeatureLevel::Mbf21);
        let names: Vec<_> = diff.iter().map(|f| f.name.as_ref()).collect();
        assert_eq!(names, vec!["Args1"]);
    }

    #[test]
    fn diff_lists_fields_in_patch_order() {
        let base = State::baseline(1, 0, 4, 0);
        let mut s = base.clone();
        s.set_misc2(3);
        s.set_duration(8).unwrap();
        s.set_sprite_index(2).unwrap();
        let names: Vec<_> = s
            .diff(&base, FeatureLevel::Doom19)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Sprite number", "Duration", "Unknown 2"]);
    }

    proptest::proptest! {
        #[test]
        fn frame_index_setter_accepts_only_valid_letters(index in -10i32..40) {
            let mut state = State::default();
            let accepted = state.set_frame_index(index).is_ok();
            proptest::prop_assert_eq!(accepted, (0..=MAX_FRAME_INDEX).contains(&index));
            if accepted {
                proptest::prop_assert_eq!(state.frame_index(), index);
            }
        }
    }
}
