//! Target patch dialects and the feature-level lattice.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered classification gating which entity attributes may be exported.
///
/// The ordering is total: `Doom19 < Boom < Mbf < Mbf21`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureLevel {
    /// Vanilla Doom 1.9 executable patching.
    Doom19,
    /// Boom extensions (BEX mnemonics, par times, code pointer reassignment).
    Boom,
    /// MBF extensions (parameterized pointers, extra actors).
    Mbf,
    /// MBF21 and DEHEXTRA extended tables.
    Mbf21,
}

impl FeatureLevel {
    /// Returns true if this level includes everything `other` does.
    #[must_use]
    pub fn supports(self, other: FeatureLevel) -> bool {
        self >= other
    }
}

/// How string replacements are addressed in a dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringAddressing {
    /// Strings are addressed by their position in the executable's table.
    Indexed,
    /// Strings are addressed by BEX mnemonic keys.
    Keyed,
}

/// How action pointers are bound to states in a dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerBinding {
    /// Only states that carried a pointer in the executable own a slot.
    Static,
    /// Every state may carry any pointer.
    Free,
}

/// A target patch-format variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dialect {
    /// Doom 1.9 (Doom II executable).
    Doom19,
    /// The Ultimate Doom 1.9.
    UltimateDoom19,
    /// Boom 2.02.
    Boom,
    /// Marine's Best Friend.
    Mbf,
    /// DeHackEd extended tables with MBF21.
    Extended,
}

impl Dialect {
    /// All dialects, in `using` keyword order.
    pub const ALL: [Dialect; 5] = [
        Dialect::Doom19,
        Dialect::UltimateDoom19,
        Dialect::Boom,
        Dialect::Mbf,
        Dialect::Extended,
    ];

    /// Resolves a `using` keyword, case-insensitively.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.keyword().eq_ignore_ascii_case(keyword))
    }

    /// The keyword that selects this dialect in a `using` clause.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Doom19 => "doom19",
            Self::UltimateDoom19 => "udoom19",
            Self::Boom => "boom",
            Self::Mbf => "mbf",
            Self::Extended => "extended",
        }
    }

    /// Highest feature level this dialect can export.
    #[must_use]
    pub const fn feature_level(self) -> FeatureLevel {
        match self {
            Self::Doom19 | Self::UltimateDoom19 => FeatureLevel::Doom19,
            Self::Boom => FeatureLevel::Boom,
            Self::Mbf => FeatureLevel::Mbf,
            Self::Extended => FeatureLevel::Mbf21,
        }
    }

    /// Whether the dialect is one of the legacy executable-patching formats.
    #[must_use]
    pub const fn is_doom19(self) -> bool {
        matches!(self, Self::Doom19 | Self::UltimateDoom19)
    }

    /// String replacement addressing mode.
    #[must_use]
    pub const fn string_addressing(self) -> StringAddressing {
        if self.is_doom19() {
            StringAddressing::Indexed
        } else {
            StringAddressing::Keyed
        }
    }

    /// Action pointer binding mode.
    #[must_use]
    pub const fn pointer_binding(self) -> PointerBinding {
        if self.is_doom19() {
            PointerBinding::Static
        } else {
            PointerBinding::Free
        }
    }

    /// Whether `pars` sections are accepted.
    #[must_use]
    pub const fn supports_pars(self) -> bool {
        !self.is_doom19()
    }

    /// The `Doom version` number written to patch headers.
    #[must_use]
    pub const fn doom_version(self) -> u32 {
        if self.is_doom19() { 19 } else { 21 }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_levels_are_totally_ordered() {
        assert!(FeatureLevel::Doom19 < FeatureLevel::Boom);
        assert!(FeatureLevel::Boom < FeatureLevel::Mbf);
        assert!(FeatureLevel::Mbf < FeatureLevel::Mbf21);
        assert!(FeatureLevel::Mbf21.supports(FeatureLevel::Doom19));
        assert!(!FeatureLevel::Boom.supports(FeatureLevel::Mbf));
        assert!(FeatureLevel::Mbf.supports(FeatureLevel::Mbf));
    }

    #[test]
    fn keywords_round_trip_case_insensitively() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::from_keyword(dialect.keyword()), Some(dialect));
        }
        assert_eq!(Dialect::from_keyword("BOOM"), Some(Dialect::Boom));
        assert_eq!(Dialect::from_keyword("zdoom"), None);
    }

    #[test]
    fn capabilities_follow_dialect_family() {
        assert!(!Dialect::Doom19.supports_pars());
        assert!(!Dialect::UltimateDoom19.supports_pars());
        assert!(Dialect::Boom.supports_pars());
        assert_eq!(Dialect::Doom19.pointer_binding(), PointerBinding::Static);
        assert_eq!(Dialect::Mbf.pointer_binding(), PointerBinding::Free);
        assert_eq!(Dialect::UltimateDoom19.string_addressing(), StringAddressing::Indexed);
        assert_eq!(Dialect::Extended.string_addressing(), StringAddressing::Keyed);
        assert_eq!(Dialect::Extended.feature_level(), FeatureLevel::Mbf21);
    }
}
