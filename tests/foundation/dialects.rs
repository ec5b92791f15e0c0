//! Integration tests for dialects and feature levels

use decohack_foundation::{Dialect, FeatureLevel, PointerBinding, StringAddressing};

#[test]
fn keywords_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(Dialect::from_keyword(dialect.keyword()), Some(dialect));
        assert_eq!(dialect.to_string(), dialect.keyword());
    }
    assert_eq!(Dialect::from_keyword("MBF"), Some(Dialect::Mbf));
    assert_eq!(Dialect::from_keyword("mbf21"), None);
}

#[test]
fn capabilities_follow_dialect() {
    assert_eq!(Dialect::Doom19.string_addressing(), StringAddressing::Indexed);
    assert_eq!(Dialect::UltimateDoom19.pointer_binding(), PointerBinding::Static);
    assert!(!Dialect::UltimateDoom19.supports_pars());
    assert_eq!(Dialect::Boom.string_addressing(), StringAddressing::Keyed);
    assert_eq!(Dialect::Mbf.pointer_binding(), PointerBinding::Free);
    assert!(Dialect::Extended.supports_pars());
    assert_eq!(Dialect::Doom19.doom_version(), 19);
    assert_eq!(Dialect::Boom.doom_version(), 21);
}

#[test]
fn feature_lattice() {
    assert_eq!(Dialect::UltimateDoom19.feature_level(), FeatureLevel::Doom19);
    assert_eq!(Dialect::Extended.feature_level(), FeatureLevel::Mbf21);
    assert!(FeatureLevel::Mbf21.supports(FeatureLevel::Boom));
    assert!(FeatureLevel::Boom.supports(FeatureLevel::Boom));
    assert!(!FeatureLevel::Boom.supports(FeatureLevel::Mbf));
}
