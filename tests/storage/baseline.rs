//! Integration tests for baseline tables

use decohack_foundation::{Dialect, FeatureLevel, StringAddressing};
use decohack_storage::{Diffable, baseline};

#[test]
fn table_sizes_per_dialect() {
    let expected = [
        (Dialect::Doom19, 967, 137, 138, 108),
        (Dialect::UltimateDoom19, 967, 137, 138, 108),
        (Dialect::Boom, 968, 139, 139, 108),
        (Dialect::Mbf, 1089, 144, 144, 113),
        (Dialect::Extended, 4000, 250, 245, 313),
    ];
    for (dialect, states, things, sprites, sounds) in expected {
        let tables = baseline::tables(dialect);
        assert_eq!(tables.state_count(), states, "{dialect} states");
        assert_eq!(tables.thing_count(), things, "{dialect} things");
        assert_eq!(tables.sprite_count(), sprites, "{dialect} sprites");
        assert_eq!(tables.sound_count(), sounds, "{dialect} sounds");
        assert_eq!(tables.ammo_count(), 4, "{dialect} ammo");
    }
}

#[test]
fn string_addressing_matches_dialect() {
    assert_eq!(
        baseline::tables(Dialect::Doom19).strings().addressing(),
        StringAddressing::Indexed
    );
    assert_eq!(
        baseline::tables(Dialect::Mbf).strings().addressing(),
        StringAddressing::Keyed
    );
}

#[test]
fn baseline_rows_diff_empty_against_themselves() {
    for dialect in Dialect::ALL {
        let tables = baseline::tables(dialect);
        let level = FeatureLevel::Mbf21;
        assert!(tables.states().iter().all(|s| s.diff(s, level).is_empty()));
        assert!(tables.things().iter().all(|t| t.diff(t, level).is_empty()));
        assert!(tables.sounds().iter().all(|s| s.diff(s, level).is_empty()));
        assert!(tables.misc().diff(tables.misc(), level).is_empty());
    }
}

#[test]
fn name_lookups() {
    let tables = baseline::tables(Dialect::Boom);
    assert_eq!(tables.sprite_index("troo"), tables.sprite_index("TROO"));
    assert_eq!(tables.sprite_name(0).unwrap(), "TROO");
    assert_eq!(tables.sound_index("pistol"), Some(0));
    assert_eq!(tables.sound_index("DSPISTOL"), Some(0));
    assert_eq!(tables.sound_index("nosuchsound"), None);
}
