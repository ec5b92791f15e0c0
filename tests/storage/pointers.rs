//! Integration tests for the action-pointer registry

use decohack_foundation::FeatureLevel;
use decohack_storage::pointer::lookup;
use decohack_storage::{ActionPointerRegistry, PointerKind};

#[test]
fn lookup_requires_literal_prefix_and_ignores_body_case() {
    let registry = ActionPointerRegistry::global();
    assert_eq!(registry.lookup("A_look").unwrap().mnemonic(), "Look");
    assert_eq!(registry.lookup("A_LOOK").unwrap().mnemonic(), "Look");
    assert!(registry.lookup("a_look").is_none());
    assert!(registry.lookup("Look").is_none());
    assert!(registry.lookup("A_NULL").is_none());
    assert!(lookup("A_Punch").unwrap().is_weapon());
}

#[test]
fn mbf_pointers_are_gated() {
    let registry = ActionPointerRegistry::global();
    let spawn = registry.lookup("A_Spawn").unwrap();
    assert_eq!(spawn.kind(), PointerKind::Mbf);
    assert!(spawn.is_mbf());
    assert_eq!(spawn.frame(), None);
    assert!(registry.lookup_for("A_Spawn", FeatureLevel::Boom).is_none());
    assert!(registry.lookup_for("A_Spawn", FeatureLevel::Mbf).is_some());
    assert!(!registry.lookup("A_Die").unwrap().is_mbf());
}

#[test]
fn doom19_pointers_know_their_frame() {
    let registry = ActionPointerRegistry::global();
    let saw = registry.lookup("A_Saw").unwrap();
    assert_eq!(saw.frame(), Some(71));
    assert_eq!(saw.to_string(), "A_Saw");
    assert_eq!(registry.by_frame(71).map(|p| p.mnemonic()), Some("Saw"));
}
