//! Integration tests for the parser
//!
//! Tests whole scripts compiled through the public entry points.

use decohack_foundation::Dialect;
use decohack_language::{CompileError, CompilerConfig, compile, compile_str};
use decohack_storage::PatchContext;

fn ok(source: &str) -> Box<dyn PatchContext> {
    match compile_str(source) {
        Ok(ctx) => ctx,
        Err(e) => panic!("compile failed: {e}"),
    }
}

fn err(source: &str) -> CompileError {
    match compile_str(source) {
        Ok(_) => panic!("compile unexpectedly succeeded"),
        Err(e) => e,
    }
}

// =============================================================================
// Script Structure
// =============================================================================

#[test]
fn empty_script_after_using() {
    let ctx = ok("using udoom19 // nothing else");
    assert_eq!(ctx.dialect(), Dialect::UltimateDoom19);
}

#[test]
fn failure_is_a_single_located_diagnostic() {
    let e = err("using boom\nmisc { maxHealth 100 }\nweapon 1 { }");
    assert_eq!(e.diagnostics.len(), 1);
    assert_eq!(
        e.to_string(),
        "[Text String]:3:1: Unknown section or command \"weapon\"."
    );
}

#[test]
fn stream_name_comes_from_caller() {
    let e = compile("patch.dh", "using", &CompilerConfig::default()).unwrap_err();
    assert!(e.to_string().starts_with("patch.dh:"));
}

#[test]
fn sections_apply_in_order() {
    let ctx = ok("using boom\nmisc { maxHealth 150 }\nmisc { maxHealth 175 }");
    assert_eq!(ctx.tables().misc().max_health(), 175);
}

// =============================================================================
// Sections
// =============================================================================

#[test]
fn every_section_in_one_script() {
    let ctx = ok(r#"
        using mbf
        strings { GOTARMOR "Armor!" }
        ammo bullets { max 300 }
        sound "dsshotgn" { priority 10 }
        pars { MAP01 45 }
        misc { godModeHealth 200 }
        state 100 { stop }
        state fill 1000 { BAL1 AB 4 bright A_Turn(45) goto 1000 }
    "#);
    let tables = ctx.tables();
    assert_eq!(tables.strings().get("GOTARMOR"), Some("Armor!"));
    assert_eq!(tables.ammo(0).unwrap().max(), 300);
    assert_eq!(tables.sound(1).unwrap().priority(), 10);
    assert_eq!(ctx.pars().unwrap().get(0, 1), Some(45));
    assert_eq!(tables.misc().god_mode_health(), 200);
    assert_eq!(tables.state(100).unwrap().next_state_index(), 0);
    assert_eq!(tables.state(1001).unwrap().next_state_index(), 1002);
    assert_eq!(tables.state(1002).unwrap().next_state_index(), 1000);
    assert!(tables.state(1002).unwrap().is_bright());
    assert_eq!(tables.state(1002).unwrap().misc1(), 45);
}

#[test]
fn doom19_strings_use_indices() {
    let e = err("using doom19 strings { GOTARMOR \"x\" }");
    assert_eq!(
        e.first_message(),
        Some(
            "Expected '}' to close \"strings\" section, or string index to start string replacement entry."
        )
    );
}

#[test]
fn pars_rejected_for_doom19() {
    let e = err("using udoom19 pars { E1M1 30 }");
    assert_eq!(
        e.first_message(),
        Some("Par block not supported in non-Boom type patches.")
    );
}

// =============================================================================
// States
// =============================================================================

#[test]
fn fill_then_free_then_refill() {
    let ctx = ok("using boom
        state fill 500 { TROO AB 3 stop }
        state free 501 to 502
        state fill 500 { SARG C 2 wait }");
    let state = ctx.tables().state(501).unwrap();
    assert_eq!(state.frame_index(), 2);
    assert_eq!(state.next_state_index(), 501);
    assert!(ctx.is_free_state(500).unwrap());
    assert!(!ctx.is_free_state(501).unwrap());
    assert!(ctx.is_free_state(502).unwrap());
}

#[test]
fn scenario_e_static_slot_mismatch() {
    let e = err("using doom19\nstate 5 { PUNG B 4 A_Punch }");
    assert_eq!(
        e.first_message(),
        Some("Action function specified for state without a function.")
    );
}

#[test]
fn mbf_only_pointer_in_boom() {
    let e = err("using boom state fill 300 { TROO A 1 A_Die stop }");
    assert!(e.first_message().is_some_and(|m| m.contains("A_Die")));
}

#[test]
fn frame_letter_range() {
    let ctx = ok("using boom state 400 { TROO ] 1 }");
    assert_eq!(ctx.tables().state(400).unwrap().frame_index(), 28);
    let e = err("using boom state 400 { TROO ^ 1 }");
    assert!(e.first_message().is_some());
}
