//! End-to-end scripts, from source text to patch text.

use decohack::language::{LabelScope, Parser, TokenStream, compile_str};
use decohack::language::CompilerConfig;
use decohack::runtime::{ExportConfig, patch_to_string};
use decohack::storage::{Misc, new_context};
use decohack::foundation::Dialect;

#[test]
fn scenario_a_misc_values() {
    let ctx = compile_str("using doom19\nmisc { initialHealth 150 bfgCellsPerShot 30 }").unwrap();
    let misc = ctx.tables().misc();
    assert_eq!(misc.initial_health(), 150);
    assert_eq!(misc.bfg_cells_per_shot(), 30);

    let mut expected = Misc::new();
    expected.set_initial_health(150).unwrap();
    expected.set_bfg_cells_per_shot(30).unwrap();
    assert_eq!(misc, &expected);
}

#[test]
fn scenario_b_ammo_by_keyword() {
    let ctx = compile_str("using boom\nammo cells { max 400 pickup 20 }").unwrap();
    let cells = ctx.tables().ammo(2).unwrap();
    assert_eq!(cells.max(), 400);
    assert_eq!(cells.pickup(), 20);
    assert_eq!(ctx.tables().ammo(3).unwrap(), ctx.baseline().ammo(3).unwrap());
}

#[test]
fn scenario_c_fill_loops_back() {
    let ctx = compile_str("using boom\nstate fill 200 { TROO A 5 TROO B 5 goto 200 }").unwrap();
    let tables = ctx.tables();
    // 200 is only the scan origin.
    assert!(ctx.is_free_state(200).unwrap());
    assert_eq!(tables.state(200).unwrap(), ctx.baseline().state(200).unwrap());
    let first = tables.state(201).unwrap();
    let second = tables.state(202).unwrap();
    assert_eq!(first.next_state_index(), 202);
    assert_eq!(second.next_state_index(), 200);
    assert_eq!((first.frame_index(), second.frame_index()), (0, 1));
    assert!(!ctx.is_free_state(201).unwrap());
    assert!(!ctx.is_free_state(202).unwrap());
    assert!(tables.pointer(201).unwrap().is_null());
    assert!(tables.pointer(202).unwrap().is_null());

    let text = patch_to_string(ctx.as_ref(), &ExportConfig::default().with_line_ending("\n")).unwrap();
    assert!(!text.contains("\nFrame 200\n"));
    assert!(text.contains("\nFrame 201\n"));
    assert!(text.contains("\nFrame 202\n"));
    assert!(!text.contains("[CODEPTR]"));
}

#[test]
fn scenario_d_label_offset_below_zero() {
    let ctx = new_context(Dialect::Boom);
    let mut scope = LabelScope::new();
    scope.declare("LABEL", 3);
    let stream = TokenStream::new("test", "goto LABEL-5", None, &CompilerConfig::default());
    let mut parser = Parser::new(stream);
    let err = parser
        .parse_next_state(ctx.as_ref(), Some(&scope), 0)
        .unwrap_err();
    assert_eq!(err.message, "Label \"LABEL\" minus 5 would be less than 0.");
}

#[test]
fn scenario_e_doom19_pointer_on_pointerless_state() {
    let err = compile_str("using doom19\nstate 0 { TROO A -1 A_Look }").unwrap_err();
    assert_eq!(
        err.first_message(),
        Some("Action function specified for state without a function.")
    );
}

#[test]
fn ammo_infinite_is_out_of_range() {
    let err = compile_str("using boom\nammo infinite { max 1 }").unwrap_err();
    assert!(err.first_message().is_some_and(|m| m.starts_with("Expected ammo type")));
}
