//! Integration tests for the patch writer

use decohack_language::{CompilerConfig, compile_str};
use decohack_runtime::{ExportConfig, ExportError, compile_to_patch, patch_to_string, write_patch};

fn patch(source: &str) -> String {
    compile_to_patch(
        "test",
        source,
        &CompilerConfig::default(),
        &ExportConfig::default().with_line_ending("\n").with_header(false),
    )
    .unwrap()
}

#[test]
fn only_changed_rows_are_written() {
    let text = patch("using boom\nstate 10 { goto 20 }");
    assert_eq!(text, "\nFrame 10\nNext frame = 20\n");
}

#[test]
fn fill_exports_frames_and_code_pointers() {
    let text = patch("using boom\nstate fill 900 { TROO A 5 A_Look stop }");
    assert!(text.contains("\nFrame 901\n"));
    assert!(!text.contains("\nFrame 900\n"));
    assert!(text.contains("\n[CODEPTR]\nFRAME 901 = Look\n"));
}

#[test]
fn doom19_pointer_change() {
    // State 174 owns a slot and carries A_Look in the baseline.
    let text = patch("using doom19\nstate 174 { POSS A 10 A_Chase }");
    assert!(text.contains("(Frame 174)\nCodep Frame = 176\n"));
}

#[test]
fn header_and_crlf_by_default() {
    let ctx = compile_str("using extended\nmisc { maxArmor 250 }").unwrap();
    let text = patch_to_string(ctx.as_ref(), &ExportConfig::default()).unwrap();
    assert_eq!(
        text,
        "Patch File for DeHackEd v3.0\r\nDoom version = 21\r\nPatch format = 6\r\n\r\nMisc 0\r\nMax Armor = 250\r\n"
    );
}

#[test]
fn write_patch_targets_any_writer() {
    let ctx = compile_str("using mbf\npars { E2M3 120 }").unwrap();
    let mut out = Vec::new();
    write_patch(ctx.as_ref(), &mut out, &ExportConfig::default().with_line_ending("\n")).unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with("\n[PARS]\npar 2 3 120\n"));
}

#[test]
fn compile_errors_surface_through_export() {
    let err = compile_to_patch(
        "test",
        "using boom\nammo 9 { }",
        &CompilerConfig::default(),
        &ExportConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::Compile(_)));
    assert!(err.to_string().starts_with("test:2:"));
    assert!(err.to_string().contains("Expected ammo type"));
}
