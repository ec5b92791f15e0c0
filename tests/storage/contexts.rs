//! Integration tests for patch contexts and the free-state allocator

use decohack_foundation::{Dialect, PointerBinding};
use decohack_storage::{ActionPointerRegistry, Diffable, new_context};

#[test]
fn contexts_start_from_baseline() {
    for dialect in Dialect::ALL {
        let ctx = new_context(dialect);
        assert_eq!(ctx.dialect(), dialect);
        assert_eq!(ctx.tables().states(), ctx.baseline().states());
        assert_eq!(ctx.tables().things(), ctx.baseline().things());
        assert_eq!(ctx.supports_pars(), dialect.supports_pars());
        assert!(ctx.free_states().iter().all(|&free| free));
    }
}

#[test]
fn doom19_pointer_slots() {
    let ctx = new_context(Dialect::Doom19);
    assert_eq!(ctx.pointer_binding(), PointerBinding::Static);
    assert_eq!(ctx.action_pointer_count(), 448);
    assert_eq!(ctx.state_action_pointer_index(0), None);
    assert_eq!(ctx.action_pointer_state(0), Some(1));
    assert_eq!(ctx.action_pointer_state(448), None);
}

#[test]
fn free_pointer_slots_are_state_indices() {
    let ctx = new_context(Dialect::Mbf);
    assert_eq!(ctx.state_action_pointer_index(1000), Some(1000));
    assert_eq!(ctx.action_pointer_count(), ctx.tables().state_count());
}

#[test]
fn allocator_scans_forward_past_claimed_states() {
    let mut ctx = new_context(Dialect::Doom19);
    ctx.set_free_state(6, false).unwrap();
    assert_eq!(ctx.find_next_free_state(5), Some(7));
    // States 7 and 8 carry no pointer.
    assert_eq!(ctx.find_next_free_action_pointer_state(5), Some(9));
    assert_eq!(ctx.find_next_free_state(966), None);
}

#[test]
fn pointer_assignment_and_null_backfill() {
    let mut ctx = new_context(Dialect::Boom);
    let chase = ActionPointerRegistry::global().lookup("A_Chase").unwrap();
    ctx.set_action_pointer(500, Some(chase)).unwrap();
    assert_eq!(ctx.action_pointer(500).unwrap().mnemonic(), "Chase");
    ctx.set_action_pointer(500, None).unwrap();
    assert!(ctx.action_pointer(500).unwrap().is_null());
    assert!(ctx.set_action_pointer(968, None).is_err());
}

#[test]
fn edits_show_up_in_diffs() {
    let mut ctx = new_context(Dialect::Boom);
    ctx.tables_mut().state_mut(42).unwrap().set_duration(77).unwrap();
    let base = ctx.baseline().state(42).unwrap();
    let diff = ctx.tables().state(42).unwrap().diff(base, ctx.feature_level());
    assert_eq!(diff.len(), 1);
    assert_eq!(diff[0].name, "Duration");
    assert_eq!(diff[0].value, 77);
}
