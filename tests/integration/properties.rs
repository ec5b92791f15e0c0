//! Property tests across storage and language.

use decohack::foundation::{Dialect, FeatureLevel};
use decohack::language::compile_str;
use decohack::storage::{Diffable, Thing, new_context};
use proptest::prelude::*;

fn dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(Dialect::ALL.to_vec())
}

fn level() -> impl Strategy<Value = FeatureLevel> {
    prop::sample::select(vec![
        FeatureLevel::Doom19,
        FeatureLevel::Boom,
        FeatureLevel::Mbf,
        FeatureLevel::Mbf21,
    ])
}

proptest! {
    #[test]
    fn allocator_scans_strictly_forward_to_free_rows(
        dialect in dialect(),
        claimed in prop::collection::vec(0usize..967, 0..64),
        from in 0usize..967,
    ) {
        let mut ctx = new_context(dialect);
        for &state in &claimed {
            ctx.set_free_state(state, false).unwrap();
        }
        if let Some(next) = ctx.find_next_free_state(from) {
            prop_assert!(next > from);
            prop_assert!(ctx.is_free_state(next).unwrap());
            prop_assert!((from + 1..next).all(|i| !ctx.is_free_state(i).unwrap()));
        }
        if let Some(next) = ctx.find_next_free_action_pointer_state(from) {
            prop_assert!(next > from);
            prop_assert!(ctx.is_free_state(next).unwrap());
            prop_assert!(ctx.state_action_pointer_index(next).is_some());
        }
    }

    #[test]
    fn diff_against_self_is_empty(
        dialect in dialect(),
        level in level(),
        row in 0usize..137,
        health in 0..=999_999i32,
        speed in -32768..=32767i32,
        flags in any::<i32>(),
    ) {
        let mut thing = new_context(dialect).tables().thing(row).unwrap().clone();
        thing.set_health(health).unwrap();
        thing.set_speed(speed).unwrap();
        thing.set_flags(flags);
        prop_assert!(thing.diff(&thing, level).is_empty());
    }

    #[test]
    fn mbf21_fields_need_mbf21(group in 1..=1000i32, level in level()) {
        let base = Thing::new();
        let mut thing = Thing::new();
        thing.set_infighting_group(group).unwrap();
        let diff = thing.diff(&base, level);
        prop_assert_eq!(diff.is_empty(), level < FeatureLevel::Mbf21);
    }

    #[test]
    fn misc_values_compile_through(value in 0..=i32::MAX) {
        let ctx = compile_str(&format!("using boom misc {{ maxHealth {value} }}")).unwrap();
        prop_assert_eq!(ctx.tables().misc().max_health(), value);
    }

    #[test]
    fn fill_chains_every_frame(start in 100usize..900, frames in 1usize..=29) {
        let letters: String = ('A'..=']').take(frames).collect();
        let source = format!("using boom state fill {start} {{ TROO {letters} 1 stop }}");
        let ctx = compile_str(&source).unwrap();
        let tables = ctx.tables();
        prop_assert!(ctx.is_free_state(start).unwrap());
        for offset in 1..=frames {
            let state = tables.state(start + offset).unwrap();
            prop_assert_eq!(state.frame_index(), i32::try_from(offset - 1).unwrap());
            let next = if offset == frames { 0 } else { start + offset + 1 };
            prop_assert_eq!(state.next_state_index(), i32::try_from(next).unwrap());
        }
    }
}
