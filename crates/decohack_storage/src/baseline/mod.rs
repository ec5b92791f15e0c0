//! Built-in vanilla-equivalent tables.
//!
//! Each dialect's baseline is built on first use and shared for the life of
//! the process. Patch contexts start from a clone of it and diffs are
//! computed against it.

mod sounds;
mod sprites;
mod states;
mod strings;
mod things;

use std::sync::OnceLock;

use decohack_foundation::Dialect;
use tracing::debug;

use crate::ammo::Ammo;
use crate::misc::Misc;
use crate::pointer::{ActionPointerRegistry, null_pointer};
use crate::sound::Sound;
use crate::state::State;
use crate::tables::{StringTable, Tables};
use crate::thing::Thing;

/// Returns the shared baseline tables for `dialect`.
#[must_use]
pub fn tables(dialect: Dialect) -> &'static Tables {
    static CACHE: [OnceLock<Tables>; 5] = [const { OnceLock::new() }; 5];
    let slot = match dialect {
        Dialect::Doom19 => 0,
        Dialect::UltimateDoom19 => 1,
        Dialect::Boom => 2,
        Dialect::Mbf => 3,
        Dialect::Extended => 4,
    };
    CACHE[slot].get_or_init(|| build(dialect))
}

fn build(dialect: Dialect) -> Tables {
    let registry = ActionPointerRegistry::global();

    let state_count = states::count(dialect);
    let mut state_rows = Vec::with_capacity(state_count);
    let mut pointers = Vec::with_capacity(state_count);
    for def in states::defined(dialect) {
        state_rows.push(State::baseline(def.sprite.index(), def.frame, def.tics, def.next));
        pointers.push(if def.action.is_empty() {
            null_pointer()
        } else {
            registry
                .by_mnemonic(def.action)
                .unwrap_or_else(null_pointer)
        });
    }
    for index in state_rows.len()..state_count {
        state_rows.push(State::baseline(states::BLANK_SPRITE.index(), 0, -1, index));
        pointers.push(null_pointer());
    }

    let thing_count = things::count(dialect);
    let mut thing_rows: Vec<Thing> = things::defined(dialect).map(Thing::from).collect();
    let first_extra = thing_rows.len();
    for index in first_extra..thing_count {
        let mut thing = Thing::from(&things::BASE);
        thing.set_name(format!("Extra Thing {}", index - first_extra));
        thing_rows.push(thing);
    }

    let tables = Tables {
        states: state_rows,
        pointers,
        things: thing_rows,
        ammo: vec![
            Ammo::new("Bullets", 200, 10),
            Ammo::new("Shells", 50, 4),
            Ammo::new("Cells", 300, 20),
            Ammo::new("Rockets", 50, 1),
        ],
        sounds: sounds::rows(dialect)
            .into_iter()
            .map(|(name, priority)| Sound::new(name, priority, false))
            .collect(),
        sprites: sprites::names(dialect),
        strings: StringTable::new(dialect.string_addressing(), strings::rows(dialect)),
        misc: Misc::new(),
    };
    debug!(
        %dialect,
        states = tables.state_count(),
        things = tables.thing_count(),
        sounds = tables.sound_count(),
        "built baseline tables"
    );
    tables
}
