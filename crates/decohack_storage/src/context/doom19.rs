use decohack_foundation::Dialect;
use tracing::debug;

use super::PatchContext;
use crate::baseline;
use crate::tables::Tables;

/// Context for the Doom 1.9 executables, where only states that shipped
/// with a code pointer can carry one.
#[derive(Clone, Debug)]
pub struct Doom19Context {
    dialect: Dialect,
    tables: Tables,
    free: Vec<bool>,
    /// Slot to state.
    slot_states: Vec<usize>,
    /// State to slot.
    state_slots: Vec<Option<usize>>,
}

impl Doom19Context {
    /// Creates a context for `Doom19` or `UltimateDoom19`.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        let tables = baseline::tables(dialect).clone();
        let count = tables.state_count();
        let slot_states: Vec<usize> = tables
            .pointers
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_null())
            .map(|(state, _)| state)
            .collect();
        let mut state_slots = vec![None; count];
        for (slot, &state) in slot_states.iter().enumerate() {
            state_slots[state] = Some(slot);
        }
        debug!(%dialect, slots = slot_states.len(), "created static-pointer context");
        Self {
            dialect,
            tables,
            free: vec![true; count],
            slot_states,
            state_slots,
        }
    }
}

impl PatchContext for Doom19Context {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn tables_mut(&mut self) -> &mut Tables {
        &mut self.tables
    }

    fn free_states(&self) -> &[bool] {
        &self.free
    }

    fn free_states_mut(&mut self) -> &mut [bool] {
        &mut self.free
    }

    fn state_action_pointer_index(&self, state: usize) -> Option<usize> {
        self.state_slots.get(state).copied().flatten()
    }

    fn action_pointer_state(&self, slot: usize) -> Option<usize> {
        self.slot_states.get(slot).copied()
    }

    fn action_pointer_count(&self) -> usize {
        self.slot_states.len()
    }
}
