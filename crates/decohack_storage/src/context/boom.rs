use decohack_foundation::Dialect;
use tracing::debug;

use super::{ParTable, PatchContext};
use crate::baseline;
use crate::tables::Tables;

/// Context for Boom and later, where every state can carry any pointer.
#[derive(Clone, Debug)]
pub struct BoomContext {
    dialect: Dialect,
    tables: Tables,
    free: Vec<bool>,
    pars: ParTable,
}

impl BoomContext {
    /// Creates a context for `Boom`, `Mbf` or `Extended`.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        let tables = baseline::tables(dialect).clone();
        let count = tables.state_count();
        debug!(%dialect, states = count, "created free-pointer context");
        Self {
            dialect,
            tables,
            free: vec![true; count],
            pars: ParTable::new(),
        }
    }
}

impl PatchContext for BoomContext {
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
        (state < self.free.len()).then_some(state)
    }

    fn action_pointer_state(&self, slot: usize) -> Option<usize> {
        self.state_action_pointer_index(slot)
    }

    fn action_pointer_count(&self) -> usize {
        self.free.len()
    }

    fn pars(&self) -> Option<&ParTable> {
        Some(&self.pars)
    }

    fn pars_mut(&mut self) -> Option<&mut ParTable> {
        Some(&mut self.pars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_owns_a_slot() {
        let ctx = BoomContext::new(Dialect::Boom);
        assert_eq!(ctx.state_action_pointer_index(5), Some(5));
        assert_eq!(ctx.state_action_pointer_index(968), None);
        assert_eq!(ctx.find_next_free_action_pointer_state(4), Some(5));
    }

    #[test]
    fn pars_are_available() {
        let mut ctx = BoomContext::new(Dialect::Mbf);
        ctx.pars_mut().unwrap().set(1, 1, 30);
        assert_eq!(ctx.pars().unwrap().get(1, 1), Some(30));
    }
}
