//! Patch contexts: the mutable table set for one compile, plus the state
//! allocator.
//!
//! A context is created per compile from the dialect's baseline. The
//! dialect decides how action pointers bind to states:
//!
//! - [`Doom19Context`] has a fixed set of pointer slots, one per vanilla
//!   state that carries a code pointer.
//! - [`BoomContext`] lets any state carry any pointer; slot `N` is state `N`.

mod boom;
mod doom19;
mod pars;

use std::fmt;

use decohack_foundation::{
    Dialect, Error, FeatureLevel, PointerBinding, Result, StringAddressing, check_index,
};

use crate::baseline;
use crate::pointer::{ActionPointer, null_pointer};
use crate::tables::Tables;

pub use boom::BoomContext;
pub use doom19::Doom19Context;
pub use pars::ParTable;

/// Mutable tables for one compile of one dialect.
pub trait PatchContext: fmt::Debug {
    /// Target dialect.
    fn dialect(&self) -> Dialect;

    /// Current tables.
    fn tables(&self) -> &Tables;

    /// Mutable tables.
    fn tables_mut(&mut self) -> &mut Tables;

    /// One flag per state; `true` means free for fill.
    fn free_states(&self) -> &[bool];

    /// Mutable free-state flags.
    fn free_states_mut(&mut self) -> &mut [bool];

    /// The pointer slot owned by `state`, if any.
    fn state_action_pointer_index(&self, state: usize) -> Option<usize>;

    /// The state owning pointer slot `slot`, if the slot exists.
    fn action_pointer_state(&self, slot: usize) -> Option<usize>;

    /// Number of pointer slots.
    fn action_pointer_count(&self) -> usize;

    /// Par times, if the dialect has them.
    fn pars(&self) -> Option<&ParTable> {
        None
    }

    /// Mutable par times, if the dialect has them.
    fn pars_mut(&mut self) -> Option<&mut ParTable> {
        None
    }

    /// The unmodified tables for this dialect.
    fn baseline(&self) -> &'static Tables {
        baseline::tables(self.dialect())
    }

    /// Feature level of the dialect.
    fn feature_level(&self) -> FeatureLevel {
        self.dialect().feature_level()
    }

    /// Whether the `pars` section is accepted.
    fn supports_pars(&self) -> bool {
        self.pars().is_some()
    }

    /// How strings are addressed.
    fn string_addressing(&self) -> StringAddressing {
        self.dialect().string_addressing()
    }

    /// How action pointers bind to states.
    fn pointer_binding(&self) -> PointerBinding {
        self.dialect().pointer_binding()
    }

    /// Whether `state` is free for fill.
    ///
    /// # Errors
    /// Fails if `state` is out of range.
    fn is_free_state(&self, state: usize) -> Result<bool> {
        let flags = self.free_states();
        let index = check_index("State", state_as_i64(state), flags.len())?;
        Ok(flags[index])
    }

    /// Marks `state` free or claimed.
    ///
    /// # Errors
    /// Fails if `state` is out of range.
    fn set_free_state(&mut self, state: usize, free: bool) -> Result<()> {
        let flags = self.free_states_mut();
        let index = check_index("State", state_as_i64(state), flags.len())?;
        flags[index] = free;
        Ok(())
    }

    /// First free state after `from_exclusive`.
    fn find_next_free_state(&self, from_exclusive: usize) -> Option<usize> {
        let flags = self.free_states();
        (from_exclusive.saturating_add(1)..flags.len()).find(|&i| flags[i])
    }

    /// First free state after `from_exclusive` that owns a pointer slot.
    fn find_next_free_action_pointer_state(&self, from_exclusive: usize) -> Option<usize> {
        let flags = self.free_states();
        (from_exclusive.saturating_add(1)..flags.len())
            .find(|&i| flags[i] && self.state_action_pointer_index(i).is_some())
    }

    /// The pointer in slot `slot`.
    ///
    /// # Errors
    /// Fails if the slot does not exist.
    fn action_pointer(&self, slot: usize) -> Result<&'static ActionPointer> {
        let state = self.action_pointer_state(slot).ok_or_else(|| {
            Error::out_of_range("Pointer", state_as_i64(slot), self.action_pointer_count())
        })?;
        self.tables().pointer(state)
    }

    /// Replaces the pointer in slot `slot`. `None` stores the no-op pointer.
    ///
    /// # Errors
    /// Fails if the slot does not exist.
    fn set_action_pointer(
        &mut self,
        slot: usize,
        pointer: Option<&'static ActionPointer>,
    ) -> Result<()> {
        let state = self.action_pointer_state(slot).ok_or_else(|| {
            Error::out_of_range("Pointer", state_as_i64(slot), self.action_pointer_count())
        })?;
        self.tables_mut()
            .set_pointer(state, pointer.unwrap_or_else(null_pointer))
    }
}

fn state_as_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Creates a fresh context for `dialect`.
#[must_use]
pub fn new_context(dialect: Dialect) -> Box<dyn PatchContext> {
    match dialect.pointer_binding() {
        PointerBinding::Static => Box::new(Doom19Context::new(dialect)),
        PointerBinding::Free => Box::new(BoomContext::new(dialect)),
    }
}
