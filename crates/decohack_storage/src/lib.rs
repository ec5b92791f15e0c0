//! Engine tables, baseline data, and patch contexts for DecoHack.
//!
//! This crate provides:
//! - Entity rows: [`State`], [`Thing`], [`Ammo`], [`Sound`], [`Misc`]
//! - [`Diffable`] - Changed-attribute reporting gated by feature level
//! - [`ActionPointerRegistry`] - The catalog of named state callbacks
//! - [`baseline::tables`] - Vanilla-equivalent tables per dialect
//! - [`PatchContext`] - Per-compile tables plus the free-state allocator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ammo;
pub mod annotation;
pub mod baseline;
pub mod context;
pub mod diff;
pub mod misc;
pub mod pointer;
pub mod sound;
pub mod state;
pub mod tables;
pub mod thing;

pub use ammo::Ammo;
pub use annotation::Annotations;
pub use context::{BoomContext, Doom19Context, ParTable, PatchContext, new_context};
pub use diff::{DiffField, Diffable};
pub use misc::Misc;
pub use pointer::{ActionPointer, ActionPointerRegistry, ParamType, PointerKind, null_pointer};
pub use sound::Sound;
pub use state::State;
pub use tables::{StringEntry, StringTable, Tables};
pub use thing::Thing;
