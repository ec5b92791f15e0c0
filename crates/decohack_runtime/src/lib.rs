//! DeHackEd and BEX patch serialization for DecoHack.
//!
//! This crate provides:
//! - [`write_patch`] - Changed-rows-only patch text for a compiled context
//! - [`ExportConfig`] - Line endings and preamble options
//! - [`compile_to_patch`] - Script source straight to patch text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use config::{DEFAULT_LINE_ENDING, ExportConfig};
pub use error::{ExportError, Result};
pub use pipeline::{compile_file_to_patch, compile_to_patch};
pub use writer::{PATCH_FORMAT, PATCH_SIGNATURE, escape_bex, patch_to_string, write_patch};
