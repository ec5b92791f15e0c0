//! Core types, dialects, and errors for DecoHack.
//!
//! This crate provides:
//! - [`Dialect`] - The target patch formats and their capabilities
//! - [`FeatureLevel`] - The ordered lattice gating exported attributes
//! - [`Error`] - Rich error types with context
//! - Range helpers used by every entity setter

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dialect;
pub mod error;
pub mod range;

pub use dialect::{Dialect, FeatureLevel, PointerBinding, StringAddressing};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use range::{check_index, check_range};
