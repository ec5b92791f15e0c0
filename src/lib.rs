//! DecoHack - Compiler for Doom patch scripts
//!
//! This crate re-exports all layers of the DecoHack system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: decohack_runtime    - DeHackEd/BEX patch writer
//! Layer 2: decohack_language   - Lexer, includes, parser, compile()
//! Layer 1: decohack_storage    - Entity tables, diffs, action pointers, patch contexts
//! Layer 0: decohack_foundation - Core types (Error, Dialect, FeatureLevel)
//! ```

pub use decohack_foundation as foundation;
pub use decohack_language as language;
pub use decohack_runtime as runtime;
pub use decohack_storage as storage;
