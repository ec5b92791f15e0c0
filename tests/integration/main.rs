//! Cross-layer integration tests for DecoHack
//!
//! Tests that verify correct interaction between multiple crates.

mod properties;
mod scenarios;
