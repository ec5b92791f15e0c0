//! Integration tests for decohack_foundation
//!
//! Tests for error types, dialects, and range checks.

mod dialects;
mod errors;
