//! Integration tests for decohack_runtime
//!
//! Tests patch text produced from compiled scripts.

mod export;
