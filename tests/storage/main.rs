//! Integration tests for decohack_storage
//!
//! Tests for baseline tables, patch contexts, and the action-pointer registry.

mod baseline;
mod contexts;
mod pointers;
