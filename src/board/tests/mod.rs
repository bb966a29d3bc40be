//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-kind movement rules
//! - `edge_cases.rs` - Errors, captures and bookkeeping
//! - `proptest.rs` - Property-based tests
