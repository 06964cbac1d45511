//! Deterministic, pure logic for the balance wheel.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! segment collections and return deterministic outputs suitable for tests.

pub mod edit;
pub mod geometry;
pub mod segment;
