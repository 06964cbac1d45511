//! Balance wheel: a radial self-assessment chart.
//!
//! This crate turns an ordered list of scored life areas into the drawing
//! primitives of a "balance wheel" (calibration rings, filled wedges, divider
//! spokes, curved label paths). The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (segment edits, radial layout).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (state persistence, chart config).
//!   The persistence port is a trait so tests substitute an in-memory fake.
//!
//! The [`svg`] module is a thin renderer over the layout output; the binary
//! wires both to a small CLI.

pub mod core;
pub mod io;
pub mod logging;
pub mod svg;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
