//! Core state and execution units.
//!
//! This module contains the architectural state the model keeps (`fcsr`),
//! the operation tags each unit accepts, the pure execution units, and the
//! per-hart evaluation context that ties them together.

/// Architectural state (floating-point control and status register).
pub mod arch;

/// Per-hart evaluation context.
pub mod hart;

/// Operation tags for each execution unit.
pub mod signals;

/// Execution units (ALU, multiply/divide, load/store and atomics, FPU).
pub mod units;

pub use hart::Hart;
