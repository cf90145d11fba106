//! RISC-V execute-stage reference semantics.
//!
//! This crate models what a RISC-V core computes, not how it is pipelined:
//! 1. **Integer:** RV32/RV64 base ALU operations, including the RV64 "W" forms.
//! 2. **Multiply/Divide:** The M extension with RISC-V's non-trapping division rules.
//! 3. **Atomics:** Read-modify-write semantics of the A extension AMOs.
//! 4. **Floating Point:** Bit-exact F and D arithmetic with rounding modes and `fflags`.
//! 5. **Context:** A per-hart evaluation context owning its own `fcsr`.
//!
//! The units are pure functions over register bit patterns. Floating-point control
//! state lives in an explicit [`Fcsr`] value rather than in ambient global state, so
//! any number of harts can be evaluated side by side.

/// Common types (error definitions, bit-manipulation helpers, constants).
pub mod common;
/// Model configuration (XLEN, enabled extensions, initial `fcsr`).
pub mod config;
/// Core state and execution units.
pub mod core;

pub use crate::common::{ConfigError, ExecError};
pub use crate::config::Config;
pub use crate::core::Hart;
pub use crate::core::arch::fcsr::Fcsr;
