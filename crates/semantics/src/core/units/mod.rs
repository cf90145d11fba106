//! Execution units.
//!
//! Each unit is a stateless evaluator: operands in, result out. The FPU is the
//! only unit with a side channel, and it reports exception flags by value so
//! the caller decides which `fcsr` they accrue into.

/// Arithmetic Logic Unit for base integer operations.
pub mod alu;

/// Floating-Point Unit for IEEE 754 operations.
pub mod fpu;

/// Load/Store Unit: access extension and atomic read-modify-write.
pub mod lsu;

/// Multiply/Divide Unit for the M extension.
pub mod mdu;
