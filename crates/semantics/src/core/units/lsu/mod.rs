//! Load/Store Unit (LSU).
//!
//! This module covers the data-path half of memory instructions; address
//! generation, translation and the memory itself belong to the caller.
//! - [`access`]: Width extension of loaded values and truncation of stored ones.
//! - [`atomic`]: Read-modify-write semantics for the A extension AMOs.

/// Load extension and store truncation.
pub mod access;

/// Atomic memory operation ALU (RISC-V A extension).
pub mod atomic;

use crate::core::signals::{AmoWidth, AtomicOp, MemWidth};

pub use atomic::AmoResult;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Extends a raw loaded value to register width.
    ///
    /// Delegates to [`access::load`].
    pub const fn load(raw: u64, width: MemWidth, signed: bool) -> u64 {
        access::load(raw, width, signed)
    }

    /// Truncates a register value to the store width.
    ///
    /// Delegates to [`access::store`].
    pub const fn store(val: u64, width: MemWidth) -> u64 {
        access::store(val, width)
    }

    /// Performs an atomic read-modify-write.
    ///
    /// Delegates to [`atomic::atomic_alu`]. See that function for full
    /// documentation.
    pub fn atomic(op: AtomicOp, mem_val: u64, reg_val: u64, width: AmoWidth) -> AmoResult {
        atomic::atomic_alu(op, mem_val, reg_val, width)
    }
}
