//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than (signed and unsigned).
//!
//! On RV32 (`is32`) both operands are first re-extended from bit 31, so
//! comparisons only see the low 32 bits and bitwise results stay in the
//! sign-extended register representation.

use crate::common::bits::sext32;
use crate::core::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// The comparison result is always 0 or 1. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    // Sign extension preserves both signed and unsigned order.
    let (a, b) = if is32 { (sext32(a), sext32(b)) } else { (a, b) };
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => u64::from((a as i64) < (b as i64)),
        AluOp::Sltu => u64::from(a < b),
        _ => 0,
    }
}
