//! ALU shift operations.
//!
//! Shift amounts are taken modulo the operand width: the low 6 bits (0-63)
//! for 64-bit shifts and the low 5 bits (0-31) for W / RV32 shifts. They are
//! never saturated. All 32-bit results are sign-extended from bit 31, so
//! `srlw` of a value with bit 31 set by 0 yields a negative register.

use crate::common::bits::sext32;
use crate::common::constants::{SHAMT_MASK_32, SHAMT_MASK_64};
use crate::core::signals::AluOp;

/// Executes a shift operation.
///
/// `b` is the shift amount; bits above the shamt field are ignored.
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        let shamt = b as u32 & SHAMT_MASK_32;
        let word = match op {
            AluOp::Sll => (a as u32) << shamt,
            AluOp::Srl => (a as u32) >> shamt,
            AluOp::Sra => ((a as i32) >> shamt) as u32,
            _ => return 0,
        };
        sext32(u64::from(word))
    } else {
        let shamt = (b & SHAMT_MASK_64) as u32;
        match op {
            AluOp::Sll => a << shamt,
            AluOp::Srl => a >> shamt,
            AluOp::Sra => ((a as i64) >> shamt) as u64,
            _ => 0,
        }
    }
}
