//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction for the 64-bit and 32-bit
//! (W / RV32) variants, with two's-complement wraparound and no overflow
//! trap. Also builds U-type immediates for `lui` and `auipc`.

use crate::common::bits::sext32;
use crate::common::constants::{UIMM_MASK, UIMM_SHIFT};
use crate::core::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// The low 32 bits of a 64-bit sum are the 32-bit sum, so the W variants
/// compute at full width and sign-extend. Returns `0` for non-arithmetic
/// opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    let full = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => return 0,
    };
    if is32 { sext32(full) } else { full }
}

/// Builds the register value of a U-type immediate (`imm20 << 12`).
///
/// Bit 31 of the shifted value is replicated into the upper half, so
/// `lui 0x80000` yields `0xFFFF_FFFF_8000_0000`.
pub fn upper_immediate(imm20: u32) -> u64 {
    sext32(((imm20 & UIMM_MASK) << UIMM_SHIFT) as u64)
}
