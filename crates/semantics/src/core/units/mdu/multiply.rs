//! Multiplication.
//!
//! The high-half products are computed through a genuine double-width
//! integer intermediate (`i128`/`u128` for 64-bit operands, `i64`/`u64` for
//! 32-bit operands), never through floating point.

use crate::common::bits::sext32;
use crate::common::constants::{WORD_BITS, XLEN_BITS};
use crate::core::signals::MulDivOp;

/// Executes a multiply operation. Returns `0` for non-multiply opcodes.
pub fn execute(op: MulDivOp, a: u64, b: u64, is32: bool) -> u64 {
    match op {
        MulDivOp::Mul => {
            if is32 {
                (a as i32).wrapping_mul(b as i32) as i64 as u64
            } else {
                a.wrapping_mul(b)
            }
        }
        MulDivOp::Mulh => {
            if is32 {
                ((a as i32 as i64 * b as i32 as i64) >> WORD_BITS) as u64
            } else {
                // Sign-extend through i64: a direct u64 -> i128 cast zero-extends.
                (((a as i64 as i128) * (b as i64 as i128)) >> XLEN_BITS) as u64
            }
        }
        MulDivOp::Mulhsu => {
            if is32 {
                ((a as i32 as i64 * (b as u32) as i64) >> WORD_BITS) as u64
            } else {
                // |a| <= 2^63 and b < 2^64, so the product fits in i128.
                (((a as i64 as i128) * (b as i128)) >> XLEN_BITS) as u64
            }
        }
        MulDivOp::Mulhu => {
            if is32 {
                sext32(((a as u32) as u64 * (b as u32) as u64) >> WORD_BITS)
            } else {
                (((a as u128) * (b as u128)) >> XLEN_BITS) as u64
            }
        }
        _ => 0,
    }
}
