//! Division and remainder.
//!
//! RISC-V division never traps:
//!
//! | Case                  | `div`/`divu` | `rem`/`remu` |
//! |-----------------------|--------------|--------------|
//! | divisor = 0           | all ones     | dividend     |
//! | `MIN / -1` (signed)   | `MIN`        | 0            |
//!
//! The 32-bit forms apply the same rules to the low words and sign-extend
//! the 32-bit result, including the dividend returned by `remw`/`remuw`.

use crate::core::signals::MulDivOp;

/// Executes a division or remainder operation. Returns `0` for other opcodes.
pub fn execute(op: MulDivOp, a: u64, b: u64, is32: bool) -> u64 {
    match op {
        MulDivOp::Div => {
            if is32 {
                if (b as i32) == 0 {
                    u64::MAX
                } else {
                    (a as i32).wrapping_div(b as i32) as i64 as u64
                }
            } else if b == 0 {
                u64::MAX
            } else {
                (a as i64).wrapping_div(b as i64) as u64
            }
        }
        MulDivOp::Divu => {
            if is32 {
                if (b as u32) == 0 {
                    u64::MAX
                } else {
                    ((a as u32) / (b as u32)) as i32 as i64 as u64
                }
            } else if b == 0 {
                u64::MAX
            } else {
                a / b
            }
        }
        MulDivOp::Rem => {
            if is32 {
                if (b as i32) == 0 {
                    (a as i32) as i64 as u64
                } else {
                    (a as i32).wrapping_rem(b as i32) as i64 as u64
                }
            } else if b == 0 {
                a
            } else {
                (a as i64).wrapping_rem(b as i64) as u64
            }
        }
        MulDivOp::Remu => {
            if is32 {
                if (b as u32) == 0 {
                    (a as u32) as i32 as i64 as u64
                } else {
                    ((a as u32) % (b as u32)) as i32 as i64 as u64
                }
            } else if b == 0 {
                a
            } else {
                a % b
            }
        }
        _ => 0,
    }
}
