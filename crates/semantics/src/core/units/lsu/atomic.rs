//! Atomic memory operation ALU.
//!
//! Implements the read-modify-write arithmetic for RISC-V A-extension
//! atomic memory operations (AMO). Given the current memory value and the
//! register source value, computes both what the instruction returns in
//! `rd` and what is written back to memory.
//!
//! The `.w` forms work on the low 32 bits of both inputs. Both reported
//! values are sign-extended from bit 31, even for the bitwise operations and
//! the unsigned min/max: a 32-bit quantity is always held sign-extended in a
//! 64-bit register. The `.d` forms use all 64 bits unchanged.
//!
//! This is single-operation semantics only. Indivisibility across harts is
//! the caller's job: hold whatever lock guards the target word for the
//! duration of the load, this computation, and the store.

use crate::common::bits::sext32;
use crate::core::signals::{AmoWidth, AtomicOp};

/// Outcome of one AMO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmoResult {
    /// The memory value before the operation, as written to `rd`.
    pub loaded: u64,
    /// The value written back to memory.
    pub stored: u64,
}

/// Performs an atomic ALU operation for AMO instructions.
///
/// # Arguments
///
/// * `op`      - The atomic operation type
/// * `mem_val` - The current value read from memory
/// * `reg_val` - The value from the source register (`rs2`)
/// * `width`   - Word (`.w`) or doubleword (`.d`)
///
/// # Examples
///
/// ```
/// use rvsem_core::core::signals::{AmoWidth, AtomicOp};
/// use rvsem_core::core::units::lsu::atomic::atomic_alu;
///
/// let r = atomic_alu(AtomicOp::Add, 0xFFFF_FFFF, 1, AmoWidth::Word);
/// assert_eq!(r.loaded, u64::MAX); // -1, sign-extended
/// assert_eq!(r.stored, 0);
/// ```
pub fn atomic_alu(op: AtomicOp, mem_val: u64, reg_val: u64, width: AmoWidth) -> AmoResult {
    match width {
        AmoWidth::Word => {
            let a = mem_val as i32;
            let b = reg_val as i32;
            let res = match op {
                AtomicOp::Swap => b,
                AtomicOp::Add => a.wrapping_add(b),
                AtomicOp::Xor => a ^ b,
                AtomicOp::And => a & b,
                AtomicOp::Or => a | b,
                AtomicOp::Min => a.min(b),
                AtomicOp::Max => a.max(b),
                AtomicOp::Minu => (a as u32).min(b as u32) as i32,
                AtomicOp::Maxu => (a as u32).max(b as u32) as i32,
            };
            AmoResult {
                loaded: sext32(mem_val),
                stored: res as i64 as u64,
            }
        }
        AmoWidth::Double => {
            let a = mem_val as i64;
            let b = reg_val as i64;
            let res = match op {
                AtomicOp::Swap => reg_val,
                AtomicOp::Add => mem_val.wrapping_add(reg_val),
                AtomicOp::Xor => mem_val ^ reg_val,
                AtomicOp::And => mem_val & reg_val,
                AtomicOp::Or => mem_val | reg_val,
                AtomicOp::Min => a.min(b) as u64,
                AtomicOp::Max => a.max(b) as u64,
                AtomicOp::Minu => mem_val.min(reg_val),
                AtomicOp::Maxu => mem_val.max(reg_val),
            };
            AmoResult {
                loaded: mem_val,
                stored: res,
            }
        }
    }
}
