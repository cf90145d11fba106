//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the base integer ALU. It handles arithmetic,
//! logical operations, comparisons and shifts for 64-bit operands, the RV64
//! W forms, and RV32 (which shares the W representation: 32-bit results
//! sign-extended into a 64-bit carrier).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, plus the U-type `lui`/`auipc` helpers
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer addition, subtraction and upper-immediate construction.
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::bits::sext12;
use crate::core::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a register-register integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `a`    - First operand (`rs1`)
    /// * `b`    - Second operand (`rs2`, also used as shift amount)
    /// * `is32` - Compute on the low 32 bits (W form, or any operation on RV32)
    ///
    /// # Returns
    ///
    /// The 64-bit result. For 32-bit operations the result is sign-extended
    /// from bit 31, including for the logically unsigned shifts.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsem_core::core::units::alu::Alu;
    /// use rvsem_core::core::signals::AluOp;
    ///
    /// // 64-bit addition wraps
    /// assert_eq!(Alu::execute(AluOp::Add, u64::MAX, 2, false), 1);
    ///
    /// // addw: 32-bit wrap, then sign extension
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1, true), 0xFFFF_FFFF_8000_0000);
    ///
    /// // Arithmetic shift keeps the sign
    /// assert_eq!(Alu::execute(AluOp::Sra, i64::MIN as u64, 63, false), u64::MAX);
    /// ```
    pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b, is32),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b, is32)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, is32),
        }
    }

    /// Executes an immediate-form ALU operation.
    ///
    /// `imm` is the raw 12-bit I-type field; it is sign-extended before use for
    /// every operation, `sltiu` included (the comparison itself is unsigned).
    /// For shifts only the low 6 (or 5) bits of the field matter, so the
    /// funct7 bits that distinguish `srai` from `srli` are harmlessly masked.
    pub fn execute_imm(op: AluOp, a: u64, imm: u32, is32: bool) -> u64 {
        Self::execute(op, a, sext12(imm), is32)
    }

    /// `lui`: places a 20-bit immediate in bits 31:12 and sign-extends.
    pub fn lui(imm20: u32) -> u64 {
        arithmetic::upper_immediate(imm20)
    }

    /// `auipc`: adds the `lui` value to `pc`. On RV32 the sum wraps at 32 bits.
    pub fn auipc(pc: u64, imm20: u32, is32: bool) -> u64 {
        arithmetic::execute(AluOp::Add, pc, arithmetic::upper_immediate(imm20), is32)
    }
}
