//! Multiply/Divide Unit (MDU).
//!
//! Implements the M extension: full and high-half multiplication, and
//! division/remainder with RISC-V's non-trapping edge cases.
//!
//! - [`multiply`]: Mul, Mulh, Mulhsu, Mulhu
//! - [`divide`]:   Div, Divu, Rem, Remu
//!
//! With `is32` the unit computes the W forms on RV64 (`mulw`, `divw`,
//! `divuw`, `remw`, `remuw`) and every operation on RV32, where `mulh*`
//! returns bits 63:32 of the 64-bit product. Results are always
//! sign-extended from bit 31 in that mode.

/// Multiplication (low and high halves).
pub mod multiply;

/// Division and remainder.
pub mod divide;

use crate::core::signals::MulDivOp;

/// Multiply/Divide Unit for M-extension operations.
#[derive(Debug)]
pub struct Mdu;

impl Mdu {
    /// Executes a multiply or divide operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsem_core::core::units::mdu::Mdu;
    /// use rvsem_core::core::signals::MulDivOp;
    ///
    /// assert_eq!(Mdu::execute(MulDivOp::Mulhu, 0x8000_0000_0000_0000, 2, false), 1);
    /// assert_eq!(Mdu::execute(MulDivOp::Div, 7, 0, false), u64::MAX);
    /// assert_eq!(Mdu::execute(MulDivOp::Rem, i64::MIN as u64, u64::MAX, false), 0);
    /// ```
    pub fn execute(op: MulDivOp, a: u64, b: u64, is32: bool) -> u64 {
        match op {
            MulDivOp::Mul | MulDivOp::Mulh | MulDivOp::Mulhsu | MulDivOp::Mulhu => {
                multiply::execute(op, a, b, is32)
            }
            MulDivOp::Div | MulDivOp::Divu | MulDivOp::Rem | MulDivOp::Remu => {
                divide::execute(op, a, b, is32)
            }
        }
    }
}
