//! Floating-Point Unit (FPU).
//!
//! This module implements the floating-point arithmetic unit used in the
//! Execute stage. It handles single-precision (F) and double-precision (D)
//! floating-point operations, including fused multiply-add, comparisons,
//! and conversions between integer and floating-point formats.
//!
//! Operations are organized into submodules:
//! - [`nan_handling`]: NaN boxing/unboxing, canonical NaN propagation, min/max
//!   and sign injection.
//! - [`rounding_modes`]: Rounding mode encoding.
//! - [`exception_flags`]: Exception flag set.
//! - [`arithmetic`]: Correctly rounded arithmetic and fused multiply-add.
//! - [`compare`]: Comparisons and classification.
//! - [`convert`]: Integer and precision conversions.
//!
//! Register values are 64-bit bit patterns. Single-precision operands are
//! unboxed on the way in and single-precision results boxed on the way out;
//! integer results (compares, `fclass`, `fcvt` to integer, `fmv.x.*`) are
//! written unboxed.

/// Rounded arithmetic (add, sub, mul, div, sqrt, fused multiply-add).
pub mod arithmetic;

/// Comparisons and `fclass`.
pub mod compare;

/// Integer and precision conversions.
pub mod convert;

/// Floating-point exception flag types.
pub mod exception_flags;

/// NaN boxing, unboxing, and canonical NaN propagation.
pub mod nan_handling;

/// Rounding mode definitions and support.
pub mod rounding_modes;

use crate::common::bits::sext32;
use crate::common::error::ExecError;
use crate::core::arch::fcsr::Fcsr;
use crate::core::signals::FpOp;

use self::arithmetic::{BinaryOp, FusedOp};
use self::compare::Predicate;
use self::convert::IntFormat;
use self::exception_flags::FpFlags;
use self::nan_handling::{FloatFormat, read_operand, write_result};
use self::rounding_modes::RoundingMode;

/// Floating-Point Unit (FPU) for floating-point operations.
///
/// Implements all RISC-V floating-point operations including arithmetic,
/// comparisons, conversions, and fused multiply-add operations from
/// the F (single-precision) and D (double-precision) extensions.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Boxes an f32 bit pattern into a 64-bit NaN-boxed register value.
    ///
    /// Convenience re-export of [`nan_handling::box_f32`].
    #[inline]
    pub const fn box_f32(bits: u32) -> u64 {
        nan_handling::box_f32(bits)
    }

    /// Executes a floating-point operation against a hart's `fcsr`.
    ///
    /// `rm_field` is the instruction's 3-bit rounding mode; it is only
    /// consulted for operations that encode one. Raised flags are ORed into
    /// `fcsr.fflags`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::ReservedRoundingMode`] if the operation rounds and
    /// `rm_field` (or `frm`, when dynamic) is a reserved encoding. The `fcsr`
    /// is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsem_core::Fcsr;
    /// use rvsem_core::core::signals::FpOp;
    /// use rvsem_core::core::units::fpu::Fpu;
    /// use rvsem_core::core::units::fpu::rounding_modes::DYNAMIC;
    ///
    /// let mut fcsr = Fcsr::new();
    /// let ten = Fpu::box_f32(10.0f32.to_bits());
    /// let zero = Fpu::box_f32(0);
    ///
    /// let r = Fpu::execute(FpOp::FDiv, ten, zero, 0, true, DYNAMIC, &mut fcsr).unwrap();
    /// assert_eq!(r, Fpu::box_f32(f32::INFINITY.to_bits()));
    /// assert_eq!(fcsr.frflags(), 0x8);
    /// ```
    pub fn execute(
        op: FpOp,
        a: u64,
        b: u64,
        c: u64,
        is32: bool,
        rm_field: u8,
        fcsr: &mut Fcsr,
    ) -> Result<u64, ExecError> {
        let rm = if op.uses_rounding_mode() {
            fcsr.resolve_rounding_mode(rm_field)?
        } else {
            RoundingMode::default()
        };
        let (result, flags) = Self::execute_full(op, a, b, c, is32, rm);
        if !flags.is_empty() {
            tracing::trace!(?op, is32, %flags, "fp exception flags raised");
        }
        fcsr.accrue(flags);
        Ok(result)
    }

    /// Executes a floating-point operation with an already-resolved rounding
    /// mode, returning the register result and the flags it raised.
    ///
    /// This is the pure core of [`Fpu::execute`]; it touches no state.
    pub fn execute_full(
        op: FpOp,
        a: u64,
        b: u64,
        c: u64,
        is32: bool,
        rm: RoundingMode,
    ) -> (u64, FpFlags) {
        let fmt = FloatFormat::select(is32);
        let (x, y, z) = (
            read_operand(a, is32),
            read_operand(b, is32),
            read_operand(c, is32),
        );
        let float = |(bits, flags): (u64, FpFlags)| (write_result(bits, is32), flags);

        match op {
            FpOp::FAdd => float(arithmetic::binary(BinaryOp::Add, x, y, is32, rm)),
            FpOp::FSub => float(arithmetic::binary(BinaryOp::Sub, x, y, is32, rm)),
            FpOp::FMul => float(arithmetic::binary(BinaryOp::Mul, x, y, is32, rm)),
            FpOp::FDiv => float(arithmetic::binary(BinaryOp::Div, x, y, is32, rm)),
            FpOp::FSqrt => float(arithmetic::sqrt(x, is32, rm)),

            FpOp::FMin => float(fmt.min(x, y)),
            FpOp::FMax => float(fmt.max(x, y)),

            FpOp::FMAdd => float(arithmetic::fused(FusedOp::MulAdd, x, y, z, is32, rm)),
            FpOp::FMSub => float(arithmetic::fused(FusedOp::MulSub, x, y, z, is32, rm)),
            FpOp::FNMAdd => float(arithmetic::fused(FusedOp::NegMulAdd, x, y, z, is32, rm)),
            FpOp::FNMSub => float(arithmetic::fused(FusedOp::NegMulSub, x, y, z, is32, rm)),

            FpOp::FSgnJ => float((fmt.sign_inject(x, y), FpFlags::NONE)),
            FpOp::FSgnJN => float((fmt.sign_inject_neg(x, y), FpFlags::NONE)),
            FpOp::FSgnJX => float((fmt.sign_inject_xor(x, y), FpFlags::NONE)),

            FpOp::FEq => compare::compare(Predicate::Eq, x, y, is32),
            FpOp::FLt => compare::compare(Predicate::Lt, x, y, is32),
            FpOp::FLe => compare::compare(Predicate::Le, x, y, is32),
            FpOp::FClass => (compare::classify(x, is32), FpFlags::NONE),

            FpOp::FCvtW => convert::to_int(x, is32, IntFormat::Word, rm),
            FpOp::FCvtWu => convert::to_int(x, is32, IntFormat::WordUnsigned, rm),
            FpOp::FCvtL => convert::to_int(x, is32, IntFormat::Long, rm),
            FpOp::FCvtLu => convert::to_int(x, is32, IntFormat::LongUnsigned, rm),

            // Integer source: `a` is an integer register, not a float.
            FpOp::FCvtFromW => float(convert::from_int(a, IntFormat::Word, is32, rm)),
            FpOp::FCvtFromWu => float(convert::from_int(a, IntFormat::WordUnsigned, is32, rm)),
            FpOp::FCvtFromL => float(convert::from_int(a, IntFormat::Long, is32, rm)),
            FpOp::FCvtFromLu => float(convert::from_int(a, IntFormat::LongUnsigned, is32, rm)),

            // Precision changes ignore `is32`; the direction is in the tag.
            FpOp::FCvtSD => {
                let (bits, flags) = convert::double_to_single(a, rm);
                (write_result(bits, true), flags)
            }
            FpOp::FCvtDS => convert::single_to_double(read_operand(a, true)),

            // Bit moves ignore boxing and never raise flags.
            FpOp::FMvToX => {
                let bits = if is32 { sext32(a) } else { a };
                (bits, FpFlags::NONE)
            }
            FpOp::FMvToF => (write_result(a, is32), FpFlags::NONE),
        }
    }
}
