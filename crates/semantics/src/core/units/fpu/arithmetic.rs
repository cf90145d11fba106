//! Rounded floating-point arithmetic.
//!
//! Addition, subtraction, multiplication, division, square root and the
//! fused multiply-add family are evaluated with `simple-soft-float`, which
//! computes the exact result and rounds once in the requested mode, raising
//! IEEE 754 flags as it goes. The host FPU is never consulted, so results and
//! flags are identical on every platform and in every rounding mode.
//!
//! NaN operands never reach the soft-float layer: [`FloatFormat::propagate_nan`]
//! settles them first so every NaN result is canonical. NaNs the operation
//! itself creates (0/0, ∞−∞, 0×∞, √−x) are canonicalized on the way out.

use simple_soft_float::{F32, F64, FPState, RoundingMode as SoftRoundingMode};

use super::exception_flags::FpFlags;
use super::nan_handling::FloatFormat;
use super::rounding_modes::RoundingMode;

/// A two-operand rounded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
}

/// Sign adjustments that turn `a * b + c` into the other fused operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FusedOp {
    /// `a * b + c`
    MulAdd,
    /// `a * b - c`
    MulSub,
    /// `-(a * b) - c`
    NegMulAdd,
    /// `-(a * b) + c`
    NegMulSub,
}

/// Computes a rounded binary operation on raw bit patterns.
pub fn binary(op: BinaryOp, a: u64, b: u64, is32: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let fmt = FloatFormat::select(is32);
    if let Some(nan) = fmt.propagate_nan(&[a, b]) {
        return nan;
    }

    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());
    let bits = if is32 {
        let (x, y) = (F32::from_bits(a as u32), F32::from_bits(b as u32));
        let r = match op {
            BinaryOp::Add => x.add(&y, rm, Some(&mut state)),
            BinaryOp::Sub => x.sub(&y, rm, Some(&mut state)),
            BinaryOp::Mul => x.mul(&y, rm, Some(&mut state)),
            BinaryOp::Div => x.div(&y, rm, Some(&mut state)),
        };
        u64::from(r.into_bits())
    } else {
        let (x, y) = (F64::from_bits(a), F64::from_bits(b));
        let r = match op {
            BinaryOp::Add => x.add(&y, rm, Some(&mut state)),
            BinaryOp::Sub => x.sub(&y, rm, Some(&mut state)),
            BinaryOp::Mul => x.mul(&y, rm, Some(&mut state)),
            BinaryOp::Div => x.div(&y, rm, Some(&mut state)),
        };
        r.into_bits()
    };
    (fmt.canonicalize(bits), FpFlags::from(state.status_flags))
}

/// Computes a rounded square root on a raw bit pattern.
///
/// Any negative non-zero input (including −∞) is invalid; `sqrt(-0) = -0`.
pub fn sqrt(a: u64, is32: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let fmt = FloatFormat::select(is32);
    if let Some(nan) = fmt.propagate_nan(&[a]) {
        return nan;
    }
    if fmt.is_negative(a) && !fmt.is_zero(a) {
        return (fmt.canonical_nan, FpFlags::NV);
    }

    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());
    let bits = if is32 {
        u64::from(F32::from_bits(a as u32).sqrt(rm, Some(&mut state)).into_bits())
    } else {
        F64::from_bits(a).sqrt(rm, Some(&mut state)).into_bits()
    };
    (fmt.canonicalize(bits), FpFlags::from(state.status_flags))
}

/// Computes a fused multiply-add with a single rounding.
///
/// The negated forms are produced by flipping operand signs before the
/// exact computation (`-(a*b) = (-a)*b`), which rounds the same exact value
/// the ISA defines. `∞ × 0 + c` raises NV even when `c` is a quiet NaN.
pub fn fused(op: FusedOp, a: u64, b: u64, c: u64, is32: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let fmt = FloatFormat::select(is32);
    let inf_times_zero = (fmt.is_infinite(a) && fmt.is_zero(b))
        || (fmt.is_zero(a) && fmt.is_infinite(b));
    if let Some((nan, mut flags)) = fmt.propagate_nan(&[a, b, c]) {
        if inf_times_zero {
            flags |= FpFlags::NV;
        }
        return (nan, flags);
    }

    let (a, c) = match op {
        FusedOp::MulAdd => (a, c),
        FusedOp::MulSub => (a, fmt.negate(c)),
        FusedOp::NegMulAdd => (fmt.negate(a), fmt.negate(c)),
        FusedOp::NegMulSub => (fmt.negate(a), c),
    };

    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());
    let bits = if is32 {
        let (x, y, z) = (
            F32::from_bits(a as u32),
            F32::from_bits(b as u32),
            F32::from_bits(c as u32),
        );
        u64::from(x.fused_mul_add(&y, &z, rm, Some(&mut state)).into_bits())
    } else {
        let (x, y, z) = (F64::from_bits(a), F64::from_bits(b), F64::from_bits(c));
        x.fused_mul_add(&y, &z, rm, Some(&mut state)).into_bits()
    };
    (fmt.canonicalize(bits), FpFlags::from(state.status_flags))
}
