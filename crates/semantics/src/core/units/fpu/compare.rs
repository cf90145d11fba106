//! Floating-point comparisons and classification.
//!
//! Comparisons write 0 or 1 to an integer register. Any NaN operand makes the
//! comparison false. `feq` is a quiet comparison and only signals on a
//! signaling NaN; `flt` and `fle` are signaling comparisons and raise NV for
//! any NaN operand.

use super::exception_flags::FpFlags;
use super::nan_handling::FloatFormat;

/// Comparison predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// `a == b` (quiet).
    Eq,
    /// `a < b` (signaling).
    Lt,
    /// `a <= b` (signaling).
    Le,
}

/// Compares two raw values of the given precision.
///
/// Returns the integer result and the flags raised. `+0` and `-0` compare
/// equal.
#[allow(clippy::float_cmp)]
pub fn compare(pred: Predicate, a: u64, b: u64, is32: bool) -> (u64, FpFlags) {
    let fmt = FloatFormat::select(is32);
    if fmt.is_nan(a) || fmt.is_nan(b) {
        let signals = match pred {
            Predicate::Eq => fmt.is_snan(a) || fmt.is_snan(b),
            Predicate::Lt | Predicate::Le => true,
        };
        let flags = if signals { FpFlags::NV } else { FpFlags::NONE };
        return (0, flags);
    }

    let result = if is32 {
        let (x, y) = (f32::from_bits(a as u32), f32::from_bits(b as u32));
        match pred {
            Predicate::Eq => x == y,
            Predicate::Lt => x < y,
            Predicate::Le => x <= y,
        }
    } else {
        let (x, y) = (f64::from_bits(a), f64::from_bits(b));
        match pred {
            Predicate::Eq => x == y,
            Predicate::Lt => x < y,
            Predicate::Le => x <= y,
        }
    };
    (u64::from(result), FpFlags::NONE)
}

/// `fclass` result bits.
pub mod class {
    /// −∞
    pub const NEG_INF: u64 = 1 << 0;
    /// Negative normal number.
    pub const NEG_NORMAL: u64 = 1 << 1;
    /// Negative subnormal number.
    pub const NEG_SUBNORMAL: u64 = 1 << 2;
    /// −0
    pub const NEG_ZERO: u64 = 1 << 3;
    /// +0
    pub const POS_ZERO: u64 = 1 << 4;
    /// Positive subnormal number.
    pub const POS_SUBNORMAL: u64 = 1 << 5;
    /// Positive normal number.
    pub const POS_NORMAL: u64 = 1 << 6;
    /// +∞
    pub const POS_INF: u64 = 1 << 7;
    /// Signaling NaN.
    pub const SIGNALING_NAN: u64 = 1 << 8;
    /// Quiet NaN.
    pub const QUIET_NAN: u64 = 1 << 9;
}

/// Classifies a raw value into exactly one of the ten `fclass` categories.
///
/// Never raises flags.
///
/// # Examples
///
/// ```
/// use rvsem_core::core::units::fpu::compare::{class, classify};
///
/// assert_eq!(classify(0x8000_0000, true), class::NEG_ZERO);
/// assert_eq!(classify(0x7ff0_0000_0000_0000, false), class::POS_INF);
/// assert_eq!(classify(0x7f80_0001, true), class::SIGNALING_NAN);
/// ```
pub const fn classify(bits: u64, is32: bool) -> u64 {
    let fmt = FloatFormat::select(is32);
    let neg = fmt.is_negative(bits);
    if fmt.is_snan(bits) {
        class::SIGNALING_NAN
    } else if fmt.is_qnan(bits) {
        class::QUIET_NAN
    } else if fmt.is_infinite(bits) {
        if neg { class::NEG_INF } else { class::POS_INF }
    } else if fmt.is_zero(bits) {
        if neg { class::NEG_ZERO } else { class::POS_ZERO }
    } else if fmt.is_subnormal(bits) {
        if neg { class::NEG_SUBNORMAL } else { class::POS_SUBNORMAL }
    } else if neg {
        class::NEG_NORMAL
    } else {
        class::POS_NORMAL
    }
}
