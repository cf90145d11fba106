//! NaN boxing, unboxing, operand classification and canonical NaN
//! propagation for the FPU.
//!
//! RISC-V stores single-precision (f32) values in 64-bit floating-point
//! registers using "NaN boxing": the upper 32 bits must be all 1s.
//!
//! - **Boxing** ([`box_f32`]): Sets upper 32 bits to 1s when writing an f32
//!   result into a 64-bit register.
//! - **Unboxing** ([`unbox_f32`]): Checks that the upper 32 bits are all 1s.
//!   If not, the value is treated as canonical NaN (RISC-V ISA manual §12.2).
//! - **Canonicalization**: Any NaN produced by an arithmetic operation is the
//!   canonical quiet NaN, discarding payload and sign (RISC-V ISA manual §11.3).
//!
//! [`FloatFormat`] describes the bit layout of one precision so the
//! NaN/sign/min-max rules are written once and applied to raw bit patterns
//! of either width. Working on bits rather than host floats keeps signaling
//! NaN payloads intact where the ISA requires it (sign injection).

use super::exception_flags::FpFlags;

/// Canonical quiet NaN for IEEE 754 single-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Canonical quiet NaN for IEEE 754 double-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Upper-32-bit mask used for NaN boxing validation.
pub const NAN_BOX_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Bit layout of an IEEE 754 binary interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatFormat {
    /// Sign bit.
    pub sign: u64,
    /// Biased exponent field.
    pub exponent: u64,
    /// Trailing significand field.
    pub mantissa: u64,
    /// Most significant mantissa bit; set for quiet NaNs.
    pub quiet: u64,
    /// The canonical quiet NaN.
    pub canonical_nan: u64,
}

impl FloatFormat {
    /// IEEE 754 binary32.
    pub const SINGLE: Self = Self {
        sign: 0x8000_0000,
        exponent: 0x7F80_0000,
        mantissa: 0x007F_FFFF,
        quiet: 0x0040_0000,
        canonical_nan: CANONICAL_NAN_F32 as u64,
    };

    /// IEEE 754 binary64.
    pub const DOUBLE: Self = Self {
        sign: 0x8000_0000_0000_0000,
        exponent: 0x7FF0_0000_0000_0000,
        mantissa: 0x000F_FFFF_FFFF_FFFF,
        quiet: 0x0008_0000_0000_0000,
        canonical_nan: CANONICAL_NAN_F64,
    };

    /// Selects the format for single (`is32`) or double precision.
    pub const fn select(is32: bool) -> Self {
        if is32 { Self::SINGLE } else { Self::DOUBLE }
    }

    /// Returns true for any NaN.
    #[inline]
    pub const fn is_nan(&self, bits: u64) -> bool {
        bits & self.exponent == self.exponent && bits & self.mantissa != 0
    }

    /// Returns true for a signaling NaN (quiet bit clear, non-zero payload).
    #[inline]
    pub const fn is_snan(&self, bits: u64) -> bool {
        self.is_nan(bits) && bits & self.quiet == 0
    }

    /// Returns true for a quiet NaN.
    #[inline]
    pub const fn is_qnan(&self, bits: u64) -> bool {
        self.is_nan(bits) && bits & self.quiet != 0
    }

    /// Returns true for ±∞.
    #[inline]
    pub const fn is_infinite(&self, bits: u64) -> bool {
        bits & self.exponent == self.exponent && bits & self.mantissa == 0
    }

    /// Returns true for ±0.
    #[inline]
    pub const fn is_zero(&self, bits: u64) -> bool {
        bits & (self.exponent | self.mantissa) == 0
    }

    /// Returns true for a subnormal (non-zero, zero exponent).
    #[inline]
    pub const fn is_subnormal(&self, bits: u64) -> bool {
        bits & self.exponent == 0 && bits & self.mantissa != 0
    }

    /// Returns true if the sign bit is set (including −0 and negative NaNs).
    #[inline]
    pub const fn is_negative(&self, bits: u64) -> bool {
        bits & self.sign != 0
    }

    /// Flips the sign bit.
    #[inline]
    pub const fn negate(&self, bits: u64) -> u64 {
        bits ^ self.sign
    }

    /// Replaces any NaN with the canonical quiet NaN.
    #[inline]
    pub const fn canonicalize(&self, bits: u64) -> u64 {
        if self.is_nan(bits) { self.canonical_nan } else { bits }
    }

    /// Applies the NaN-operand rule shared by every arithmetic operation.
    ///
    /// If any operand is NaN the result is the canonical quiet NaN, and NV is
    /// raised when at least one of them is signaling. Returns `None` when no
    /// operand is NaN and the operation must actually be computed.
    pub fn propagate_nan(&self, operands: &[u64]) -> Option<(u64, FpFlags)> {
        if !operands.iter().any(|&v| self.is_nan(v)) {
            return None;
        }
        let flags = if operands.iter().any(|&v| self.is_snan(v)) {
            FpFlags::NV
        } else {
            FpFlags::NONE
        };
        Some((self.canonical_nan, flags))
    }

    /// Compares two non-NaN values by numeric order, with −0 below +0.
    ///
    /// Returns true if `a` orders strictly before `b`.
    fn total_less(&self, a: u64, b: u64) -> bool {
        let (neg_a, neg_b) = (self.is_negative(a), self.is_negative(b));
        let (mag_a, mag_b) = (a & !self.sign, b & !self.sign);
        match (neg_a, neg_b) {
            (true, false) => true,
            (false, true) => false,
            (false, false) => mag_a < mag_b,
            (true, true) => mag_a > mag_b,
        }
    }

    /// RISC-V `fmin` (IEEE 754-2019 `minimumNumber`).
    ///
    /// If exactly one operand is NaN the other is returned unchanged; NV is
    /// still raised when the NaN was signaling. If both are NaN the canonical
    /// NaN is returned. −0 is considered less than +0.
    pub fn min(&self, a: u64, b: u64) -> (u64, FpFlags) {
        self.min_max(a, b, true)
    }

    /// RISC-V `fmax` (IEEE 754-2019 `maximumNumber`).
    ///
    /// Same NaN rules as [`FloatFormat::min`]; +0 is greater than −0.
    pub fn max(&self, a: u64, b: u64) -> (u64, FpFlags) {
        self.min_max(a, b, false)
    }

    fn min_max(&self, a: u64, b: u64, is_min: bool) -> (u64, FpFlags) {
        let flags = if self.is_snan(a) || self.is_snan(b) {
            FpFlags::NV
        } else {
            FpFlags::NONE
        };
        let result = match (self.is_nan(a), self.is_nan(b)) {
            (true, true) => self.canonical_nan,
            (true, false) => b,
            (false, true) => a,
            (false, false) => {
                if self.total_less(a, b) == is_min {
                    a
                } else {
                    b
                }
            }
        };
        (result, flags)
    }

    /// Sign injection: `a` with the sign of `b`. Never raises flags and never
    /// canonicalizes, so a signaling NaN in `a` stays signaling.
    #[inline]
    pub const fn sign_inject(&self, a: u64, b: u64) -> u64 {
        (a & !self.sign) | (b & self.sign)
    }

    /// Sign injection: `a` with the opposite of the sign of `b`.
    #[inline]
    pub const fn sign_inject_neg(&self, a: u64, b: u64) -> u64 {
        (a & !self.sign) | (!b & self.sign)
    }

    /// Sign injection: `a` with its sign XORed with the sign of `b`.
    #[inline]
    pub const fn sign_inject_xor(&self, a: u64, b: u64) -> u64 {
        a ^ (b & self.sign)
    }
}

/// Boxes an f32 bit pattern into a 64-bit NaN-boxed register value.
///
/// Sets the upper 32 bits to all 1s, per RISC-V ISA manual §12.2.
#[inline]
pub const fn box_f32(bits: u32) -> u64 {
    (bits as u64) | NAN_BOX_MASK
}

/// Unboxes a 64-bit register value to obtain the f32 bit pattern.
///
/// Validates that the upper 32 bits are all 1s. If valid, returns the lower
/// 32 bits. If invalid (not properly NaN-boxed), returns the canonical NaN
/// per RISC-V ISA manual §12.2.
#[inline]
pub const fn unbox_f32(val: u64) -> u32 {
    if (val & NAN_BOX_MASK) == NAN_BOX_MASK {
        val as u32
    } else {
        CANONICAL_NAN_F32
    }
}

/// Reads a floating-point operand of the given precision from a register
/// value, unboxing single-precision operands.
#[inline]
pub const fn read_operand(val: u64, is32: bool) -> u64 {
    if is32 { unbox_f32(val) as u64 } else { val }
}

/// Writes a floating-point result of the given precision to a register
/// value, boxing single-precision results.
#[inline]
pub const fn write_result(bits: u64, is32: bool) -> u64 {
    if is32 { box_f32(bits as u32) } else { bits }
}
