//! Conversions between floating-point formats and integers.
//!
//! Float-to-integer conversions round in the requested mode and saturate when
//! the rounded value does not fit: NaN and values above the range produce the
//! largest representable integer, values below it produce the smallest (zero
//! for the unsigned forms). A saturated conversion raises NV and nothing else;
//! an in-range but inexact conversion raises NX.
//!
//! 32-bit integer results are sign-extended to 64 bits, including `fcvt.wu`,
//! so `fcvt.wu.s` of `4e9` reads back as `0xFFFF_FFFF_EE6B_2800`.

use simple_soft_float::{F32, F64, FPState, RoundingMode as SoftRoundingMode};

use crate::common::bits::sext32;

use super::exception_flags::FpFlags;
use super::nan_handling::FloatFormat;
use super::rounding_modes::RoundingMode;

/// Integer side of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntFormat {
    /// Signed 32-bit (`.w`).
    Word,
    /// Unsigned 32-bit (`.wu`).
    WordUnsigned,
    /// Signed 64-bit (`.l`).
    Long,
    /// Unsigned 64-bit (`.lu`).
    LongUnsigned,
}

/// Saturated result for a conversion the target cannot represent.
const fn saturate(int: IntFormat, nan: bool, negative: bool) -> u64 {
    let low = negative && !nan;
    match int {
        IntFormat::Word => {
            if low {
                i32::MIN as i64 as u64
            } else {
                i32::MAX as u64
            }
        }
        IntFormat::WordUnsigned => {
            if low {
                0
            } else {
                u64::MAX
            }
        }
        IntFormat::Long => {
            if low {
                i64::MIN as u64
            } else {
                i64::MAX as u64
            }
        }
        IntFormat::LongUnsigned => {
            if low {
                0
            } else {
                u64::MAX
            }
        }
    }
}

/// Converts a raw floating-point value to an integer register value.
///
/// # Examples
///
/// ```
/// use rvsem_core::core::units::fpu::convert::{IntFormat, to_int};
/// use rvsem_core::core::units::fpu::exception_flags::FpFlags;
/// use rvsem_core::core::units::fpu::rounding_modes::RoundingMode;
///
/// // -1.5 rounds to -2 under RNE and is inexact.
/// let (v, flags) = to_int(0xBFC0_0000, true, IntFormat::Word, RoundingMode::Rne);
/// assert_eq!(v as i64, -2);
/// assert_eq!(flags, FpFlags::NX);
///
/// // -1.0 does not fit in an unsigned word.
/// let (v, flags) = to_int(0xBF80_0000, true, IntFormat::WordUnsigned, RoundingMode::Rtz);
/// assert_eq!(v, 0);
/// assert_eq!(flags, FpFlags::NV);
/// ```
pub fn to_int(val: u64, is32: bool, int: IntFormat, rm: RoundingMode) -> (u64, FpFlags) {
    let fmt = FloatFormat::select(is32);
    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());

    let converted = if is32 {
        let x = F32::from_bits(val as u32);
        match int {
            IntFormat::Word => x.to_i32(true, rm, Some(&mut state)).map(|v| v as i64 as u64),
            IntFormat::WordUnsigned => x.to_u32(true, rm, Some(&mut state)).map(|v| sext32(u64::from(v))),
            IntFormat::Long => x.to_i64(true, rm, Some(&mut state)).map(|v| v as u64),
            IntFormat::LongUnsigned => x.to_u64(true, rm, Some(&mut state)),
        }
    } else {
        let x = F64::from_bits(val);
        match int {
            IntFormat::Word => x.to_i32(true, rm, Some(&mut state)).map(|v| v as i64 as u64),
            IntFormat::WordUnsigned => x.to_u32(true, rm, Some(&mut state)).map(|v| sext32(u64::from(v))),
            IntFormat::Long => x.to_i64(true, rm, Some(&mut state)).map(|v| v as u64),
            IntFormat::LongUnsigned => x.to_u64(true, rm, Some(&mut state)),
        }
    };

    match converted {
        Some(v) => (v, FpFlags::from(state.status_flags)),
        None => {
            let raw = saturate(int, fmt.is_nan(val), fmt.is_negative(val));
            let raw = match int {
                IntFormat::Word | IntFormat::WordUnsigned => sext32(raw),
                IntFormat::Long | IntFormat::LongUnsigned => raw,
            };
            (raw, FpFlags::NV)
        }
    }
}

/// Converts an integer register value to a raw floating-point value.
///
/// Only the low 32 bits of `val` are read for the word forms. Every 32-bit
/// integer is exact in double precision; other conversions may raise NX.
pub fn from_int(val: u64, int: IntFormat, is32: bool, rm: RoundingMode) -> (u64, FpFlags) {
    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());

    let bits = if is32 {
        let r = match int {
            IntFormat::Word => F32::from_i32(val as i32, rm, Some(&mut state)),
            IntFormat::WordUnsigned => F32::from_u32(val as u32, rm, Some(&mut state)),
            IntFormat::Long => F32::from_i64(val as i64, rm, Some(&mut state)),
            IntFormat::LongUnsigned => F32::from_u64(val, rm, Some(&mut state)),
        };
        u64::from(r.into_bits())
    } else {
        let r = match int {
            IntFormat::Word => F64::from_i32(val as i32, rm, Some(&mut state)),
            IntFormat::WordUnsigned => F64::from_u32(val as u32, rm, Some(&mut state)),
            IntFormat::Long => F64::from_i64(val as i64, rm, Some(&mut state)),
            IntFormat::LongUnsigned => F64::from_u64(val, rm, Some(&mut state)),
        };
        r.into_bits()
    };
    (bits, FpFlags::from(state.status_flags))
}

/// `fcvt.s.d`: narrows a raw double to a raw single, rounding in `rm`.
///
/// A NaN input produces the canonical single NaN (NV if it was signaling).
pub fn double_to_single(val: u64, rm: RoundingMode) -> (u64, FpFlags) {
    if let Some((_, flags)) = FloatFormat::DOUBLE.propagate_nan(&[val]) {
        return (FloatFormat::SINGLE.canonical_nan, flags);
    }
    let mut state = FPState::default();
    let rm: Option<SoftRoundingMode> = Some(rm.into());
    let narrowed: F32 = F64::from_bits(val).convert_to_float(rm, Some(&mut state));
    (u64::from(narrowed.into_bits()), FpFlags::from(state.status_flags))
}

/// `fcvt.d.s`: widens a raw single to a raw double.
///
/// Always exact, subnormals included. A NaN input produces the canonical
/// double NaN (NV if it was signaling).
pub fn single_to_double(val: u64) -> (u64, FpFlags) {
    if let Some((_, flags)) = FloatFormat::SINGLE.propagate_nan(&[val]) {
        return (FloatFormat::DOUBLE.canonical_nan, flags);
    }
    (f64::from(f32::from_bits(val as u32)).to_bits(), FpFlags::NONE)
}
