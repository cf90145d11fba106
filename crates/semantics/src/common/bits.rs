//! Sign- and zero-extension helpers.
//!
//! Registers are always carried as `u64`. On RV32, and for every RV64
//! W-suffixed result, the architectural value is the low 32 bits with bit 31
//! replicated into the upper half. These helpers are the single place that
//! representation is produced.

use super::constants::IMM12_BITS;

/// Sign-extends the low 8 bits of `val` to 64 bits.
#[inline]
pub const fn sext8(val: u64) -> u64 {
    val as i8 as i64 as u64
}

/// Sign-extends the low 16 bits of `val` to 64 bits.
#[inline]
pub const fn sext16(val: u64) -> u64 {
    val as i16 as i64 as u64
}

/// Sign-extends the low 32 bits of `val` to 64 bits.
///
/// ```
/// use rvsem_core::common::sext32;
///
/// assert_eq!(sext32(0x8000_0000), 0xFFFF_FFFF_8000_0000);
/// assert_eq!(sext32(0x1_7FFF_FFFF), 0x7FFF_FFFF);
/// ```
#[inline]
pub const fn sext32(val: u64) -> u64 {
    val as i32 as i64 as u64
}

/// Sign-extends a 12-bit I-type immediate field to 64 bits.
///
/// Bits above the field are ignored.
#[inline]
pub const fn sext12(imm: u32) -> u64 {
    let shift = 32 - IMM12_BITS;
    (((imm << shift) as i32) >> shift) as i64 as u64
}
