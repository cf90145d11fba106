//! Load extension and store truncation.
//!
//! Signed loads (`lb`, `lh`, `lw`) sign-extend to 64 bits, unsigned loads
//! (`lbu`, `lhu`, `lwu`) zero-extend, and `ld` passes through. Stores keep
//! only the low `width` bytes of the source register.
//!
//! Single-precision floating-point loads NaN-box the loaded word; stores
//! write the low word of the register as-is, without checking the box.

use crate::common::bits::{sext8, sext16, sext32};
use crate::core::signals::MemWidth;
use crate::core::units::fpu::nan_handling::NAN_BOX_MASK;

/// Extends a raw loaded value (low `width` bytes significant) to 64 bits.
pub const fn load(raw: u64, width: MemWidth, signed: bool) -> u64 {
    match (width, signed) {
        (MemWidth::Byte, true) => sext8(raw),
        (MemWidth::Byte, false) => raw & 0xFF,
        (MemWidth::Half, true) => sext16(raw),
        (MemWidth::Half, false) => raw & 0xFFFF,
        (MemWidth::Word, true) => sext32(raw),
        (MemWidth::Word, false) => raw & 0xFFFF_FFFF,
        (MemWidth::Double, _) => raw,
    }
}

/// Truncates `val` to the low `width` bytes.
pub const fn store(val: u64, width: MemWidth) -> u64 {
    match width {
        MemWidth::Double => val,
        _ => val & ((1 << (width.bytes() * 8)) - 1),
    }
}

/// `flw` / `fld`: places a loaded value in a floating-point register.
pub const fn fp_load(raw: u64, is32: bool) -> u64 {
    if is32 {
        (raw & 0xFFFF_FFFF) | NAN_BOX_MASK
    } else {
        raw
    }
}

/// `fsw` / `fsd`: the bytes written for a floating-point register.
pub const fn fp_store(reg: u64, is32: bool) -> u64 {
    if is32 { reg & 0xFFFF_FFFF } else { reg }
}
