//! Register-width boundaries and field masks.
//!
//! Every mask here corresponds to a field width fixed by the RISC-V
//! unprivileged ISA manual.

/// Shift-amount mask for 64-bit shifts (6 bits: 0-63).
pub const SHAMT_MASK_64: u64 = 0x3f;

/// Shift-amount mask for 32-bit and W shifts (5 bits: 0-31).
pub const SHAMT_MASK_32: u32 = 0x1f;

/// Width of an I-type immediate in bits.
pub const IMM12_BITS: u32 = 12;

/// Shift applied to a U-type immediate (`lui`, `auipc`).
pub const UIMM_SHIFT: u32 = 12;

/// Mask for the 20-bit U-type immediate field.
pub const UIMM_MASK: u32 = 0x000F_FFFF;

/// Number of bits in a 32-bit word.
pub const WORD_BITS: u32 = 32;

/// Number of bits in XLEN for RV64.
pub const XLEN_BITS: u32 = 64;

/// Mask selecting the five `fflags` bits.
pub const FFLAGS_MASK: u64 = 0x1f;

/// Mask selecting the three `frm` bits.
pub const FRM_MASK: u64 = 0x7;

/// Bit position of `frm` inside `fcsr`.
pub const FRM_SHIFT: u32 = 5;

/// Mask of all defined `fcsr` bits (`frm` and `fflags`).
pub const FCSR_MASK: u64 = 0xff;
