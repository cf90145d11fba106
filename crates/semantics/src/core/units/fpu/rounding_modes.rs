//! Floating-point rounding mode support.
//!
//! RISC-V defines five rounding modes (ISA manual §11.2):
//!
//! | Value | Mode | Description                             |
//! |-------|------|-----------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even          |
//! | 0b001 | RTZ  | Round towards Zero                      |
//! | 0b010 | RDN  | Round Down (towards −∞)                 |
//! | 0b011 | RUP  | Round Up (towards +∞)                   |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! Encodings 0b101 and 0b110 are reserved. In an instruction's `rm` field,
//! 0b111 ([`DYNAMIC`]) selects the mode held in `fcsr.frm`; as an `frm` value
//! it is reserved too.

use simple_soft_float::RoundingMode as SoftRoundingMode;

/// The `rm` field value that defers to `fcsr.frm`.
pub const DYNAMIC: u8 = 0b111;

/// RISC-V rounding mode encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    #[default]
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field from an instruction or `fcsr.frm`.
    ///
    /// Returns `None` for reserved encodings (0b101, 0b110) and the dynamic
    /// sentinel (0b111), which must be resolved to `fcsr.frm` by the caller.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            _ => None,
        }
    }

    /// Returns the 3-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl From<RoundingMode> for SoftRoundingMode {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::Rne => Self::TiesToEven,
            RoundingMode::Rtz => Self::TowardZero,
            RoundingMode::Rdn => Self::TowardNegative,
            RoundingMode::Rup => Self::TowardPositive,
            RoundingMode::Rmm => Self::TiesToAway,
        }
    }
}
