//! Floating-point exception (accrued) flags.
//!
//! RISC-V defines five exception flags in `fcsr.fflags` (ISA manual §11.2):
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  4  | NV   | Invalid Operation   |
//! |  3  | DZ   | Divide by Zero      |
//! |  2  | OF   | Overflow            |
//! |  1  | UF   | Underflow           |
//! |  0  | NX   | Inexact             |
//!
//! Operations return the flags they raise as an [`FpFlags`] value; the
//! caller ORs them into its own `fcsr`.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use simple_soft_float::StatusFlags;

use crate::common::constants::FFLAGS_MASK;

/// Floating-point exception flags (RISC-V `fcsr.fflags`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 4);
    /// Divide by Zero.
    pub const DZ: Self = Self(1 << 3);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 1);
    /// Inexact.
    pub const NX: Self = Self(1 << 0);

    /// Builds flags from a raw value, discarding bits above bit 4.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & FFLAGS_MASK as u8)
    }

    /// Returns the raw 5-bit flag value for writing into `fcsr`.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<StatusFlags> for FpFlags {
    fn from(status: StatusFlags) -> Self {
        let mut flags = Self::NONE;
        if status.contains(StatusFlags::INVALID_OPERATION) {
            flags |= Self::NV;
        }
        if status.contains(StatusFlags::DIVISION_BY_ZERO) {
            flags |= Self::DZ;
        }
        if status.contains(StatusFlags::OVERFLOW) {
            flags |= Self::OF;
        }
        if status.contains(StatusFlags::UNDERFLOW) {
            flags |= Self::UF;
        }
        if status.contains(StatusFlags::INEXACT) {
            flags |= Self::NX;
        }
        flags
    }
}

impl fmt::Display for FpFlags {
    /// Formats as the set flag names, e.g. `NV|NX`, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names = [
            (Self::NV, "NV"),
            (Self::DZ, "DZ"),
            (Self::OF, "OF"),
            (Self::UF, "UF"),
            (Self::NX, "NX"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
