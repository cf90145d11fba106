//! Floating-point control and status register.
//!
//! `fcsr` packs two fields:
//! 1. **`fflags` (bits 4:0):** Accrued exception flags, OR-accumulated by every
//!    arithmetic operation until software overwrites them.
//! 2. **`frm` (bits 7:5):** The dynamic rounding mode used by instructions whose
//!    `rm` field is 0b111.
//!
//! Each [`Fcsr`] belongs to one hart. Writes never fail: values are masked to
//! their field width, so an out-of-range `frm` is stored as its low three bits
//! and only rejected later, when an instruction tries to round with it.

use crate::common::constants::{FCSR_MASK, FFLAGS_MASK, FRM_MASK, FRM_SHIFT};
use crate::common::error::ExecError;
use crate::config::FpuConfig;
use crate::core::units::fpu::exception_flags::FpFlags;
use crate::core::units::fpu::rounding_modes::{DYNAMIC, RoundingMode};

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u32 = 0x001;

/// Floating-point dynamic rounding mode CSR address.
pub const FRM: u32 = 0x002;

/// Floating-point control and status register CSR address.
pub const FCSR: u32 = 0x003;

/// Per-hart floating-point control and status state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fcsr {
    fflags: u8,
    frm: u8,
}

impl Fcsr {
    /// Creates a cleared register: no flags, round-to-nearest-even.
    pub const fn new() -> Self {
        Self { fflags: 0, frm: 0 }
    }

    /// Creates a register holding the configured initial state.
    pub const fn from_config(config: &FpuConfig) -> Self {
        Self {
            fflags: config.fflags_bits(),
            frm: config.frm_bits(),
        }
    }

    /// Returns the accrued exception flags.
    pub const fn fflags(&self) -> FpFlags {
        FpFlags::from_bits(self.fflags)
    }

    /// Returns the raw 3-bit `frm` field.
    pub const fn frm(&self) -> u8 {
        self.frm
    }

    /// ORs newly raised flags into `fflags`.
    pub const fn accrue(&mut self, flags: FpFlags) {
        self.fflags |= flags.bits();
    }

    /// Resolves an instruction's `rm` field to the mode it rounds with.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::ReservedRoundingMode`] for a static `rm` of 5 or
    /// 6, or for a dynamic `rm` while `frm` holds 5, 6 or 7.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvsem_core::Fcsr;
    /// use rvsem_core::core::units::fpu::rounding_modes::{DYNAMIC, RoundingMode};
    ///
    /// let mut fcsr = Fcsr::new();
    /// let _ = fcsr.fsrm(3);
    /// assert_eq!(fcsr.resolve_rounding_mode(DYNAMIC), Ok(RoundingMode::Rup));
    /// assert_eq!(fcsr.resolve_rounding_mode(1), Ok(RoundingMode::Rtz));
    /// assert!(fcsr.resolve_rounding_mode(5).is_err());
    /// ```
    pub const fn resolve_rounding_mode(&self, rm_field: u8) -> Result<RoundingMode, ExecError> {
        let rm_field = rm_field & FRM_MASK as u8;
        let bits = if rm_field == DYNAMIC { self.frm } else { rm_field };
        match RoundingMode::from_bits(bits) {
            Some(rm) => Ok(rm),
            None => Err(ExecError::ReservedRoundingMode(bits)),
        }
    }

    /// `frcsr`: reads the whole register.
    pub const fn frcsr(&self) -> u64 {
        ((self.frm as u64) << FRM_SHIFT) | self.fflags as u64
    }

    /// `fscsr`: replaces the whole register, returning the previous value.
    pub fn fscsr(&mut self, val: u64) -> u64 {
        let old = self.frcsr();
        let val = val & FCSR_MASK;
        self.fflags = (val & FFLAGS_MASK) as u8;
        self.frm = ((val >> FRM_SHIFT) & FRM_MASK) as u8;
        tracing::debug!(old, new = self.frcsr(), "fcsr write");
        old
    }

    /// `frrm`: reads the dynamic rounding mode.
    pub const fn frrm(&self) -> u64 {
        self.frm as u64
    }

    /// `fsrm`: replaces `frm`, returning the previous value.
    ///
    /// Only the low three bits are kept. Reserved encodings are stored as-is.
    pub fn fsrm(&mut self, val: u64) -> u64 {
        let old = self.frrm();
        self.frm = (val & FRM_MASK) as u8;
        tracing::debug!(old, new = self.frm, "frm write");
        old
    }

    /// `frflags`: reads the accrued exception flags.
    pub const fn frflags(&self) -> u64 {
        self.fflags as u64
    }

    /// `fsflags`: replaces `fflags` (no OR), returning the previous value.
    pub fn fsflags(&mut self, val: u64) -> u64 {
        let old = self.frflags();
        self.fflags = (val & FFLAGS_MASK) as u8;
        tracing::debug!(old, new = self.fflags, "fflags write");
        old
    }

    /// `fsrmi`: [`Fcsr::fsrm`] with a 5-bit immediate.
    pub fn fsrmi(&mut self, uimm: u32) -> u64 {
        self.fsrm(u64::from(uimm & 0x1f))
    }

    /// `fsflagsi`: [`Fcsr::fsflags`] with a 5-bit immediate.
    pub fn fsflagsi(&mut self, uimm: u32) -> u64 {
        self.fsflags(u64::from(uimm & 0x1f))
    }

    /// Reads a floating-point CSR by address.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::UnknownCsr`] for any address other than
    /// [`FFLAGS`], [`FRM`] or [`FCSR`].
    pub const fn read_csr(&self, addr: u32) -> Result<u64, ExecError> {
        match addr {
            FFLAGS => Ok(self.frflags()),
            FRM => Ok(self.frrm()),
            FCSR => Ok(self.frcsr()),
            _ => Err(ExecError::UnknownCsr(addr)),
        }
    }

    /// Writes a floating-point CSR by address, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::UnknownCsr`] for any address other than
    /// [`FFLAGS`], [`FRM`] or [`FCSR`].
    pub fn write_csr(&mut self, addr: u32, val: u64) -> Result<u64, ExecError> {
        match addr {
            FFLAGS => Ok(self.fsflags(val)),
            FRM => Ok(self.fsrm(val)),
            FCSR => Ok(self.fscsr(val)),
            _ => Err(ExecError::UnknownCsr(addr)),
        }
    }
}
