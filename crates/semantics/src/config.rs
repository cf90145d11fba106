//! Configuration for the reference model.
//!
//! This module defines the knobs that change what an evaluation context
//! accepts and how it starts:
//! 1. **ISA:** Register width (XLEN) and the enabled M/A/F/D extensions.
//! 2. **FPU:** The initial rounding mode and accrued exception flags.
//!
//! Configuration is supplied as JSON or built with `Config::default()`, which
//! describes an RV64IMAFD hart with a cleared `fcsr`.

use serde::Deserialize;

use crate::common::constants::{FFLAGS_MASK, FRM_MASK};
use crate::common::error::{ConfigError, Extension};

/// Register width of the modelled hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Xlen {
    /// 32-bit registers. Values are carried sign-extended in `u64`.
    #[serde(alias = "RV32", alias = "rv32")]
    Rv32,
    /// 64-bit registers.
    #[default]
    #[serde(alias = "RV64", alias = "rv64")]
    Rv64,
}

impl Xlen {
    /// Returns the register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvsem_core::config::{Config, Xlen};
///
/// let json = r#"{
///     "isa": { "xlen": "Rv32", "extensions": { "d": false } },
///     "fpu": { "rounding_mode": 1 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.isa.xlen, Xlen::Rv32);
/// assert!(config.isa.extensions.f);
/// assert!(!config.isa.extensions.d);
/// assert_eq!(config.fpu.rounding_mode, 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Register width and extensions.
    #[serde(default)]
    pub isa: IsaConfig,
    /// Initial floating-point control state.
    #[serde(default)]
    pub fpu: FpuConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            xlen = config.isa.xlen.bits(),
            frm = config.fpu.rounding_mode,
            "loaded model configuration"
        );
        Ok(config)
    }
}

/// ISA shape of the modelled hart.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IsaConfig {
    /// Register width.
    #[serde(default)]
    pub xlen: Xlen,
    /// Enabled standard extensions.
    #[serde(default)]
    pub extensions: ExtensionConfig,
}

/// Enabled standard extensions. The base integer ISA is always present.
#[derive(Debug, Clone, Copy, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtensionConfig {
    /// Integer multiply/divide.
    #[serde(default = "ExtensionConfig::enabled")]
    pub m: bool,
    /// Atomic memory operations.
    #[serde(default = "ExtensionConfig::enabled")]
    pub a: bool,
    /// Single-precision floating point.
    #[serde(default = "ExtensionConfig::enabled")]
    pub f: bool,
    /// Double-precision floating point.
    #[serde(default = "ExtensionConfig::enabled")]
    pub d: bool,
}

impl ExtensionConfig {
    /// Extensions default to enabled so an empty document yields RV64IMAFD.
    const fn enabled() -> bool {
        true
    }

    /// Returns whether `ext` is enabled. D additionally requires F.
    pub const fn has(&self, ext: Extension) -> bool {
        match ext {
            Extension::M => self.m,
            Extension::A => self.a,
            Extension::F => self.f,
            Extension::D => self.f && self.d,
        }
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            m: true,
            a: true,
            f: true,
            d: true,
        }
    }
}

/// Initial floating-point control state.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FpuConfig {
    /// Initial `frm` value. Only the low 3 bits are kept.
    #[serde(default)]
    pub rounding_mode: u8,
    /// Initial `fflags` value. Only the low 5 bits are kept.
    #[serde(default)]
    pub fflags: u8,
}

impl FpuConfig {
    /// Returns the configured `frm`, masked to its field width.
    pub const fn frm_bits(&self) -> u8 {
        self.rounding_mode & FRM_MASK as u8
    }

    /// Returns the configured `fflags`, masked to its field width.
    pub const fn fflags_bits(&self) -> u8 {
        self.fflags & FFLAGS_MASK as u8
    }
}
