//! Error definitions.
//!
//! Arithmetic edge cases are never errors: division by zero, invalid float
//! operations and out-of-range conversions all have defined results plus
//! `fflags` side effects. The errors below only arise when a caller asks for
//! something the configured hart cannot execute, which on hardware is an
//! illegal-instruction trap rather than a data-dependent condition.

use std::fmt;

use thiserror::Error;

/// A RISC-V standard extension the model can enable or disable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Integer multiply/divide.
    M,
    /// Atomic memory operations.
    A,
    /// Single-precision floating point.
    F,
    /// Double-precision floating point.
    D,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::M => "M",
            Self::A => "A",
            Self::F => "F",
            Self::D => "D",
        };
        f.write_str(name)
    }
}

/// An operation the evaluation context cannot legally perform.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// A static rounding mode of 5 or 6, or a dynamic rounding mode that
    /// resolved to a reserved `frm` value.
    #[error("reserved rounding mode {0:#05b}")]
    ReservedRoundingMode(u8),

    /// The operation belongs to an extension the hart was configured without.
    #[error("{0} extension is not enabled")]
    ExtensionDisabled(Extension),

    /// The operation only exists on RV64.
    #[error("{0} is not available on RV32")]
    UnsupportedOnRv32(&'static str),

    /// A W-suffixed form was requested for an operation that has none.
    #[error("{0} has no W-suffixed form")]
    NoWordForm(&'static str),

    /// The CSR address is not one of `fflags`, `frm` or `fcsr`.
    #[error("CSR {0:#05x} is not a floating-point CSR")]
    UnknownCsr(u32),
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
