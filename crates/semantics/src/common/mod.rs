//! Common utilities and types used throughout the reference model.
//!
//! This module provides the building blocks shared by every execution unit:
//! 1. **Bit Helpers:** Sign/zero extension between register widths.
//! 2. **Constants:** Register-width boundaries and field masks.
//! 3. **Error Handling:** Contract-violation and configuration error types.

/// Sign- and zero-extension helpers for register values.
pub mod bits;

/// Register-width boundaries and field masks.
pub mod constants;

/// Error types.
pub mod error;

pub use bits::{sext8, sext12, sext16, sext32};
pub use error::{ConfigError, ExecError, Extension};
