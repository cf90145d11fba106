//! Architectural state.
//!
//! The integer units are stateless; the only state this model owns is the
//! floating-point control and status register of each hart.

/// Floating-point control and status register (`fflags`, `frm`, `fcsr`).
pub mod fcsr;
