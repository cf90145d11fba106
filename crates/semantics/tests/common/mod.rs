//! Shared test infrastructure.
//!
//! Floating-point registers are 64-bit bit patterns; these helpers convert
//! host floats to and from that encoding so test vectors stay readable.

use rvsem_core::core::signals::FpOp;
use rvsem_core::core::units::fpu::Fpu;
use rvsem_core::core::units::fpu::exception_flags::FpFlags;
use rvsem_core::core::units::fpu::rounding_modes::RoundingMode;

/// Canonical single-precision NaN as it appears in a register (boxed).
pub const CANONICAL_NAN_S: u64 = 0xFFFF_FFFF_7FC0_0000;

/// Canonical double-precision NaN.
pub const CANONICAL_NAN_D: u64 = 0x7FF8_0000_0000_0000;

/// A single-precision signaling NaN (boxed).
pub const SNAN_S: u64 = 0xFFFF_FFFF_7F80_0001;

/// A single-precision quiet NaN with a payload (boxed).
pub const QNAN_S: u64 = 0xFFFF_FFFF_7FC0_1234;

/// A double-precision signaling NaN.
pub const SNAN_D: u64 = 0x7FF0_0000_0000_0001;

/// Sign-extends a 32-bit value to 64 bits (what every W result must be).
pub fn sext32(val: u32) -> u64 {
    val as i32 as i64 as u64
}

/// Encodes an `f32` as a NaN-boxed register value.
pub fn s(v: f32) -> u64 {
    Fpu::box_f32(v.to_bits())
}

/// Encodes an `f64` as a register value.
pub fn d(v: f64) -> u64 {
    v.to_bits()
}

/// Decodes the low word of a register as an `f32`.
pub fn as_f32(reg: u64) -> f32 {
    f32::from_bits(reg as u32)
}

/// Runs a single-precision operation in round-to-nearest-even.
pub fn fpu_s(op: FpOp, a: u64, b: u64, c: u64) -> (u64, FpFlags) {
    Fpu::execute_full(op, a, b, c, true, RoundingMode::Rne)
}

/// Runs a double-precision operation in round-to-nearest-even.
pub fn fpu_d(op: FpOp, a: u64, b: u64, c: u64) -> (u64, FpFlags) {
    Fpu::execute_full(op, a, b, c, false, RoundingMode::Rne)
}

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
