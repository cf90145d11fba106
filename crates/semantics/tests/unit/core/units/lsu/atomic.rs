//! Atomic ALU Unit Tests.
//!
//! Direct tests for `atomic_alu`, the read-modify-write arithmetic behind the
//! A-extension AMOs. For `.w` both the value returned to `rd` and the value
//! written back are sign-extended from bit 31, and bits above the word in
//! either input are ignored.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsem_core::core::signals::{AmoWidth, AtomicOp};
use rvsem_core::core::units::lsu::AmoResult;
use rvsem_core::core::units::lsu::atomic::atomic_alu;

use crate::common::sext32;

const I64_MAX: u64 = i64::MAX as u64;
const I64_MIN: u64 = i64::MIN as u64;
const NEG1: u64 = u64::MAX;

#[test]
fn amoadd_w_observed_vector() {
    let r = atomic_alu(AtomicOp::Add, 0xFFFF_FFFF, 1, AmoWidth::Word);
    assert_eq!(r, AmoResult { loaded: NEG1, stored: 0 });
}

#[rstest]
#[case(AtomicOp::Swap, 0xDEAD, 0x1_0000_0002, 2)]
#[case(AtomicOp::Add, 0x7FFF_FFFF, 1, sext32(0x8000_0000))]
#[case(AtomicOp::Xor, 0xF0F0_F0F0, 0xFFFF_FFFF, 0x0F0F_0F0F)]
#[case(AtomicOp::And, 0xFFFF_FFFF, 0x8000_00FF, sext32(0x8000_00FF))]
#[case(AtomicOp::Or, 0x8000_0000, 1, sext32(0x8000_0001))]
#[case(AtomicOp::Min, 0x8000_0000, 1, sext32(0x8000_0000))]
#[case(AtomicOp::Max, 0x8000_0000, 1, 1)]
#[case(AtomicOp::Minu, 0x8000_0000, 1, 1)]
#[case(AtomicOp::Maxu, 0x8000_0000, 1, sext32(0x8000_0000))]
fn word_stored_values(
    #[case] op: AtomicOp,
    #[case] mem: u64,
    #[case] reg: u64,
    #[case] stored: u64,
) {
    assert_eq!(atomic_alu(op, mem, reg, AmoWidth::Word).stored, stored);
}

#[test]
fn word_loaded_value_ignores_upper_bits() {
    let r = atomic_alu(AtomicOp::Add, 0xDEAD_BEEF_0000_0005, 0, AmoWidth::Word);
    assert_eq!(r.loaded, 5);
    let r = atomic_alu(AtomicOp::Add, 0x0000_0000_8000_0000, 0, AmoWidth::Word);
    assert_eq!(r.loaded, sext32(0x8000_0000));
}

#[test]
fn word_minu_compares_unsigned_after_truncation() {
    // 0xFFFF_FFFF is the largest unsigned word even though it is -1 signed.
    let r = atomic_alu(AtomicOp::Minu, 0xFFFF_FFFF, 0x7FFF_FFFF, AmoWidth::Word);
    assert_eq!(r.stored, 0x7FFF_FFFF);
    let r = atomic_alu(AtomicOp::Maxu, 0xFFFF_FFFF, 0x7FFF_FFFF, AmoWidth::Word);
    assert_eq!(r.stored, NEG1);
}

#[rstest]
#[case(AtomicOp::Swap, 1, I64_MIN, I64_MIN)]
#[case(AtomicOp::Add, I64_MAX, 1, I64_MIN)]
#[case(AtomicOp::Min, I64_MIN, 0, I64_MIN)]
#[case(AtomicOp::Max, I64_MIN, 0, 0)]
#[case(AtomicOp::Minu, I64_MIN, 0, 0)]
#[case(AtomicOp::Maxu, I64_MIN, 0, I64_MIN)]
#[case(AtomicOp::And, NEG1, 0xF0, 0xF0)]
fn double_stored_values(
    #[case] op: AtomicOp,
    #[case] mem: u64,
    #[case] reg: u64,
    #[case] stored: u64,
) {
    let r = atomic_alu(op, mem, reg, AmoWidth::Double);
    assert_eq!(r.loaded, mem);
    assert_eq!(r.stored, stored);
}
