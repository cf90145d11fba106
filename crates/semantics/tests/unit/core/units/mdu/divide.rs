//! Division and Remainder Tests (M extension).
//!
//! RISC-V division never traps: division by zero and signed overflow have
//! defined results, checked here for every width.

use rstest::rstest;
use rvsem_core::core::signals::MulDivOp;
use rvsem_core::core::units::mdu::Mdu;

use crate::common::sext32;

const NEG1: u64 = -1i64 as u64;
const I64_MIN: u64 = i64::MIN as u64;
const I32_MIN: u64 = i32::MIN as i64 as u64;

#[rstest]
#[case(MulDivOp::Div, 7, 0, u64::MAX)]
#[case(MulDivOp::Divu, 7, 0, u64::MAX)]
#[case(MulDivOp::Rem, 7, 0, 7)]
#[case(MulDivOp::Remu, 7, 0, 7)]
#[case(MulDivOp::Rem, NEG1, 0, NEG1)]
fn rv64_divide_by_zero(#[case] op: MulDivOp, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    assert_eq!(Mdu::execute(op, a, b, false), expected);
}

#[test]
fn rv64_signed_overflow() {
    assert_eq!(Mdu::execute(MulDivOp::Div, I64_MIN, NEG1, false), I64_MIN);
    assert_eq!(Mdu::execute(MulDivOp::Rem, I64_MIN, NEG1, false), 0);
}

#[test]
fn signed_division_truncates_toward_zero() {
    assert_eq!(Mdu::execute(MulDivOp::Div, -7i64 as u64, 2, false), -3i64 as u64);
    assert_eq!(Mdu::execute(MulDivOp::Rem, -7i64 as u64, 2, false), NEG1);
    assert_eq!(Mdu::execute(MulDivOp::Rem, 7, -2i64 as u64, false), 1);
}

#[test]
fn unsigned_division_treats_operands_as_unsigned() {
    assert_eq!(Mdu::execute(MulDivOp::Divu, NEG1, 2, false), i64::MAX as u64);
    assert_eq!(Mdu::execute(MulDivOp::Remu, NEG1, 10, false), 5);
}

#[rstest]
#[case(MulDivOp::Div, 0x8000_0000, NEG1, I32_MIN)]
#[case(MulDivOp::Rem, 0x8000_0000, NEG1, 0)]
#[case(MulDivOp::Div, 5, 0, NEG1)]
#[case(MulDivOp::Divu, 0x1_0000_0005, 0x1_0000_0000, NEG1)]
#[case(MulDivOp::Rem, 0xFFFF_FFFF_8000_0001, 0, sext32(0x8000_0001))]
#[case(MulDivOp::Remu, 0x8000_0000, 0, sext32(0x8000_0000))]
#[case(MulDivOp::Divu, 0xFFFF_FFFF, 1, NEG1)]
#[case(MulDivOp::Remu, 0xFFFF_FFFF, 0x10, 0xF)]
fn word_division_edge_cases(
    #[case] op: MulDivOp,
    #[case] a: u64,
    #[case] b: u64,
    #[case] expected: u64,
) {
    assert_eq!(Mdu::execute(op, a, b, true), expected);
}
