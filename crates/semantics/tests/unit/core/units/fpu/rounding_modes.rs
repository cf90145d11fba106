//! Rounding Mode Tests.
//!
//! Encoding of the five modes and resolution of an instruction's `rm` field
//! against `frm`, including the reserved encodings.

use rvsem_core::{ExecError, Fcsr};
use rvsem_core::core::signals::FpOp;
use rvsem_core::core::units::fpu::Fpu;
use rvsem_core::core::units::fpu::rounding_modes::{DYNAMIC, RoundingMode};

use crate::common::s;

#[test]
fn encodings_round_trip() {
    for bits in 0..=4u8 {
        let rm = RoundingMode::from_bits(bits).unwrap();
        assert_eq!(rm.bits(), bits);
    }
    assert_eq!(RoundingMode::from_bits(5), None);
    assert_eq!(RoundingMode::from_bits(6), None);
    assert_eq!(RoundingMode::from_bits(DYNAMIC), None);
    assert_eq!(RoundingMode::default(), RoundingMode::Rne);
}

#[test]
fn static_mode_overrides_frm() {
    let mut fcsr = Fcsr::new();
    let _ = fcsr.fsrm(3);
    assert_eq!(fcsr.resolve_rounding_mode(1), Ok(RoundingMode::Rtz));
    assert_eq!(fcsr.resolve_rounding_mode(DYNAMIC), Ok(RoundingMode::Rup));
}

#[test]
fn reserved_static_modes_are_rejected() {
    let fcsr = Fcsr::new();
    assert_eq!(fcsr.resolve_rounding_mode(5), Err(ExecError::ReservedRoundingMode(5)));
    assert_eq!(fcsr.resolve_rounding_mode(6), Err(ExecError::ReservedRoundingMode(6)));
}

#[test]
fn dynamic_mode_with_reserved_frm_is_rejected() {
    let mut fcsr = Fcsr::new();
    for frm in [5u64, 6, 7] {
        let _ = fcsr.fsrm(frm);
        assert_eq!(
            fcsr.resolve_rounding_mode(DYNAMIC),
            Err(ExecError::ReservedRoundingMode(frm as u8))
        );
    }
}

#[test]
fn rejected_operation_leaves_fcsr_untouched() {
    let mut fcsr = Fcsr::new();
    let before = fcsr;
    let err = Fpu::execute(FpOp::FDiv, s(1.0), s(0.0), 0, true, 5, &mut fcsr);
    assert_eq!(err, Err(ExecError::ReservedRoundingMode(5)));
    assert_eq!(fcsr, before);
}

#[test]
fn operations_without_rm_ignore_reserved_values() {
    let mut fcsr = Fcsr::new();
    let _ = fcsr.fsrm(7);
    let r = Fpu::execute(FpOp::FMin, s(1.0), s(2.0), 0, true, DYNAMIC, &mut fcsr);
    assert_eq!(r, Ok(s(1.0)));
    let r = Fpu::execute(FpOp::FSgnJN, s(1.0), s(2.0), 0, true, 5, &mut fcsr);
    assert_eq!(r, Ok(s(-1.0)));
}

#[test]
fn dynamic_mode_follows_frm() {
    let mut fcsr = Fcsr::new();
    let one = s(1.0);
    let tie = Fpu::box_f32(0x3380_0000);

    let _ = fcsr.fsrm(u64::from(RoundingMode::Rup.bits()));
    let up = Fpu::execute(FpOp::FAdd, one, tie, 0, true, DYNAMIC, &mut fcsr).unwrap();
    let _ = fcsr.fsrm(u64::from(RoundingMode::Rne.bits()));
    let even = Fpu::execute(FpOp::FAdd, one, tie, 0, true, DYNAMIC, &mut fcsr).unwrap();

    assert_eq!(up as u32, 0x3F80_0001);
    assert_eq!(even as u32, 0x3F80_0000);
}
