//! Evaluation Context Tests.
//!
//! Legality checks against XLEN and the extension set, W-form routing, and
//! isolation of floating-point state between harts.

use pretty_assertions::assert_eq;
use rvsem_core::common::Extension;
use rvsem_core::config::{Config, Xlen};
use rvsem_core::core::signals::{AluOp, AmoWidth, AtomicOp, FpOp, MemWidth, MulDivOp};
use rvsem_core::core::units::fpu::rounding_modes::DYNAMIC;
use rvsem_core::core::units::lsu::AmoResult;
use rvsem_core::{ExecError, Hart};

use crate::common::{d, init_tracing, s, sext32};

fn rv32() -> Hart {
    let config = Config::from_json(r#"{ "isa": { "xlen": "Rv32" } }"#).unwrap();
    Hart::new(&config)
}

fn without(ext: &str) -> Hart {
    let json = format!(r#"{{ "isa": {{ "extensions": {{ "{ext}": false }} }} }}"#);
    Hart::new(&Config::from_json(&json).unwrap())
}

// ─── Integer routing ─────────────────────────────────────────────────────────

#[test]
fn rv64_base_and_word_forms() {
    let hart = Hart::default();
    assert_eq!(hart.xlen(), Xlen::Rv64);
    assert_eq!(hart.alu(AluOp::Add, 0x7FFF_FFFF, 1, false), Ok(0x8000_0000));
    assert_eq!(hart.alu(AluOp::Add, 0x7FFF_FFFF, 1, true), Ok(sext32(0x8000_0000)));
    assert_eq!(hart.alu_imm(AluOp::Sll, 255, 63, false), Ok(i64::MIN as u64));
}

#[test]
fn word_form_of_operation_without_one_is_rejected() {
    init_tracing();
    let hart = Hart::default();
    assert_eq!(hart.alu(AluOp::Slt, 1, 2, true), Err(ExecError::NoWordForm("slt")));
    assert_eq!(
        hart.muldiv(MulDivOp::Mulh, 1, 2, true),
        Err(ExecError::NoWordForm("mulh"))
    );
}

#[test]
fn rv32_computes_on_32_bits() {
    let hart = rv32();
    assert_eq!(hart.alu(AluOp::Add, 0x7FFF_FFFF, 1, false), Ok(sext32(0x8000_0000)));
    assert_eq!(hart.alu(AluOp::Sll, 1, 32, false), Ok(1));
    assert_eq!(hart.alu(AluOp::Sltu, 0x1_0000_0000, 1, false), Ok(1));
    assert_eq!(
        hart.muldiv(MulDivOp::Mulhu, 0xFFFF_FFFF, 0xFFFF_FFFF, false),
        Ok(sext32(0xFFFF_FFFE))
    );
    assert_eq!(hart.auipc(0x7FFF_F000, 1), sext32(0x8000_0000));
    assert_eq!(hart.lui(0x80000), sext32(0x8000_0000));
}

#[test]
fn rv32_rejects_word_forms() {
    let hart = rv32();
    assert_eq!(
        hart.alu(AluOp::Add, 1, 2, true),
        Err(ExecError::UnsupportedOnRv32("addw"))
    );
    assert_eq!(
        hart.alu_imm(AluOp::Sra, 1, 2, true),
        Err(ExecError::UnsupportedOnRv32("sraw"))
    );
    assert_eq!(
        hart.muldiv(MulDivOp::Div, 1, 2, true),
        Err(ExecError::UnsupportedOnRv32("divw"))
    );
}

#[test]
fn rv64_auipc_does_not_wrap_at_32_bits() {
    let hart = Hart::default();
    assert_eq!(hart.auipc(0x7FFF_F000, 1), 0x8000_0000);
}

// ─── Extensions ──────────────────────────────────────────────────────────────

#[test]
fn disabled_extensions_are_rejected() {
    assert_eq!(
        without("m").muldiv(MulDivOp::Mul, 2, 3, false),
        Err(ExecError::ExtensionDisabled(Extension::M))
    );
    assert_eq!(
        without("a").amo(AtomicOp::Add, 1, 1, AmoWidth::Word),
        Err(ExecError::ExtensionDisabled(Extension::A))
    );
    assert_eq!(
        without("f").fpu(FpOp::FAdd, s(1.0), s(1.0), 0, true, 0),
        Err(ExecError::ExtensionDisabled(Extension::F))
    );
    assert_eq!(
        without("d").fpu(FpOp::FAdd, d(1.0), d(1.0), 0, false, 0),
        Err(ExecError::ExtensionDisabled(Extension::D))
    );
    assert_eq!(
        without("d").fpu(FpOp::FCvtDS, s(1.0), 0, 0, true, 0),
        Err(ExecError::ExtensionDisabled(Extension::D))
    );
    assert_eq!(
        without("f").fp_load(0, false),
        Err(ExecError::ExtensionDisabled(Extension::D))
    );
}

#[test]
fn single_precision_works_without_d() {
    let mut hart = without("d");
    assert_eq!(hart.fpu(FpOp::FAdd, s(1.0), s(1.0), 0, true, 0), Ok(s(2.0)));
    assert_eq!(hart.fp_load(0x3F80_0000, true), Ok(s(1.0)));
}

// ─── Memory ──────────────────────────────────────────────────────────────────

#[test]
fn amo_results() {
    let hart = Hart::default();
    assert_eq!(
        hart.amo(AtomicOp::Add, 0xFFFF_FFFF, 1, AmoWidth::Word),
        Ok(AmoResult { loaded: u64::MAX, stored: 0 })
    );
    assert_eq!(
        hart.amo(AtomicOp::Maxu, 1, u64::MAX, AmoWidth::Double),
        Ok(AmoResult { loaded: 1, stored: u64::MAX })
    );
}

#[test]
fn rv32_rejects_doubleword_memory_operations() {
    let hart = rv32();
    assert_eq!(
        hart.amo(AtomicOp::Swap, 0, 0, AmoWidth::Double),
        Err(ExecError::UnsupportedOnRv32("amo*.d"))
    );
    assert_eq!(hart.load(0, MemWidth::Double, true), Err(ExecError::UnsupportedOnRv32("ld")));
    assert_eq!(hart.load(0, MemWidth::Word, false), Err(ExecError::UnsupportedOnRv32("lwu")));
    assert_eq!(hart.store(0, MemWidth::Double), Err(ExecError::UnsupportedOnRv32("sd")));
    assert_eq!(hart.load(0x8000_0000, MemWidth::Word, true), Ok(sext32(0x8000_0000)));
    assert_eq!(hart.load(0xFF, MemWidth::Byte, false), Ok(0xFF));
}

#[test]
fn fp_memory_round_trip() {
    let hart = Hart::default();
    let reg = hart.fp_load(0x4049_0FDB, true).unwrap();
    assert_eq!(reg, 0xFFFF_FFFF_4049_0FDB);
    assert_eq!(hart.fp_store(reg, true), Ok(0x4049_0FDB));
    assert_eq!(hart.store(reg, MemWidth::Half), Ok(0x0FDB));
}

// ─── Floating point ──────────────────────────────────────────────────────────

#[test]
fn fpu_accrues_into_own_fcsr() {
    let mut hart = Hart::default();
    let r = hart.fpu(FpOp::FDiv, s(10.0), s(0.0), 0, true, DYNAMIC).unwrap();
    assert_eq!(r, s(f32::INFINITY));
    assert_eq!(hart.fcsr().frflags(), 0x8);
}

#[test]
fn harts_do_not_share_flags() {
    let mut first = Hart::default();
    let mut second = Hart::default();
    let _ = first.fpu(FpOp::FSqrt, s(-1.0), 0, 0, true, 0).unwrap();
    let _ = second.fpu(FpOp::FDiv, d(1.0), d(3.0), 0, false, 0).unwrap();
    assert_eq!(first.fcsr().frflags(), 0x10);
    assert_eq!(second.fcsr().frflags(), 0x01);
}

#[test]
fn configured_frm_drives_dynamic_rounding() {
    let config = Config::from_json(r#"{ "fpu": { "rounding_mode": 1 } }"#).unwrap();
    let mut hart = Hart::new(&config);
    let r = hart.fpu(FpOp::FCvtW, s(-1.5), 0, 0, true, DYNAMIC).unwrap();
    assert_eq!(r, -1i64 as u64);

    let _ = hart.fcsr_mut().fsrm(6);
    assert_eq!(
        hart.fpu(FpOp::FCvtW, s(-1.5), 0, 0, true, DYNAMIC),
        Err(ExecError::ReservedRoundingMode(6))
    );
}

#[test]
fn rv32_rejects_64_bit_fp_integer_operations() {
    let mut hart = rv32();
    assert_eq!(
        hart.fpu(FpOp::FCvtL, d(1.0), 0, 0, false, 1),
        Err(ExecError::UnsupportedOnRv32("fcvt.l"))
    );
    assert_eq!(
        hart.fpu(FpOp::FCvtFromLu, 1, 0, 0, true, 0),
        Err(ExecError::UnsupportedOnRv32("fcvt.*.lu"))
    );
    assert_eq!(
        hart.fpu(FpOp::FMvToX, d(1.0), 0, 0, false, 0),
        Err(ExecError::UnsupportedOnRv32("fmv.x.d"))
    );
    // Double-precision arithmetic itself is fine on RV32.
    assert_eq!(hart.fpu(FpOp::FMul, d(1.5), d(2.0), 0, false, 0), Ok(d(3.0)));
    assert_eq!(hart.fpu(FpOp::FMvToX, s(-1.0), 0, 0, true, 0), Ok(0xFFFF_FFFF_BF80_0000));
}
