//! Per-hart evaluation context.
//!
//! The execution units are pure and know nothing about the hart they run on.
//! [`Hart`] supplies that context: it checks that an operation is legal for
//! the configured XLEN and extensions, picks the operand width, and owns the
//! `fcsr` that floating-point operations read their rounding mode from and
//! accrue their flags into. Harts share nothing, so each simulated hardware
//! thread can be given its own.

use crate::common::error::{ExecError, Extension};
use crate::config::{Config, IsaConfig, Xlen};
use crate::core::arch::fcsr::Fcsr;
use crate::core::signals::{AluOp, AmoWidth, AtomicOp, FpOp, MemWidth, MulDivOp};
use crate::core::units::alu::Alu;
use crate::core::units::fpu::Fpu;
use crate::core::units::lsu::access;
use crate::core::units::lsu::{AmoResult, Lsu};
use crate::core::units::mdu::Mdu;

/// A RISC-V hardware thread as seen by the execute stage.
///
/// # Examples
///
/// ```
/// use rvsem_core::{Config, Hart};
/// use rvsem_core::core::signals::{AluOp, FpOp};
/// use rvsem_core::core::units::fpu::Fpu;
///
/// let mut hart = Hart::new(&Config::default());
///
/// assert_eq!(hart.alu_imm(AluOp::Add, 0x3FFF_FFFF, 255, false).unwrap(), 1_073_742_078);
///
/// let ten = Fpu::box_f32(10.0f32.to_bits());
/// let _ = hart.fpu(FpOp::FDiv, ten, Fpu::box_f32(0), 0, true, 0).unwrap();
/// assert_eq!(hart.fcsr().frflags(), 0x8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Hart {
    isa: IsaConfig,
    fcsr: Fcsr,
}

impl Hart {
    /// Creates a hart with the configured ISA and initial `fcsr`.
    pub fn new(config: &Config) -> Self {
        tracing::debug!(
            xlen = config.isa.xlen.bits(),
            m = config.isa.extensions.m,
            a = config.isa.extensions.a,
            f = config.isa.extensions.f,
            d = config.isa.extensions.d,
            "hart created"
        );
        Self {
            isa: config.isa,
            fcsr: Fcsr::from_config(&config.fpu),
        }
    }

    /// Returns the register width.
    pub const fn xlen(&self) -> Xlen {
        self.isa.xlen
    }

    /// Returns the ISA description.
    pub const fn isa(&self) -> &IsaConfig {
        &self.isa
    }

    /// Returns the floating-point control and status register.
    pub const fn fcsr(&self) -> &Fcsr {
        &self.fcsr
    }

    /// Returns the floating-point control and status register for the
    /// `frrm`/`fsrm`/`fsflags`/`fscsr` family.
    pub const fn fcsr_mut(&mut self) -> &mut Fcsr {
        &mut self.fcsr
    }

    const fn is_rv32(&self) -> bool {
        matches!(self.isa.xlen, Xlen::Rv32)
    }

    fn require(&self, ext: Extension) -> Result<(), ExecError> {
        if self.isa.extensions.has(ext) {
            Ok(())
        } else {
            Err(reject(ExecError::ExtensionDisabled(ext)))
        }
    }

    /// Picks the operand width for an integer operation: 32 bits for an
    /// explicit W form or for any operation on RV32.
    fn integer_width(
        &self,
        word: bool,
        base: &'static str,
        word_mnemonic: Option<&'static str>,
    ) -> Result<bool, ExecError> {
        if !word {
            return Ok(self.is_rv32());
        }
        match word_mnemonic {
            None => Err(reject(ExecError::NoWordForm(base))),
            Some(name) if self.is_rv32() => Err(reject(ExecError::UnsupportedOnRv32(name))),
            Some(_) => Ok(true),
        }
    }

    /// Executes a register-register integer operation.
    ///
    /// `word` selects the RV64 W form (`addw`, `sllw`, ...).
    ///
    /// # Errors
    ///
    /// [`ExecError::NoWordForm`] if `word` is set for an operation without a
    /// W form; [`ExecError::UnsupportedOnRv32`] if `word` is set on RV32.
    pub fn alu(&self, op: AluOp, a: u64, b: u64, word: bool) -> Result<u64, ExecError> {
        let is32 = self.integer_width(word, op.mnemonic(), op.word_mnemonic())?;
        Ok(Alu::execute(op, a, b, is32))
    }

    /// Executes an immediate-form integer operation with a raw 12-bit
    /// immediate (`addi`, `slli`, `addiw`, ...).
    ///
    /// # Errors
    ///
    /// Same as [`Hart::alu`]. `subi` does not exist, so [`AluOp::Sub`] is
    /// accepted and simply subtracts the immediate.
    pub fn alu_imm(&self, op: AluOp, a: u64, imm: u32, word: bool) -> Result<u64, ExecError> {
        let is32 = self.integer_width(word, op.mnemonic(), op.word_mnemonic())?;
        Ok(Alu::execute_imm(op, a, imm, is32))
    }

    /// `lui`.
    #[allow(clippy::unused_self)]
    pub fn lui(&self, imm20: u32) -> u64 {
        Alu::lui(imm20)
    }

    /// `auipc`.
    pub fn auipc(&self, pc: u64, imm20: u32) -> u64 {
        Alu::auipc(pc, imm20, self.is_rv32())
    }

    /// Executes an M-extension operation.
    ///
    /// # Errors
    ///
    /// [`ExecError::ExtensionDisabled`] without M, plus the W-form errors of
    /// [`Hart::alu`].
    pub fn muldiv(&self, op: MulDivOp, a: u64, b: u64, word: bool) -> Result<u64, ExecError> {
        self.require(Extension::M)?;
        let is32 = self.integer_width(word, op.mnemonic(), op.word_mnemonic())?;
        Ok(Mdu::execute(op, a, b, is32))
    }

    /// Computes an AMO given the value currently in memory and `rs2`.
    ///
    /// # Errors
    ///
    /// [`ExecError::ExtensionDisabled`] without A;
    /// [`ExecError::UnsupportedOnRv32`] for `.d` on RV32.
    pub fn amo(
        &self,
        op: AtomicOp,
        mem_val: u64,
        reg_val: u64,
        width: AmoWidth,
    ) -> Result<AmoResult, ExecError> {
        self.require(Extension::A)?;
        if width == AmoWidth::Double && self.is_rv32() {
            return Err(reject(ExecError::UnsupportedOnRv32("amo*.d")));
        }
        Ok(Lsu::atomic(op, mem_val, reg_val, width))
    }

    /// Extends a raw loaded value to register width.
    ///
    /// # Errors
    ///
    /// [`ExecError::UnsupportedOnRv32`] for `ld` and `lwu` on RV32.
    pub fn load(&self, raw: u64, width: MemWidth, signed: bool) -> Result<u64, ExecError> {
        if self.is_rv32() {
            match (width, signed) {
                (MemWidth::Double, _) => return Err(reject(ExecError::UnsupportedOnRv32("ld"))),
                (MemWidth::Word, false) => return Err(reject(ExecError::UnsupportedOnRv32("lwu"))),
                _ => {}
            }
        }
        Ok(Lsu::load(raw, width, signed))
    }

    /// Truncates a register value to the store width.
    ///
    /// # Errors
    ///
    /// [`ExecError::UnsupportedOnRv32`] for `sd` on RV32.
    pub fn store(&self, val: u64, width: MemWidth) -> Result<u64, ExecError> {
        if width == MemWidth::Double && self.is_rv32() {
            return Err(reject(ExecError::UnsupportedOnRv32("sd")));
        }
        Ok(Lsu::store(val, width))
    }

    /// `flw` / `fld`.
    ///
    /// # Errors
    ///
    /// [`ExecError::ExtensionDisabled`] without F (or D for `fld`).
    pub fn fp_load(&self, raw: u64, is32: bool) -> Result<u64, ExecError> {
        self.require(precision_extension(is32))?;
        Ok(access::fp_load(raw, is32))
    }

    /// `fsw` / `fsd`.
    ///
    /// # Errors
    ///
    /// [`ExecError::ExtensionDisabled`] without F (or D for `fsd`).
    pub fn fp_store(&self, reg: u64, is32: bool) -> Result<u64, ExecError> {
        self.require(precision_extension(is32))?;
        Ok(access::fp_store(reg, is32))
    }

    /// Executes a floating-point operation, accruing flags into this hart's
    /// `fcsr`.
    ///
    /// `is32` selects single precision. `rm_field` is the instruction's
    /// rounding mode field (use [`DYNAMIC`] for `frm`).
    ///
    /// # Errors
    ///
    /// - [`ExecError::ExtensionDisabled`] without F, or without D for double
    ///   precision and for `fcvt.s.d`/`fcvt.d.s`.
    /// - [`ExecError::UnsupportedOnRv32`] for the 64-bit integer conversions
    ///   and `fmv.x.d`/`fmv.d.x` on RV32.
    /// - [`ExecError::ReservedRoundingMode`] when the rounding mode resolves to
    ///   a reserved encoding.
    ///
    /// [`DYNAMIC`]: crate::core::units::fpu::rounding_modes::DYNAMIC
    pub fn fpu(
        &mut self,
        op: FpOp,
        a: u64,
        b: u64,
        c: u64,
        is32: bool,
        rm_field: u8,
    ) -> Result<u64, ExecError> {
        let ext = match op {
            FpOp::FCvtSD | FpOp::FCvtDS => Extension::D,
            _ => precision_extension(is32),
        };
        self.require(ext)?;
        if self.is_rv32() {
            if op.is_rv64_only() {
                return Err(reject(ExecError::UnsupportedOnRv32(fcvt_long_mnemonic(op))));
            }
            if !is32 && matches!(op, FpOp::FMvToX | FpOp::FMvToF) {
                let name = if op == FpOp::FMvToX { "fmv.x.d" } else { "fmv.d.x" };
                return Err(reject(ExecError::UnsupportedOnRv32(name)));
            }
        }
        Fpu::execute(op, a, b, c, is32, rm_field, &mut self.fcsr).map_err(reject)
    }
}

const fn precision_extension(is32: bool) -> Extension {
    if is32 { Extension::F } else { Extension::D }
}

const fn fcvt_long_mnemonic(op: FpOp) -> &'static str {
    match op {
        FpOp::FCvtL => "fcvt.l",
        FpOp::FCvtLu => "fcvt.lu",
        FpOp::FCvtFromL => "fcvt.*.l",
        _ => "fcvt.*.lu",
    }
}

fn reject(err: ExecError) -> ExecError {
    tracing::warn!(%err, "operation rejected");
    err
}
