//! Operation tags for the execution units.
//!
//! Each unit is driven by a closed enum so dispatch is an exhaustive `match`.
//! The tags name the operation only; operand width (W form, RV32, single or
//! double precision) is passed separately, mirroring how the base and W
//! instructions share a funct3/funct7 encoding.

/// Integer ALU operations (RV32I/RV64I register-register and immediate forms).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition (`add`, `addi`, `addw`, `addiw`).
    #[default]
    Add,
    /// Integer subtraction (`sub`, `subw`).
    Sub,
    /// Shift left logical (`sll`, `slli`, `sllw`, `slliw`).
    Sll,
    /// Set less than, signed (`slt`, `slti`).
    Slt,
    /// Set less than, unsigned (`sltu`, `sltiu`).
    Sltu,
    /// Bitwise XOR (`xor`, `xori`).
    Xor,
    /// Shift right logical (`srl`, `srli`, `srlw`, `srliw`).
    Srl,
    /// Shift right arithmetic (`sra`, `srai`, `sraw`, `sraiw`).
    Sra,
    /// Bitwise OR (`or`, `ori`).
    Or,
    /// Bitwise AND (`and`, `andi`).
    And,
}

impl AluOp {
    /// Returns the mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
        }
    }

    /// Returns the mnemonic of the RV64 W-suffixed form, if there is one.
    pub const fn word_mnemonic(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("addw"),
            Self::Sub => Some("subw"),
            Self::Sll => Some("sllw"),
            Self::Srl => Some("srlw"),
            Self::Sra => Some("sraw"),
            Self::Slt | Self::Sltu | Self::Xor | Self::Or | Self::And => None,
        }
    }

    /// Returns whether RV64 defines a W-suffixed form of this operation.
    pub const fn has_word_form(self) -> bool {
        self.word_mnemonic().is_some()
    }
}

/// Multiply/divide operations (M extension).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MulDivOp {
    /// Low half of the product (`mul`, `mulw`).
    #[default]
    Mul,
    /// High half of the signed x signed product.
    Mulh,
    /// High half of the signed x unsigned product.
    Mulhsu,
    /// High half of the unsigned x unsigned product.
    Mulhu,
    /// Signed division (`div`, `divw`).
    Div,
    /// Unsigned division (`divu`, `divuw`).
    Divu,
    /// Signed remainder (`rem`, `remw`).
    Rem,
    /// Unsigned remainder (`remu`, `remuw`).
    Remu,
}

impl MulDivOp {
    /// Returns the mnemonic of the XLEN-wide form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
        }
    }

    /// Returns the mnemonic of the RV64 W-suffixed form, if there is one.
    pub const fn word_mnemonic(self) -> Option<&'static str> {
        match self {
            Self::Mul => Some("mulw"),
            Self::Div => Some("divw"),
            Self::Divu => Some("divuw"),
            Self::Rem => Some("remw"),
            Self::Remu => Some("remuw"),
            Self::Mulh | Self::Mulhsu | Self::Mulhu => None,
        }
    }

    /// Returns whether RV64 defines a W-suffixed form of this operation.
    pub const fn has_word_form(self) -> bool {
        self.word_mnemonic().is_some()
    }
}

/// Atomic memory operations (A extension).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AtomicOp {
    /// Atomic swap.
    #[default]
    Swap,
    /// Atomic add.
    Add,
    /// Atomic XOR.
    Xor,
    /// Atomic AND.
    And,
    /// Atomic OR.
    Or,
    /// Atomic minimum (signed).
    Min,
    /// Atomic maximum (signed).
    Max,
    /// Atomic minimum (unsigned).
    Minu,
    /// Atomic maximum (unsigned).
    Maxu,
}

/// Width of an atomic memory operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AmoWidth {
    /// `.w`: 32-bit word, sign-extended into the register.
    #[default]
    Word,
    /// `.d`: 64-bit doubleword (RV64 only).
    Double,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemWidth {
    /// 8-bit byte access.
    #[default]
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    Word,
    /// 64-bit double-word access.
    Double,
}

impl MemWidth {
    /// Returns the access size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }
}

/// Floating-point operations (F and D extensions).
///
/// Precision is selected by the caller (`is32`) except for the two
/// precision-changing conversions, which carry their direction in the tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FpOp {
    /// Floating-point addition.
    #[default]
    FAdd,
    /// Floating-point subtraction.
    FSub,
    /// Floating-point multiplication.
    FMul,
    /// Floating-point division.
    FDiv,
    /// Floating-point square root.
    FSqrt,
    /// Floating-point minimum.
    FMin,
    /// Floating-point maximum.
    FMax,
    /// Fused `a * b + c`.
    FMAdd,
    /// Fused `a * b - c`.
    FMSub,
    /// Fused `-(a * b) - c`.
    FNMAdd,
    /// Fused `-(a * b) + c`.
    FNMSub,
    /// Sign injection: sign of `b`.
    FSgnJ,
    /// Sign injection: negated sign of `b`.
    FSgnJN,
    /// Sign injection: sign of `a` XOR sign of `b`.
    FSgnJX,
    /// Quiet equality comparison.
    FEq,
    /// Signaling less-than comparison.
    FLt,
    /// Signaling less-than-or-equal comparison.
    FLe,
    /// Classify into a one-hot 10-bit mask.
    FClass,
    /// Float to signed 32-bit integer (`fcvt.w.s`, `fcvt.w.d`).
    FCvtW,
    /// Float to unsigned 32-bit integer (`fcvt.wu.s`, `fcvt.wu.d`).
    FCvtWu,
    /// Float to signed 64-bit integer (`fcvt.l.s`, `fcvt.l.d`).
    FCvtL,
    /// Float to unsigned 64-bit integer (`fcvt.lu.s`, `fcvt.lu.d`).
    FCvtLu,
    /// Signed 32-bit integer to float (`fcvt.s.w`, `fcvt.d.w`).
    FCvtFromW,
    /// Unsigned 32-bit integer to float (`fcvt.s.wu`, `fcvt.d.wu`).
    FCvtFromWu,
    /// Signed 64-bit integer to float (`fcvt.s.l`, `fcvt.d.l`).
    FCvtFromL,
    /// Unsigned 64-bit integer to float (`fcvt.s.lu`, `fcvt.d.lu`).
    FCvtFromLu,
    /// Double to single precision (`fcvt.s.d`).
    FCvtSD,
    /// Single to double precision (`fcvt.d.s`).
    FCvtDS,
    /// Move float bits to an integer register (`fmv.x.w`, `fmv.x.d`).
    FMvToX,
    /// Move integer bits to a float register (`fmv.w.x`, `fmv.d.x`).
    FMvToF,
}

impl FpOp {
    /// Returns whether the instruction encodes an `rm` field.
    ///
    /// Operations without one (sign injection, min/max, compares, classify
    /// and moves) ignore the rounding mode entirely and never raise a
    /// reserved-rounding-mode error.
    pub const fn uses_rounding_mode(self) -> bool {
        !matches!(
            self,
            Self::FMin
                | Self::FMax
                | Self::FSgnJ
                | Self::FSgnJN
                | Self::FSgnJX
                | Self::FEq
                | Self::FLt
                | Self::FLe
                | Self::FClass
                | Self::FMvToX
                | Self::FMvToF
        )
    }

    /// Returns whether the operation only exists on RV64.
    ///
    /// `fmv.x.d`/`fmv.d.x` are also RV64-only; that depends on precision and
    /// is checked by the caller.
    pub const fn is_rv64_only(self) -> bool {
        matches!(
            self,
            Self::FCvtL | Self::FCvtLu | Self::FCvtFromL | Self::FCvtFromLu
        )
    }
}
