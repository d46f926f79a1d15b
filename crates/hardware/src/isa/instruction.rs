//! Instruction encoding and decoded forms.
//!
//! Provides bit extraction for 16-bit E20 instruction words and the closed set of
//! decoded instructions the engine dispatches on.

use crate::common::constants::{
    FUNCT_MASK, IMM7_MASK, IMM7_SIGN_BIT, IMM7_SIGN_EXTENSION, IMM13_MASK, OPCODE_MASK,
    OPCODE_SHIFT, REG_A_SHIFT, REG_B_SHIFT, REG_DST_SHIFT, REG_MASK,
};

/// Trait for extracting instruction fields from encoded instructions.
///
/// All E20 formats share the same field positions, so extraction does not
/// depend on the opcode; the decoder decides which fields are meaningful.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 15-13).
    fn opcode(&self) -> u16;

    /// Extracts the `regA` field (bits 12-10).
    fn reg_a(&self) -> usize;

    /// Extracts the `regB` field (bits 9-7).
    ///
    /// This is the destination of `addi`, `lw` and `slti`, and the second
    /// source of `sw` and `jeq`.
    fn reg_b(&self) -> usize;

    /// Extracts the reg-reg destination field (bits 6-4).
    fn reg_dst(&self) -> usize;

    /// Extracts the reg-reg function code (bits 3-0).
    fn funct(&self) -> u16;

    /// Extracts the 7-bit immediate (bits 6-0) sign-extended to 16 bits.
    ///
    /// Bit 6 is replicated into bits 15-7, so the result is the two's-complement
    /// bit pattern of a value in `-64..=63`.
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit absolute address (bits 12-0), zero-extended.
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_dst(&self) -> usize {
        ((self >> REG_DST_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u16 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        let imm = self & IMM7_MASK;
        if imm & IMM7_SIGN_BIT == 0 {
            imm
        } else {
            imm | IMM7_SIGN_EXTENSION
        }
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// Operation selected by the function code of a register-register instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Unsigned set-less-than.
    Slt,
}

impl AluOp {
    /// Applies the operation to two register values.
    #[inline]
    pub const fn apply(self, a: u16, b: u16) -> u16 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Sub => a.wrapping_sub(b),
            Self::Or => a | b,
            Self::And => a & b,
            Self::Slt => (a < b) as u16,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Or => "or",
            Self::And => "and",
            Self::Slt => "slt",
        }
    }
}

/// A decoded E20 instruction.
///
/// Register fields are indices into the register file (0-7). Immediates are
/// stored as 16-bit patterns: 7-bit immediates already sign-extended, 13-bit
/// jump targets zero-extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `add`/`sub`/`or`/`and`/`slt $dst, $src_a, $src_b`
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination register.
        dst: usize,
        /// First operand register.
        src_a: usize,
        /// Second operand register.
        src_b: usize,
    },
    /// `jr $src`: jump to the address held in a register.
    Jr {
        /// Register holding the target.
        src: usize,
    },
    /// `addi $dst, $src, imm`
    Addi {
        /// Destination register.
        dst: usize,
        /// Source register.
        src: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `j target`: absolute jump; a jump to its own address halts.
    J {
        /// Absolute target address.
        target: u16,
    },
    /// `jal target`: absolute jump saving `pc + 1` in `$7`.
    Jal {
        /// Absolute target address.
        target: u16,
    },
    /// `lw $dst, imm($base)`
    Lw {
        /// Destination register.
        dst: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `sw $src, imm($base)`
    Sw {
        /// Register holding the stored value.
        src: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `jeq $src_a, $src_b, imm`: relative branch on equality.
    Jeq {
        /// First compared register.
        src_a: usize,
        /// Second compared register.
        src_b: usize,
        /// Sign-extended offset from `pc + 1`.
        imm: u16,
    },
    /// `slti $dst, $src, imm`: unsigned compare against the extended immediate.
    Slti {
        /// Destination register.
        dst: usize,
        /// Compared register.
        src: usize,
        /// Sign-extended immediate, compared as unsigned.
        imm: u16,
    },
}

impl Instruction {
    /// True for `lw` and `sw`, the only instructions that touch the cache.
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Lw { .. } | Self::Sw { .. })
    }
}
