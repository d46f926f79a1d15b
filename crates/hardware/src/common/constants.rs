//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Machine Constants:** Register count and memory capacity.
//! 2. **Instruction Constants:** Opcode, register, and immediate field shifts and masks.
//! 3. **Funct Codes:** Function selectors for the register-register instruction group.

/// Number of general-purpose registers (`$0`-`$7`).
pub const NUM_REGS: usize = 8;

/// Number of 16-bit words in main memory (8192).
///
/// Every address, including the fetch address, is reduced modulo this value.
pub const MEM_SIZE: usize = 1 << 13;

/// Register that receives the return address on `jal`.
pub const LINK_REG: usize = 7;

/// Bit position shift for the 3-bit opcode field (bits 15-13).
pub const OPCODE_SHIFT: u16 = 13;

/// Bit mask for extracting the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0b111;

/// Bit mask for any 3-bit register field after shifting.
pub const REG_MASK: u16 = 0b111;

/// Bit position shift for the `regA` field (bits 12-10).
pub const REG_A_SHIFT: u16 = 10;

/// Bit position shift for the `regB` field (bits 9-7).
pub const REG_B_SHIFT: u16 = 7;

/// Bit position shift for the reg-reg destination field (bits 6-4).
pub const REG_DST_SHIFT: u16 = 4;

/// Bit mask for the reg-reg function code (bits 3-0).
pub const FUNCT_MASK: u16 = 0b1111;

/// Bit mask for the 7-bit immediate (bits 6-0).
pub const IMM7_MASK: u16 = 0b111_1111;

/// Sign bit of the 7-bit immediate.
pub const IMM7_SIGN_BIT: u16 = 0b100_0000;

/// Bits set when widening a negative 7-bit immediate to 16 bits.
pub const IMM7_SIGN_EXTENSION: u16 = 0b1111_1111_1000_0000;

/// Bit mask for the 13-bit absolute jump target (bits 12-0).
pub const IMM13_MASK: u16 = 0b1_1111_1111_1111;

/// Function codes of the register-register group (opcode `000`).
pub mod funct {
    /// `add $dst, $srcA, $srcB`
    pub const ADD: u16 = 0b0000;
    /// `sub $dst, $srcA, $srcB`
    pub const SUB: u16 = 0b0001;
    /// `or $dst, $srcA, $srcB`
    pub const OR: u16 = 0b0010;
    /// `and $dst, $srcA, $srcB`
    pub const AND: u16 = 0b0011;
    /// `slt $dst, $srcA, $srcB` (unsigned comparison)
    pub const SLT: u16 = 0b0100;
    /// `jr $srcA`
    pub const JR: u16 = 0b1000;
}

/// Major opcodes (bits 15-13).
pub mod opcodes {
    /// Register-register group, selected further by funct.
    pub const OP_REG: u16 = 0b000;
    /// `addi`
    pub const OP_ADDI: u16 = 0b001;
    /// `j`
    pub const OP_J: u16 = 0b010;
    /// `jal`
    pub const OP_JAL: u16 = 0b011;
    /// `lw`
    pub const OP_LW: u16 = 0b100;
    /// `sw`
    pub const OP_SW: u16 = 0b101;
    /// `jeq`
    pub const OP_JEQ: u16 = 0b110;
    /// `slti`
    pub const OP_SLTI: u16 = 0b111;
}
