//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 instruction layout, the decoded instruction type, the
//! decoder, and a disassembler.
//!
//! Every E20 instruction is one 16-bit word. Bits 15-13 hold the opcode; the
//! remaining fields sit at fixed positions shared by all formats:
//!
//! ```text
//!  15  13 12  10 9    7 6    4 3    0
//! +------+------+------+------+------+
//! |  op  | regA | regB | dst  |funct |   reg-reg (op = 000)
//! +------+------+------+-------------+
//! |  op  | regA | regB |    imm7     |   addi, lw, sw, jeq, slti
//! +------+---------------------------+
//! |  op  |          imm13            |   j, jal
//! +------+---------------------------+
//! ```

/// Instruction decoding from raw words.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

pub use decode::decode;
pub use instruction::{AluOp, Instruction, InstructionBits};
