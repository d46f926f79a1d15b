//! E20 Instruction Decoder.
//!
//! Turns a fetched 16-bit word into an [`Instruction`]. The top three bits select
//! the format; the register-register group is further selected by the low four
//! bits. Decoding happens once per fetch, so the engine never re-inspects raw
//! bit fields.

use crate::common::constants::{funct, opcodes};
use crate::common::error::DecodeError;
use crate::isa::instruction::{AluOp, Instruction, InstructionBits};

/// Decodes a 16-bit instruction word.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownFunct`] for a register-register word whose
/// function code is not one of `add`, `sub`, `or`, `and`, `slt`, `jr`.
///
/// # Examples
///
/// ```
/// use e20_core::isa::{decode, AluOp, Instruction};
///
/// // add $3, $1, $2
/// let inst = decode(0b000_001_010_011_0000).unwrap();
/// assert_eq!(inst, Instruction::Alu { op: AluOp::Add, dst: 3, src_a: 1, src_b: 2 });
///
/// // addi $1, $0, -1
/// let inst = decode(0b001_000_001_1111111).unwrap();
/// assert_eq!(inst, Instruction::Addi { dst: 1, src: 0, imm: 0xFFFF });
/// ```
pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
    let inst = match word.opcode() {
        opcodes::OP_REG => return decode_reg(word),
        opcodes::OP_ADDI => Instruction::Addi {
            dst: word.reg_b(),
            src: word.reg_a(),
            imm: word.imm7(),
        },
        opcodes::OP_J => Instruction::J {
            target: word.imm13(),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: word.imm13(),
        },
        opcodes::OP_LW => Instruction::Lw {
            dst: word.reg_b(),
            base: word.reg_a(),
            imm: word.imm7(),
        },
        opcodes::OP_SW => Instruction::Sw {
            src: word.reg_b(),
            base: word.reg_a(),
            imm: word.imm7(),
        },
        opcodes::OP_JEQ => Instruction::Jeq {
            src_a: word.reg_a(),
            src_b: word.reg_b(),
            imm: word.imm7(),
        },
        // The opcode field is three bits wide, so OP_SLTI is the only value left.
        _ => Instruction::Slti {
            dst: word.reg_b(),
            src: word.reg_a(),
            imm: word.imm7(),
        },
    };
    Ok(inst)
}

/// Decodes the register-register group (opcode `000`).
fn decode_reg(word: u16) -> Result<Instruction, DecodeError> {
    let (dst, src_a, src_b) = (word.reg_dst(), word.reg_a(), word.reg_b());
    let op = match word.funct() {
        funct::ADD => AluOp::Add,
        funct::SUB => AluOp::Sub,
        funct::OR => AluOp::Or,
        funct::AND => AluOp::And,
        funct::SLT => AluOp::Slt,
        funct::JR => return Ok(Instruction::Jr { src: src_a }),
        other => {
            return Err(DecodeError::UnknownFunct {
                word,
                funct: other,
            });
        }
    };
    Ok(Instruction::Alu {
        op,
        dst,
        src_a,
        src_b,
    })
}
