//! Instruction Disassembler for E20.
//!
//! Converts decoded instructions (or raw words) into E20 assembly text for
//! debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use e20_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0b001_000_001_1111111), "addi $1,$0,-1");
//! assert_eq!(disassemble(0b010_0000000000101), "j 5");
//! assert_eq!(disassemble(0b000_000_000_000_0111), ".fill 7");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Formats a sign-extended immediate as the signed value it encodes.
#[inline]
const fn signed(imm: u16) -> i16 {
    imm as i16
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Alu {
                op,
                dst,
                src_a,
                src_b,
            } => write!(f, "{} ${dst},${src_a},${src_b}", op.mnemonic()),
            Self::Jr { src } => write!(f, "jr ${src}"),
            Self::Addi { dst, src, imm } => write!(f, "addi ${dst},${src},{}", signed(imm)),
            Self::J { target } => write!(f, "j {target}"),
            Self::Jal { target } => write!(f, "jal {target}"),
            Self::Lw { dst, base, imm } => write!(f, "lw ${dst},{}(${base})", signed(imm)),
            Self::Sw { src, base, imm } => write!(f, "sw ${src},{}(${base})", signed(imm)),
            Self::Jeq { src_a, src_b, imm } => {
                write!(f, "jeq ${src_a},${src_b},{}", signed(imm))
            }
            Self::Slti { dst, src, imm } => write!(f, "slti ${dst},${src},{}", signed(imm)),
        }
    }
}

/// Disassembles a raw word. Undecodable words are rendered as `.fill` data.
pub fn disassemble(word: u16) -> String {
    decode(word).map_or_else(|_| format!(".fill {word}"), |inst| inst.to_string())
}
