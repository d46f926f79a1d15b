//! Error definitions.
//!
//! Every inconsistency the simulator can detect is reported through one of the
//! types in this module. It provides:
//! 1. **Decode Errors:** Instruction words with no defined meaning.
//! 2. **Configuration Errors:** Malformed or degenerate cache geometry strings.
//! 3. **Load Errors:** Malformed, out-of-sequence, or oversized machine-code input.
//! 4. **Simulation Errors:** Failures raised while the engine is running.
//!
//! None of these are recoverable; the library returns them and leaves process
//! termination to the binary.

use std::io;

use thiserror::Error;

use crate::config::CacheLevelId;

/// Failure to turn a fetched word into an [`Instruction`](crate::isa::Instruction).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A register-register instruction carried a function code outside
    /// `add`/`sub`/`or`/`and`/`slt`/`jr`.
    #[error("unknown funct {funct:#06b} in instruction word {word:#018b}")]
    UnknownFunct {
        /// The complete instruction word.
        word: u16,
        /// The offending 4-bit function code.
        funct: u16,
    },
}

/// Cache field named in a [`ConfigError::ZeroField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheField {
    /// Total size in words.
    Size,
    /// Number of slots per row.
    Associativity,
    /// Words per block.
    BlockSize,
}

impl std::fmt::Display for CacheField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Size => f.write_str("size"),
            Self::Associativity => f.write_str("associativity"),
            Self::BlockSize => f.write_str("blocksize"),
        }
    }
}

/// Invalid cache configuration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The list held neither 3 (one level) nor 6 (two levels) values.
    #[error("invalid cache config: expected 3 or 6 comma-separated values, found {0}")]
    FieldCount(usize),

    /// A value was not a non-negative integer.
    #[error("invalid cache config: {0:?} is not a number")]
    InvalidNumber(String),

    /// A geometry value was zero.
    #[error("invalid cache config: {level} {field} must be positive")]
    ZeroField {
        /// Level carrying the value.
        level: CacheLevelId,
        /// Which value was zero.
        field: CacheField,
    },

    /// `size` is smaller than one full row (`blocksize * associativity`).
    #[error("invalid cache config: {level} has no rows")]
    NoRows {
        /// Level with the degenerate geometry.
        level: CacheLevelId,
    },
}

/// Failure while reading machine code into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("can't open file: {0}")]
    Io(#[from] io::Error),

    /// A line did not match `ram[ADDR] = 16'bBITS;`.
    #[error("can't parse line {line}: {text}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The line as read.
        text: String,
    },

    /// A line assigned an address other than the next one in sequence.
    #[error("memory addresses encountered out of sequence: {found} (expected {expected})")]
    OutOfSequence {
        /// The address that should have come next.
        expected: usize,
        /// The address that was found.
        found: usize,
    },

    /// The program does not fit in memory.
    #[error("program too big for memory: address {addr}")]
    ProgramTooLarge {
        /// First address past the end of memory.
        addr: usize,
    },
}

/// Failure raised while the engine executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The word fetched at `pc` could not be decoded.
    #[error("at pc {pc}: {source}")]
    Decode {
        /// Program counter of the faulting fetch.
        pc: u16,
        /// Underlying decode failure.
        source: DecodeError,
    },
}

/// Any error surfaced by the simulator library.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`LoadError`].
    #[error(transparent)]
    Load(#[from] LoadError),
    /// See [`SimError`].
    #[error(transparent)]
    Sim(#[from] SimError),
}
