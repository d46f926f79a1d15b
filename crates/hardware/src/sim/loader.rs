//! Machine-Code Loader.
//!
//! This module reads the textual machine-code format into a [`Memory`] image.
//! Each line assigns one word:
//!
//! ```text
//! ram[0] = 16'b0010000010000101;  // addi $1,$0,5
//! ram[1] = 16'b0100000000000001;  // halt
//! ```
//!
//! Addresses must start at 0 and increase by one per line; anything after the
//! semicolon is ignored.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::common::constants::MEM_SIZE;
use crate::common::error::LoadError;
use crate::soc::Memory;

/// `ram[ADDR] = 16'bBITS;` followed by anything.
#[allow(clippy::expect_used)]
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ram\[(\d+)\] = 16'b([01]+);.*$").expect("machine code pattern is valid")
});

/// Parses machine-code text into a fresh memory image.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] for a line that does not match the format,
/// [`LoadError::OutOfSequence`] for a gap or repeat, and
/// [`LoadError::ProgramTooLarge`] once an address reaches [`MEM_SIZE`].
///
/// # Examples
///
/// ```
/// use e20_core::sim::load_machine_code;
///
/// let mem = load_machine_code("ram[0] = 16'b0100000000000000;\n").unwrap();
/// assert_eq!(mem.read(0), 0b0100_0000_0000_0000);
///
/// assert!(load_machine_code("ram[1] = 16'b0;\n").is_err());
/// ```
pub fn load_machine_code(text: &str) -> Result<Memory, LoadError> {
    let mut memory = Memory::new();
    let mut expected = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let malformed = || LoadError::Malformed {
            line: idx + 1,
            text: line.to_string(),
        };
        let caps = LINE_RE.captures(line).ok_or_else(malformed)?;
        let addr: usize = caps[1].parse().map_err(|_| malformed())?;
        let word = u32::from_str_radix(&caps[2], 2).map_err(|_| malformed())?;

        if addr != expected {
            return Err(LoadError::OutOfSequence {
                expected,
                found: addr,
            });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::ProgramTooLarge { addr });
        }
        memory.write(addr, word as u16);
        expected += 1;
    }

    tracing::debug!(words = expected, "loaded machine code");
    Ok(memory)
}

/// Reads and parses a machine-code file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`load_machine_code`].
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Memory, LoadError> {
    let text = fs::read_to_string(path)?;
    load_machine_code(&text)
}
