//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 16-bit
//! general-purpose registers of the machine. It provides:
//! 1. **Storage:** A fixed array of [`NUM_REGS`] words.
//! 2. **Invariant Enforcement:** Register `$0` reads as zero.
//! 3. **Observability:** Formatting of the complete register state for traces.

use std::fmt;

use super::constants::NUM_REGS;

/// General-purpose register file.
///
/// Writes to `$0` are stored like any other write, since an instruction may
/// target it, but every read of `$0` returns 0 and the engine calls
/// [`RegisterFile::clear_zero`] at the end of every instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Register `$0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= NUM_REGS`. Decoded instructions only carry 3-bit indices.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx] = val;
    }

    /// Forces `$0` back to zero.
    #[inline]
    pub fn clear_zero(&mut self) {
        self.regs[0] = 0;
    }

    /// Returns a copy of all register values, `$0` first.
    pub fn snapshot(&self) -> [u16; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.snapshot().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "${i}={val}")?;
        }
        Ok(())
    }
}
