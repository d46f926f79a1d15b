//! Main Memory.
//!
//! This module implements the flat word-addressed memory of the machine. It provides:
//! 1. **Storage:** A fixed, heap-allocated array of [`MEM_SIZE`] 16-bit words.
//! 2. **Wrapping:** Every access reduces its address modulo [`MEM_SIZE`].
//!
//! Memory is never consulted by the cache model; caches only classify accesses.

use crate::common::constants::MEM_SIZE;

/// Flat main memory of [`MEM_SIZE`] words.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16; MEM_SIZE]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: Box::new([0; MEM_SIZE]),
        }
    }

    /// Reduces an address to its in-range cell index.
    #[inline(always)]
    pub const fn wrap(addr: usize) -> usize {
        addr % MEM_SIZE
    }

    /// Reads the word at `addr`, wrapping modulo [`MEM_SIZE`].
    #[inline]
    pub fn read(&self, addr: usize) -> u16 {
        self.words[Self::wrap(addr)]
    }

    /// Writes the word at `addr`, wrapping modulo [`MEM_SIZE`].
    #[inline]
    pub fn write(&mut self, addr: usize, val: u16) {
        self.words[Self::wrap(addr)] = val;
    }

    /// Returns the total number of words.
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        MEM_SIZE
    }

    /// Always `false`; memory has a fixed non-zero capacity.
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Read-only view of the whole address space.
    pub fn as_slice(&self) -> &[u16] {
        &self.words[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("len", &MEM_SIZE)
            .field("used", &used)
            .finish()
    }
}
