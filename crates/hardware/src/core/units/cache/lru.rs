//! Least Recently Used (LRU) Victim Selection.
//!
//! Each line records the logical time of its last install or hit. The victim is
//! found by a single linear scan over the row:
//!
//! - the scan starts with slot 0 as the candidate;
//! - slot `i` replaces the candidate if it is invalid, or if it is valid and was
//!   used strictly earlier than the candidate.
//!
//! An invalid slot therefore always beats a valid one (the last invalid slot in
//! scan order wins among several), and among valid slots with equal timestamps
//! the lowest index is kept.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per selection, where W is the associativity.
//! - **Space Complexity:** one timestamp per line, stored in the line itself.

use super::CacheLine;

/// Selects the slot to replace within one row.
///
/// # Arguments
///
/// * `row` - The lines of a single row, in slot order. Must be non-empty.
///
/// # Returns
///
/// The slot index to evict.
pub fn select_victim(row: &[CacheLine]) -> usize {
    let mut victim = 0;
    for (i, line) in row.iter().enumerate().skip(1) {
        if !line.valid || line.last_used < row[victim].last_used {
            victim = i;
        }
    }
    victim
}
