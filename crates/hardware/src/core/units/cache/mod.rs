//! Set-Associative Cache Model.
//!
//! This module implements the classification-only cache used by the E20
//! simulator. A [`CacheLevel`] holds tag, validity, and recency state for one
//! level; the [`CacheHierarchy`] chains an L1 with an optional L2 and resolves
//! loads and stores into [`AccessEvent`]s. No data is stored: memory contents
//! are never affected by cache state.
//!
//! Address decomposition for a level with `block_size` words per block and
//! `rows` rows:
//!
//! ```text
//! block = addr / block_size
//! row   = block % rows
//! tag   = block / rows
//! ```

/// Access events and the sink trait they are reported through.
pub mod event;

/// L1/L2 chaining and load/store resolution.
pub mod hierarchy;

/// LRU victim selection.
pub mod lru;

pub use event::{AccessEvent, AccessLog, AccessOutcome, NullLog};
pub use hierarchy::CacheHierarchy;

use crate::common::error::ConfigError;
use crate::config::{CacheConfig, CacheLevelId};

/// Cache line entry: tag, validity, and the logical time of last use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// High-order part of the block address.
    pub tag: usize,
    /// Whether the line holds a block.
    pub valid: bool,
    /// Logical clock value of the last install or hit; 0 if never used.
    pub last_used: u64,
}

/// One level of a set-associative cache.
///
/// Lines are stored flat, row-major: slot `s` of row `r` lives at
/// `r * assoc + s`. Geometry is derived entirely from the [`CacheConfig`].
#[derive(Debug, Clone)]
pub struct CacheLevel {
    id: CacheLevelId,
    config: CacheConfig,
    rows: usize,
    lines: Vec<CacheLine>,
}

impl CacheLevel {
    /// Creates an empty cache level.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any dimension is zero or the level has no rows.
    pub fn new(id: CacheLevelId, config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate(id)?;
        let rows = config.rows();
        Ok(Self {
            id,
            config: *config,
            rows,
            lines: vec![CacheLine::default(); rows * config.assoc],
        })
    }

    /// Level identity.
    pub const fn id(&self) -> CacheLevelId {
        self.id
    }

    /// Geometry this level was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slots per row.
    pub const fn assoc(&self) -> usize {
        self.config.assoc
    }

    /// Splits an address into `(row, tag)` for this level.
    #[inline]
    pub const fn locate(&self, addr: usize) -> (usize, usize) {
        let block = addr / self.config.block_size;
        (block % self.rows, block / self.rows)
    }

    /// Lines of one row, in slot order.
    pub fn row(&self, row: usize) -> &[CacheLine] {
        let base = row * self.config.assoc;
        &self.lines[base..base + self.config.assoc]
    }

    fn row_mut(&mut self, row: usize) -> &mut [CacheLine] {
        let base = row * self.config.assoc;
        &mut self.lines[base..base + self.config.assoc]
    }

    /// Finds the first valid slot in `row` holding `tag`.
    pub fn lookup(&self, row: usize, tag: usize) -> Option<usize> {
        self.row(row)
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }

    /// Checks if the level holds the block containing `addr`.
    pub fn contains(&self, addr: usize) -> bool {
        let (row, tag) = self.locate(addr);
        self.lookup(row, tag).is_some()
    }

    /// Marks a slot as used at logical time `now`.
    pub fn touch(&mut self, row: usize, slot: usize, now: u64) {
        self.row_mut(row)[slot].last_used = now;
    }

    /// Installs `tag` into `row`, replacing the LRU victim.
    ///
    /// # Returns
    ///
    /// The slot that received the block.
    pub fn install(&mut self, row: usize, tag: usize, now: u64) -> usize {
        let slot = lru::select_victim(self.row(row));
        tracing::trace!(level = %self.id, row, slot, tag, now, "cache install");
        self.row_mut(row)[slot] = CacheLine {
            tag,
            valid: true,
            last_used: now,
        };
        slot
    }

    /// Invalidates every line and clears recency state.
    pub fn reset(&mut self) {
        self.lines.fill(CacheLine::default());
    }
}
