//! Two-level write-through cache hierarchy.
//!
//! Resolves loads and stores against an L1 and an optional L2:
//!
//! - **Load:** L1 lookup. On a hit the line is refreshed and resolution stops.
//!   On a miss the L2 (if any) is looked up, refreshed on a hit or filled on a
//!   miss, and the block is then installed into L1.
//! - **Store:** write-through. The block is installed into L1 and then into L2
//!   without any lookup, so it always becomes most recently used at both levels,
//!   even if it was already resident.
//!
//! Both levels share the logical clock supplied by the caller.

use super::event::{AccessEvent, AccessOutcome};
use super::CacheLevel;
use crate::common::error::ConfigError;
use crate::config::{CacheHierarchyConfig, CacheLevelId};

/// L1 cache with an optional L2 chained after it.
#[derive(Debug, Clone)]
pub struct CacheHierarchy {
    l1: CacheLevel,
    l2: Option<CacheLevel>,
}

impl CacheHierarchy {
    /// Builds empty caches from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either level's geometry is degenerate.
    pub fn new(config: &CacheHierarchyConfig) -> Result<Self, ConfigError> {
        let l1 = CacheLevel::new(CacheLevelId::L1, &config.l1)?;
        let l2 = config
            .l2
            .as_ref()
            .map(|l2| CacheLevel::new(CacheLevelId::L2, l2))
            .transpose()?;
        Ok(Self { l1, l2 })
    }

    /// The first-level cache.
    pub const fn l1(&self) -> &CacheLevel {
        &self.l1
    }

    /// The second-level cache, if configured.
    pub const fn l2(&self) -> Option<&CacheLevel> {
        self.l2.as_ref()
    }

    /// Configured levels in lookup order.
    pub fn levels(&self) -> impl Iterator<Item = &CacheLevel> {
        std::iter::once(&self.l1).chain(self.l2.iter())
    }

    /// Resolves a load from `addr` issued by the instruction at `pc`.
    ///
    /// # Returns
    ///
    /// One event per level consulted: `L1 HIT`, or `L1 MISS` followed by
    /// `L2 HIT`/`L2 MISS` when an L2 is configured.
    pub fn load(&mut self, addr: u16, pc: u16, now: u64) -> Vec<AccessEvent> {
        let mut events = Vec::with_capacity(2);
        let (row, tag) = self.l1.locate(addr as usize);

        if let Some(slot) = self.l1.lookup(row, tag) {
            self.l1.touch(row, slot, now);
            events.push(AccessEvent::new(CacheLevelId::L1, AccessOutcome::Hit, pc, addr, row));
            return events;
        }
        events.push(AccessEvent::new(CacheLevelId::L1, AccessOutcome::Miss, pc, addr, row));

        if let Some(l2) = self.l2.as_mut() {
            let (l2_row, l2_tag) = l2.locate(addr as usize);
            let outcome = if let Some(slot) = l2.lookup(l2_row, l2_tag) {
                l2.touch(l2_row, slot, now);
                AccessOutcome::Hit
            } else {
                let _ = l2.install(l2_row, l2_tag, now);
                AccessOutcome::Miss
            };
            events.push(AccessEvent::new(CacheLevelId::L2, outcome, pc, addr, l2_row));
        }

        let _ = self.l1.install(row, tag, now);
        events
    }

    /// Resolves a store to `addr` issued by the instruction at `pc`.
    ///
    /// # Returns
    ///
    /// One `SW` event per configured level, L1 first.
    pub fn store(&mut self, addr: u16, pc: u16, now: u64) -> Vec<AccessEvent> {
        self.levels_mut()
            .map(|level| {
                let (row, tag) = level.locate(addr as usize);
                let _ = level.install(row, tag, now);
                AccessEvent::new(level.id(), AccessOutcome::Store, pc, addr, row)
            })
            .collect()
    }

    /// Invalidates every level.
    pub fn reset(&mut self) {
        self.levels_mut().for_each(CacheLevel::reset);
    }

    fn levels_mut(&mut self) -> impl Iterator<Item = &mut CacheLevel> {
        std::iter::once(&mut self.l1).chain(self.l2.iter_mut())
    }
}
