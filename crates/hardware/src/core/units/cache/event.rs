//! Cache access events.
//!
//! Every load or store resolved by the [`CacheHierarchy`](super::CacheHierarchy)
//! produces one event per level it touched, in the order the levels were
//! consulted. Events are handed to an [`AccessLog`] and never retained by the
//! cache itself.

use std::fmt;

use serde::Serialize;

use crate::config::CacheLevelId;

/// Classification of one access at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessOutcome {
    /// Load found a valid line with a matching tag.
    Hit,
    /// Load found no matching line; the block was installed.
    Miss,
    /// Store written through to this level; no lookup was made.
    Store,
}

impl AccessOutcome {
    /// Status text used in the access log (`HIT`, `MISS`, `SW`).
    pub const fn status(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Store => "SW",
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// One classified memory access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// Level that classified the access.
    pub level: CacheLevelId,
    /// Hit, miss, or store.
    pub outcome: AccessOutcome,
    /// Program counter of the `lw`/`sw` instruction.
    pub pc: u16,
    /// Effective memory address, already reduced modulo memory size.
    pub addr: u16,
    /// Row (set) of `level` the address maps to.
    pub row: usize,
}

impl AccessEvent {
    /// Creates an event.
    pub const fn new(
        level: CacheLevelId,
        outcome: AccessOutcome,
        pc: u16,
        addr: u16,
        row: usize,
    ) -> Self {
        Self {
            level,
            outcome,
            pc,
            addr,
            row,
        }
    }
}

/// Receiver of access events, called synchronously in execution order.
pub trait AccessLog {
    /// Records one event.
    fn record(&mut self, event: &AccessEvent);
}

impl AccessLog for Vec<AccessEvent> {
    fn record(&mut self, event: &AccessEvent) {
        self.push(*event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl AccessLog for NullLog {
    fn record(&mut self, _event: &AccessEvent) {}
}

impl<L: AccessLog + ?Sized> AccessLog for &mut L {
    fn record(&mut self, event: &AccessEvent) {
        (**self).record(event);
    }
}
