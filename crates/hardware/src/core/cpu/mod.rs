//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, logical clock, and run state.
//! 2. **Memory:** Owns the flat main memory that instructions are fetched from.
//! 3. **Cache Model:** Drives the cache hierarchy on every load and store.
//! 4. **Statistics:** Counts instructions and cache outcomes as they happen.

/// Fetch/decode/execute loop.
pub mod execution;

use crate::common::error::ConfigError;
use crate::common::RegisterFile;
use crate::config::CacheHierarchyConfig;
use crate::core::units::cache::CacheHierarchy;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Whether the engine may execute further instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing.
    #[default]
    Running,
    /// A `j` to its own address was executed. Terminal.
    Halted,
}

/// Main CPU structure containing all machine state.
///
/// The engine exclusively owns registers, memory, the program counter, and the
/// logical clock. It lends the current clock value to the cache hierarchy on
/// each access; the hierarchy never sees memory or registers.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program Counter. Not wrapped on update; reduced modulo memory size on fetch.
    pub pc: u16,
    /// Main memory.
    pub memory: Memory,
    /// Cache hierarchy classifying every load and store.
    pub caches: CacheHierarchy,
    /// Logical clock, incremented once per executed instruction.
    pub clock: u64,
    /// Current run state.
    pub state: RunState,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU at reset state (`pc = 0`, all registers zero) over `memory`.
    pub fn new(memory: Memory, caches: CacheHierarchy) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            memory,
            caches,
            clock: 0,
            state: RunState::Running,
            stats: SimStats::default(),
        }
    }

    /// Creates a CPU with freshly built caches.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the cache geometry is degenerate.
    pub fn with_config(memory: Memory, config: &CacheHierarchyConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(memory, CacheHierarchy::new(config)?))
    }

    /// True once the self-jump halt has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }
}
