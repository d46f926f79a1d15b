//! Simulation statistics collection and reporting.
//!
//! This module tracks what the simulator observed during a run. It provides:
//! 1. **Instruction counts:** Total executed and a breakdown by class (ALU, load, store, control).
//! 2. **Cache hierarchy:** Hit, miss, and store counts per level, with hit rates.
//! 3. **Reporting:** A plain-text report via `Display` and a serializable form.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::config::CacheLevelId;
use crate::core::units::cache::{AccessEvent, AccessOutcome};
use crate::isa::Instruction;

/// Access counters for one cache level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Loads that hit.
    pub hits: u64,
    /// Loads that missed.
    pub misses: u64,
    /// Stores written through.
    pub stores: u64,
}

impl LevelStats {
    /// Counts one event.
    pub const fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::Store => self.stores += 1,
        }
    }

    /// Number of loads that reached this level.
    pub const fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, or `None` if the level saw no loads.
    pub fn hit_rate(&self) -> Option<f64> {
        let lookups = self.lookups();
        (lookups > 0).then(|| self.hits as f64 / lookups as f64)
    }
}

/// Simulation statistics for one run.
#[derive(Debug, Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Instructions executed, including the halting jump.
    pub instructions: u64,
    /// Register-register ALU, `addi`, and `slti` instructions.
    pub inst_alu: u64,
    /// `lw` instructions.
    pub inst_load: u64,
    /// `sw` instructions.
    pub inst_store: u64,
    /// `j`, `jal`, `jr`, and `jeq` instructions.
    pub inst_control: u64,
    /// L1 cache counters.
    pub l1: LevelStats,
    /// L2 cache counters; all zero when no L2 is configured.
    pub l2: LevelStats,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            l1: LevelStats::default(),
            l2: LevelStats::default(),
        }
    }
}

impl SimStats {
    /// Counts one executed instruction.
    pub const fn record_instruction(&mut self, inst: &Instruction) {
        self.instructions += 1;
        match inst {
            Instruction::Alu { .. } | Instruction::Addi { .. } | Instruction::Slti { .. } => {
                self.inst_alu += 1;
            }
            Instruction::Lw { .. } => self.inst_load += 1,
            Instruction::Sw { .. } => self.inst_store += 1,
            Instruction::Jr { .. }
            | Instruction::J { .. }
            | Instruction::Jal { .. }
            | Instruction::Jeq { .. } => self.inst_control += 1,
        }
    }

    /// Counts one cache event against its level.
    pub const fn record_event(&mut self, event: &AccessEvent) {
        self.level_mut(event.level).record(event.outcome);
    }

    /// Counters for a level.
    pub const fn level(&self, level: CacheLevelId) -> &LevelStats {
        match level {
            CacheLevelId::L1 => &self.l1,
            CacheLevelId::L2 => &self.l2,
        }
    }

    const fn level_mut(&mut self, level: CacheLevelId) -> &mut LevelStats {
        match level {
            CacheLevelId::L1 => &mut self.l1,
            CacheLevelId::L2 => &mut self.l2,
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "==========================================================")?;
        writeln!(f, "E20 CACHE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions)?;
        writeln!(f, "  inst.alu               {}", self.inst_alu)?;
        writeln!(f, "  inst.load              {}", self.inst_load)?;
        writeln!(f, "  inst.store             {}", self.inst_store)?;
        writeln!(f, "  inst.control           {}", self.inst_control)?;
        writeln!(f, "----------------------------------------------------------")?;
        for (name, level) in [("l1", &self.l1), ("l2", &self.l2)] {
            if level.lookups() == 0 && level.stores == 0 {
                continue;
            }
            writeln!(f, "{name}.hits                  {}", level.hits)?;
            writeln!(f, "{name}.misses                {}", level.misses)?;
            writeln!(f, "{name}.stores                {}", level.stores)?;
            if let Some(rate) = level.hit_rate() {
                writeln!(f, "{name}.hit_rate              {:.2}%", rate * 100.0)?;
            }
        }
        write!(f, "==========================================================")
    }
}
