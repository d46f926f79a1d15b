//! Core processor implementation.
//!
//! This module contains the execution engine and the functional units it
//! drives. The only unit with state of its own is the cache model.

/// CPU core implementation and the fetch/decode/execute loop.
pub mod cpu;

/// Functional units (cache hierarchy).
pub mod units;

pub use self::cpu::{Cpu, RunState};
