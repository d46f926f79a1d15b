//! E20 cache simulator library.
//!
//! This crate executes E20 machine code over a flat 8192-word memory while a
//! configurable one- or two-level set-associative cache classifies every data
//! access as a hit, miss, or write-through store:
//! 1. **Core:** Single-cycle fetch/decode/execute engine with eight 16-bit registers.
//! 2. **Cache:** L1 and optional L2 with LRU replacement and write-through stores.
//! 3. **ISA:** Decoding and disassembly of the eight E20 instruction formats.
//! 4. **Simulation:** Machine-code loader, configuration, and statistics collection.
//!
//! # Usage
//!
//! ```
//! use e20_core::config::CacheHierarchyConfig;
//! use e20_core::core::units::cache::AccessEvent;
//! use e20_core::sim::load_machine_code;
//! use e20_core::Cpu;
//!
//! // lw $1,0($0) twice, then halt.
//! let program = "\
//! ram[0] = 16'b1000000010000000;
//! ram[1] = 16'b1000000010000000;
//! ram[2] = 16'b0100000000000010;
//! ";
//! let memory = load_machine_code(program).unwrap();
//! let config: CacheHierarchyConfig = "4,1,1".parse().unwrap();
//! let mut cpu = Cpu::with_config(memory, &config).unwrap();
//!
//! let mut events: Vec<AccessEvent> = Vec::new();
//! cpu.run(&mut events).unwrap();
//! assert_eq!(events.len(), 2);
//! assert_eq!(cpu.stats.l1.misses, 1);
//! assert_eq!(cpu.stats.l1.hits, 1);
//! ```

/// Common types and constants (constants, errors, registers).
pub mod common;
/// Cache configuration and parsing.
pub mod config;
/// CPU core (execution engine and cache hierarchy).
pub mod core;
/// Instruction set (fields, decode, disassembly).
pub mod isa;
/// Machine-code loader.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; parse from `"size,assoc,block[,size,assoc,block]"`.
pub use crate::config::CacheHierarchyConfig;
/// Main CPU type; holds registers, memory, caches, and stats.
pub use crate::core::Cpu;
/// Crate-wide error type.
pub use crate::common::Error;
