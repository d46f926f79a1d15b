//! Simulation utilities and program loading.
//!
//! Provides utilities for loading machine code into memory ahead of
//! simulation.

pub mod loader;

pub use loader::{load_file, load_machine_code};
