//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Machine dimensions and instruction field layout.
//! 2. **Error Handling:** Decode, configuration, load, and simulation errors.
//! 3. **Register Management:** The eight-entry register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEM_SIZE, NUM_REGS};
pub use error::{ConfigError, DecodeError, Error, LoadError, SimError};
pub use reg::RegisterFile;
