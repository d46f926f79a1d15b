//! Machine components outside the core.
//!
//! The E20 has no devices or bus; the only component here is the flat main
//! memory the core fetches from and loads/stores to.

/// Flat 8192-word main memory.
pub mod memory;

pub use memory::Memory;
