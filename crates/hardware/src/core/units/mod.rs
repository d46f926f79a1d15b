//! Functional units driven by the execution engine.
//!
//! The E20 has a single-cycle datapath with no pipeline, predictor, or MMU,
//! so the only modelled unit is the data cache hierarchy.

/// Cache hierarchy implementation (L1, optional L2) with LRU replacement.
pub mod cache;
