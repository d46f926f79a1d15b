//! Configuration system for the E20 cache simulator.
//!
//! This module defines the structures used to parameterize the cache model. It provides:
//! 1. **Level identity:** [`CacheLevelId`] naming the L1 and optional L2 caches.
//! 2. **Geometry:** [`CacheConfig`] (size, associativity, block size) and its derived row count.
//! 3. **Hierarchy:** [`CacheHierarchyConfig`], parsed from the `size,assoc,block[,size,assoc,block]`
//!    command-line form or deserialized from JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{CacheField, ConfigError};

/// Identifies a level of the cache hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CacheLevelId {
    /// First-level cache, always present.
    L1,
    /// Optional second-level cache.
    L2,
}

impl CacheLevelId {
    /// Log name of the level (`"L1"` or `"L2"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry of one cache level, measured in memory words.
///
/// # Examples
///
/// ```
/// use e20_core::config::CacheConfig;
///
/// let l1 = CacheConfig::new(8, 2, 2);
/// assert_eq!(l1.rows(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in words, excluding metadata.
    pub size: usize,
    /// Number of slots per row.
    #[serde(alias = "associativity")]
    pub assoc: usize,
    /// Words per block.
    #[serde(alias = "blocksize")]
    pub block_size: usize,
}

impl CacheConfig {
    /// Creates a new geometry. No validation is performed; see [`CacheConfig::validate`].
    pub const fn new(size: usize, assoc: usize, block_size: usize) -> Self {
        Self {
            size,
            assoc,
            block_size,
        }
    }

    /// Number of rows (sets): `(size / block_size) / assoc`.
    ///
    /// Returns 0 for a degenerate geometry instead of dividing by zero.
    pub const fn rows(&self) -> usize {
        if self.block_size == 0 || self.assoc == 0 {
            0
        } else {
            (self.size / self.block_size) / self.assoc
        }
    }

    /// Checks that every field is positive and that the level has at least one row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroField`] or [`ConfigError::NoRows`].
    pub fn validate(&self, level: CacheLevelId) -> Result<(), ConfigError> {
        let zero = if self.size == 0 {
            Some(CacheField::Size)
        } else if self.assoc == 0 {
            Some(CacheField::Associativity)
        } else if self.block_size == 0 {
            Some(CacheField::BlockSize)
        } else {
            None
        };
        if let Some(field) = zero {
            return Err(ConfigError::ZeroField { level, field });
        }
        if self.rows() == 0 {
            return Err(ConfigError::NoRows { level });
        }
        Ok(())
    }
}

/// Cache hierarchy configuration: a mandatory L1 and an optional L2.
///
/// # Examples
///
/// Parsing the command-line form:
///
/// ```
/// use e20_core::config::{CacheConfig, CacheHierarchyConfig};
///
/// let one: CacheHierarchyConfig = "4,1,1".parse().unwrap();
/// assert_eq!(one.l1, CacheConfig::new(4, 1, 1));
/// assert!(one.l2.is_none());
///
/// let two: CacheHierarchyConfig = "8,2,2,32,4,4".parse().unwrap();
/// assert_eq!(two.l2, Some(CacheConfig::new(32, 4, 4)));
///
/// assert!("8,2".parse::<CacheHierarchyConfig>().is_err());
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use e20_core::config::CacheHierarchyConfig;
///
/// let json = r#"{ "l1": { "size": 16, "assoc": 4, "block_size": 1 }, "l2": null }"#;
/// let config: CacheHierarchyConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.l1.rows(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHierarchyConfig {
    /// First-level cache.
    pub l1: CacheConfig,
    /// Second-level cache, if configured.
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl CacheHierarchyConfig {
    /// Single-level hierarchy.
    pub const fn single(l1: CacheConfig) -> Self {
        Self { l1, l2: None }
    }

    /// Two-level hierarchy.
    pub const fn two_level(l1: CacheConfig, l2: CacheConfig) -> Self {
        Self { l1, l2: Some(l2) }
    }

    /// Validates every configured level.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, L1 before L2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.l1.validate(CacheLevelId::L1)?;
        if let Some(l2) = &self.l2 {
            l2.validate(CacheLevelId::L2)?;
        }
        Ok(())
    }

    /// Configured levels in lookup order.
    pub fn levels(&self) -> impl Iterator<Item = (CacheLevelId, &CacheConfig)> {
        std::iter::once((CacheLevelId::L1, &self.l1))
            .chain(self.l2.iter().map(|l2| (CacheLevelId::L2, l2)))
    }
}

impl FromStr for CacheHierarchyConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let config = match parts.as_slice() {
            &[size, assoc, block] => Self::single(CacheConfig::new(size, assoc, block)),
            &[s1, a1, b1, s2, a2, b2] => {
                Self::two_level(CacheConfig::new(s1, a1, b1), CacheConfig::new(s2, a2, b2))
            }
            other => return Err(ConfigError::FieldCount(other.len())),
        };
        config.validate()?;
        Ok(config)
    }
}
