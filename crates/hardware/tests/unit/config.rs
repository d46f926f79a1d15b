//! # Configuration Tests
//!
//! Parsing of the `size,assoc,block[,size,assoc,block]` form, derived row
//! counts, and rejection of degenerate geometry.

use e20_core::common::error::{CacheField, ConfigError};
use e20_core::config::{CacheConfig, CacheHierarchyConfig, CacheLevelId};
use rstest::rstest;

#[rstest]
#[case(4, 1, 1, 4)]
#[case(8, 2, 2, 2)]
#[case(16, 4, 4, 1)]
#[case(64, 1, 8, 8)]
#[case(12, 2, 2, 3)]
fn rows_are_size_over_block_times_assoc(
    #[case] size: usize,
    #[case] assoc: usize,
    #[case] block: usize,
    #[case] rows: usize,
) {
    assert_eq!(CacheConfig::new(size, assoc, block).rows(), rows);
}

#[test]
fn rows_use_integer_division() {
    // 10 / 2 = 5 blocks, 5 / 2 = 2 rows; the leftover block is dropped.
    assert_eq!(CacheConfig::new(10, 2, 2).rows(), 2);
}

#[test]
fn parses_single_level() {
    let config: CacheHierarchyConfig = "4,1,1".parse().unwrap();
    assert_eq!(config, CacheHierarchyConfig::single(CacheConfig::new(4, 1, 1)));
}

#[test]
fn parses_two_levels() {
    let config: CacheHierarchyConfig = "8,2,2,32,4,4".parse().unwrap();
    assert_eq!(config.l1, CacheConfig::new(8, 2, 2));
    assert_eq!(config.l2, Some(CacheConfig::new(32, 4, 4)));
    let levels: Vec<_> = config.levels().map(|(id, _)| id).collect();
    assert_eq!(levels, vec![CacheLevelId::L1, CacheLevelId::L2]);
}

#[test]
fn tolerates_whitespace_around_values() {
    let config: CacheHierarchyConfig = " 4, 1 ,1".parse().unwrap();
    assert_eq!(config.l1, CacheConfig::new(4, 1, 1));
}

#[rstest]
#[case("4", 1)]
#[case("4,1", 2)]
#[case("4,1,1,4", 4)]
#[case("4,1,1,4,1", 5)]
#[case("4,1,1,4,1,1,4", 7)]
fn rejects_wrong_value_count(#[case] input: &str, #[case] count: usize) {
    assert_eq!(
        input.parse::<CacheHierarchyConfig>(),
        Err(ConfigError::FieldCount(count))
    );
}

#[rstest]
#[case("a,1,1", "a")]
#[case("4,-1,1", "-1")]
#[case("", "")]
#[case("4,1,", "")]
fn rejects_non_numbers(#[case] input: &str, #[case] bad: &str) {
    assert_eq!(
        input.parse::<CacheHierarchyConfig>(),
        Err(ConfigError::InvalidNumber(bad.to_string()))
    );
}

#[test]
fn rejects_zero_fields() {
    assert_eq!(
        "0,1,1".parse::<CacheHierarchyConfig>(),
        Err(ConfigError::ZeroField {
            level: CacheLevelId::L1,
            field: CacheField::Size
        })
    );
    assert_eq!(
        "4,1,1,8,0,1".parse::<CacheHierarchyConfig>(),
        Err(ConfigError::ZeroField {
            level: CacheLevelId::L2,
            field: CacheField::Associativity
        })
    );
}

#[test]
fn rejects_geometry_without_rows() {
    assert_eq!(
        "4,2,4".parse::<CacheHierarchyConfig>(),
        Err(ConfigError::NoRows {
            level: CacheLevelId::L1
        })
    );
}

#[test]
fn no_fixed_upper_bound_on_dimensions() {
    // Geometry is derived from the configuration alone.
    let config: CacheHierarchyConfig = "8192,16,64,65536,32,64".parse().unwrap();
    assert_eq!(config.l1.rows(), 8);
    assert_eq!(config.l2.unwrap().rows(), 32);
}

#[test]
fn deserializes_from_json() {
    let json = r#"{
        "l1": { "size": 8, "associativity": 2, "blocksize": 2 },
        "l2": { "size": 32, "assoc": 4, "block_size": 4 }
    }"#;
    let config: CacheHierarchyConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.l1, CacheConfig::new(8, 2, 2));
    assert_eq!(config.l2, Some(CacheConfig::new(32, 4, 4)));
    assert!(config.validate().is_ok());
}

#[test]
fn json_without_l2_is_single_level() {
    let config: CacheHierarchyConfig =
        serde_json::from_str(r#"{ "l1": { "size": 4, "assoc": 1, "block_size": 1 } }"#).unwrap();
    assert!(config.l2.is_none());
}
