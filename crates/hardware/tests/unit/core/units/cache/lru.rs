//! # LRU Victim Selection Tests

use e20_core::core::units::cache::CacheLine;
use e20_core::core::units::cache::lru::select_victim;

fn line(tag: usize, last_used: u64) -> CacheLine {
    CacheLine {
        tag,
        valid: true,
        last_used,
    }
}

fn empty() -> CacheLine {
    CacheLine::default()
}

#[test]
fn direct_mapped_always_slot_zero() {
    assert_eq!(select_victim(&[empty()]), 0);
    assert_eq!(select_victim(&[line(3, 9)]), 0);
}

#[test]
fn invalid_slot_beats_valid() {
    assert_eq!(select_victim(&[line(1, 1), empty()]), 1);
    assert_eq!(select_victim(&[line(1, 1), empty(), line(2, 0)]), 1);
}

#[test]
fn last_invalid_slot_wins_in_empty_row() {
    assert_eq!(select_victim(&[empty(), empty(), empty(), empty()]), 3);
}

#[test]
fn least_recently_used_is_chosen() {
    assert_eq!(select_victim(&[line(0, 5), line(1, 2), line(2, 8)]), 1);
    assert_eq!(select_victim(&[line(0, 1), line(1, 2), line(2, 3)]), 0);
}

#[test]
fn equal_timestamps_keep_lowest_index() {
    assert_eq!(select_victim(&[line(0, 4), line(1, 4), line(2, 4)]), 0);
    assert_eq!(select_victim(&[line(0, 9), line(1, 4), line(2, 4)]), 1);
}
