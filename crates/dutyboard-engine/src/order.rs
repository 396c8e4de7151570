//! Display order for canonical duty keys.

use std::cmp::Ordering;

/// Curated display sequence: numbered posts `1`..`16`, then the named duties.
pub const DISPLAY_ORDER: [&str; 29] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "D5",
    "DD", "DD12", "DB", "DC", "C", "P3", "EA", "E1", "N", "NN12", "OFF", "ST",
];

const NUMBERED_POSTS: usize = 16;

/// Sort key for a duty key.
///
/// Variant order is the tier: every curated key sorts before every other key.
/// Curated keys compare by their index in [`DISPLAY_ORDER`], the rest
/// alphabetically by their uppercased spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DutyPriority {
    Curated(usize),
    Other(String),
}

impl DutyPriority {
    /// `0` for curated keys, `1` for the rest.
    pub fn tier(&self) -> u8 {
        match self {
            DutyPriority::Curated(_) => 0,
            DutyPriority::Other(_) => 1,
        }
    }
}

pub fn priority(key: &str) -> DutyPriority {
    let upper = key.to_uppercase();
    match DISPLAY_ORDER.iter().position(|k| *k == upper) {
        Some(index) => DutyPriority::Curated(index),
        None => DutyPriority::Other(upper),
    }
}

pub fn compare_keys(a: &str, b: &str) -> Ordering {
    priority(a).cmp(&priority(b))
}

/// True for the numbered posts (`1`..`16`) that open the curated sequence.
pub fn is_numbered_duty(key: &str) -> bool {
    DISPLAY_ORDER[..NUMBERED_POSTS].contains(&key)
}
