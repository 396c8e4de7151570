//! Built roster: days → duty buckets → people.
//!
//! Storage is keyed and unordered; display order is recomputed on read via
//! [`DayResult::sorted`], so changing the order policy never touches what
//! was built.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{DutyKey, compare_keys, display_label, is_numbered_duty};

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEntry {
    pub name: String,
    pub highlighted: bool,
    /// Source row in the grid; defines the order within a bucket.
    pub row: usize,
}

/// Everyone holding one canonical duty on one day.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyBucket {
    key: DutyKey,
    original_keys: Vec<String>,
    entries: Vec<PersonEntry>,
}

impl DutyBucket {
    pub(crate) fn new(key: DutyKey, raw: String) -> Self {
        Self {
            key,
            original_keys: vec![raw],
            entries: Vec::new(),
        }
    }

    /// Record another raw spelling; duplicates are ignored.
    pub(crate) fn absorb(&mut self, raw: &str) {
        if !self.original_keys.iter().any(|k| k == raw) {
            self.original_keys.push(raw.to_string());
        }
    }

    pub(crate) fn push(&mut self, entry: PersonEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn sort_entries(&mut self) {
        self.entries.sort_by_key(|e| e.row);
    }

    pub fn key(&self) -> &DutyKey {
        &self.key
    }

    /// Raw spellings that normalized to this key, in first-seen order.
    pub fn original_keys(&self) -> &[String] {
        &self.original_keys
    }

    pub fn entries(&self) -> &[PersonEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn label(&self) -> Cow<'_, str> {
        display_label(self.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Duty buckets for a single day column.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    day: u32,
    column: usize,
    weekday: Option<String>,
    buckets: FxHashMap<DutyKey, DutyBucket>,
}

impl DayResult {
    pub(crate) fn new(day: u32, column: usize, weekday: Option<String>) -> Self {
        Self {
            day,
            column,
            weekday,
            buckets: FxHashMap::default(),
        }
    }

    pub(crate) fn bucket_for(&mut self, key: DutyKey, raw: &str) -> &mut DutyBucket {
        self.buckets
            .entry(key)
            .and_modify(|b| b.absorb(raw))
            .or_insert_with_key(|key| DutyBucket::new(key.clone(), raw.to_string()))
    }

    pub(crate) fn buckets_mut(&mut self) -> impl Iterator<Item = &mut DutyBucket> {
        self.buckets.values_mut()
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Grid column the day was read from.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn weekday(&self) -> Option<&str> {
        self.weekday.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&DutyBucket> {
        self.buckets.get(key)
    }

    /// Buckets in storage order (unspecified).
    pub fn buckets(&self) -> impl Iterator<Item = &DutyBucket> {
        self.buckets.values()
    }

    /// Buckets in display order.
    pub fn sorted(&self) -> Vec<&DutyBucket> {
        let mut out: Vec<&DutyBucket> = self.buckets.values().collect();
        out.sort_by(|a, b| compare_keys(a.key.as_str(), b.key.as_str()));
        out
    }

    /// How many buckets belong to the numbered posts (`1`..`16`).
    ///
    /// Those always lead the display order, so a renderer can put a separator
    /// after the first `numbered_count()` buckets of [`sorted`](Self::sorted).
    pub fn numbered_count(&self) -> usize {
        self.buckets
            .keys()
            .filter(|k| is_numbered_duty(k.as_str()))
            .count()
    }

    /// Number of people assigned on this day.
    pub fn assigned(&self) -> usize {
        self.buckets.values().map(DutyBucket::len).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Per-day results, keyed by day number. Iterates in ascending day order.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterResult {
    days: BTreeMap<u32, DayResult>,
}

impl RosterResult {
    /// Insert a day, returning the day it replaced.
    pub(crate) fn insert(&mut self, day: DayResult) -> Option<DayResult> {
        self.days.insert(day.day, day)
    }

    pub fn get(&self, day: u32) -> Option<&DayResult> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayResult> {
        self.days.values()
    }

    pub fn day_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl IntoIterator for RosterResult {
    type Item = (u32, DayResult);
    type IntoIter = std::collections::btree_map::IntoIter<u32, DayResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'a> IntoIterator for &'a RosterResult {
    type Item = (&'a u32, &'a DayResult);
    type IntoIter = std::collections::btree_map::Iter<'a, u32, DayResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn entry(name: &str, row: usize) -> PersonEntry {
        PersonEntry {
            name: name.to_string(),
            highlighted: false,
            row,
        }
    }

    #[test]
    fn bucket_dedupes_spellings_in_first_seen_order() {
        let mut day = DayResult::new(3, 4, None);
        day.bucket_for(normalize("OV"), "OV");
        day.bucket_for(normalize("W"), "W");
        day.bucket_for(normalize("OV"), "OV");
        day.bucket_for(normalize("v"), "v");
        let off = day.get("OFF").unwrap();
        assert_eq!(off.original_keys(), &["OV", "W", "v"]);
        assert_eq!(day.len(), 1);
    }

    #[test]
    fn entries_sort_by_row() {
        let mut bucket = DutyBucket::new(normalize("1"), "1".into());
        bucket.push(entry("c", 9));
        bucket.push(entry("a", 2));
        bucket.push(entry("b", 5));
        bucket.sort_entries();
        assert_eq!(bucket.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorted_view_and_numbered_count() {
        let mut day = DayResult::new(1, 2, Some("Mon".into()));
        for raw in ["OFF", "2", "zz", "1", "C", "01"] {
            day.bucket_for(normalize(raw), raw);
        }
        let keys: Vec<_> = day.sorted().iter().map(|b| b.key().as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "C", "OFF", "01", "ZZ"]);
        assert_eq!(day.numbered_count(), 2);
        assert_eq!(day.weekday(), Some("Mon"));
    }
}
