//! Owned, display-ordered snapshot of a [`RosterResult`] for renderers and JSON output.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{DayResult, DutyBucket, PersonEntry, RosterResult};

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub days: Vec<DayView>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub day: u32,
    pub weekday: Option<String>,
    /// Leading duties that are numbered posts.
    pub numbered: usize,
    pub duties: Vec<DutyView>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyView {
    pub key: String,
    pub label: String,
    pub original_keys: Vec<String>,
    pub entries: Vec<EntryView>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub name: String,
    pub highlighted: bool,
}

impl From<&PersonEntry> for EntryView {
    fn from(e: &PersonEntry) -> Self {
        Self {
            name: e.name.clone(),
            highlighted: e.highlighted,
        }
    }
}

impl From<&DutyBucket> for DutyView {
    fn from(b: &DutyBucket) -> Self {
        Self {
            key: b.key().to_string(),
            label: b.label().into_owned(),
            original_keys: b.original_keys().to_vec(),
            entries: b.entries().iter().map(EntryView::from).collect(),
        }
    }
}

impl From<&DayResult> for DayView {
    fn from(d: &DayResult) -> Self {
        Self {
            day: d.day(),
            weekday: d.weekday().map(str::to_string),
            numbered: d.numbered_count(),
            duties: d.sorted().into_iter().map(DutyView::from).collect(),
        }
    }
}

impl From<&RosterResult> for RosterView {
    fn from(r: &RosterResult) -> Self {
        Self {
            days: r.days().map(DayView::from).collect(),
        }
    }
}

impl RosterView {
    pub fn day(&self, day: u32) -> Option<&DayView> {
        self.days.iter().find(|d| d.day == day)
    }
}

impl DayView {
    /// True when a separator belongs after the duty at `index`.
    pub fn ends_numbered_section(&self, index: usize) -> bool {
        self.numbered > 0 && index + 1 == self.numbered
    }
}
