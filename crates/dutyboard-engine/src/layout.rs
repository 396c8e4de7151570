use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where things live in a roster grid (0-based).
///
/// The defaults describe the usual sheet: day numbers across row 0, weekday
/// labels in row 1, one person per row from row 2 with the name in column 1,
/// and day columns starting at column 2.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLayout {
    pub day_row: usize,
    pub weekday_row: usize,
    pub first_person_row: usize,
    pub name_col: usize,
    pub first_day_col: usize,
}

impl RosterLayout {
    /// Day-of-month values accepted in the header row.
    pub const DAY_RANGE: RangeInclusive<i64> = 1..=31;

    /// Column of the weekday label for `day`.
    ///
    /// Sheets place day 1 in the first day column, so the label for day `d`
    /// sits `d - 1` columns to the right of it regardless of where the day
    /// header itself was found.
    pub fn weekday_col(&self, day: u32) -> usize {
        (day as usize + self.first_day_col).saturating_sub(1)
    }
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            day_row: 0,
            weekday_row: 1,
            first_person_row: 2,
            name_col: 1,
            first_day_col: 2,
        }
    }
}
