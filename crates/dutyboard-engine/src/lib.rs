//! Roster engine: turns a raw duty grid into per-day, display-ordered duty buckets.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! - [`normalize`] collapses a raw duty spelling into a canonical [`DutyKey`].
//! - [`priority`] / [`compare_keys`] rank canonical keys for display.
//! - [`RosterBuilder`] walks a [`RawGrid`](dutyboard_common::RawGrid) once and
//!   groups people under `(day, key)`.
//!
//! Nothing here fails: odd or missing cells are skipped, and the worst case is
//! an empty [`RosterResult`].

pub mod builder;
pub mod key;
pub mod label;
pub mod layout;
pub mod normalize;
pub mod order;
pub mod roster;
pub mod view;

pub use builder::{RosterBuilder, build};
pub use key::DutyKey;
pub use label::{CELL_DUTY_LABEL, display_label};
pub use layout::RosterLayout;
pub use normalize::{clean_code, normalize, normalize_cell};
pub use order::{DISPLAY_ORDER, DutyPriority, compare_keys, is_numbered_duty, priority};
pub use roster::{DayResult, DutyBucket, PersonEntry, RosterResult};
pub use view::{DayView, DutyView, EntryView, RosterView};

// Re-export for convenience
pub use dutyboard_common::{CellValue, HighlightLookup, HighlightMap, NoHighlights, RawGrid};
