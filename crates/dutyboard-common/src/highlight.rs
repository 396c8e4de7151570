//! Per-cell highlight lookup and the color marker that drives it.

use core::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Answers "is the cell at `(row, col)` highlighted?" for 0-based grid positions.
pub trait HighlightLookup {
    fn is_highlighted(&self, row: usize, col: usize) -> bool;
}

impl<F> HighlightLookup for F
where
    F: Fn(usize, usize) -> bool,
{
    fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self(row, col)
    }
}

/// Lookup that never reports a highlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlights;

impl HighlightLookup for NoHighlights {
    fn is_highlighted(&self, _row: usize, _col: usize) -> bool {
        false
    }
}

/// Set of highlighted grid positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    cells: FxHashSet<(usize, usize)>,
}

impl HighlightMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        self.cells.insert((row, col))
    }

    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        self.cells.remove(&(row, col))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl HighlightLookup for HighlightMap {
    fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

impl FromIterator<(usize, usize)> for HighlightMap {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Errors returned when parsing a [`HighlightMarker`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MarkerError {
    Length(usize),
    NotHex(String),
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::Length(n) => {
                write!(f, "marker must be 6 hex digits (RRGGBB), got {n} characters")
            }
            MarkerError::NotHex(s) => write!(f, "marker '{s}' is not hexadecimal"),
        }
    }
}

impl std::error::Error for MarkerError {}

/// RGB fill color that marks a highlighted assignment, stored as six uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightMarker([u8; 6]);

impl HighlightMarker {
    /// Orange fill (`FFC000`) used by roster sheets to flag an assignment.
    pub const ORANGE: Self = Self(*b"FFC000");

    pub fn parse(s: &str) -> Result<Self, MarkerError> {
        let s = s.trim().trim_start_matches('#');
        if s.len() != 6 {
            return Err(MarkerError::Length(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MarkerError::NotHex(s.to_string()));
        }
        let mut out = [0u8; 6];
        for (dst, b) in out.iter_mut().zip(s.bytes()) {
            *dst = b.to_ascii_uppercase();
        }
        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        // Built only from ASCII hex digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Compare against a color code as a backend reports it.
    ///
    /// Accepts `RRGGBB` or `AARRGGBB` (the alpha byte is ignored), with an
    /// optional leading `#`, case-insensitively.
    pub fn matches(&self, color: &str) -> bool {
        let color = color.trim().trim_start_matches('#');
        if !color.is_ascii() {
            return false;
        }
        let rgb = match color.len() {
            6 => color,
            8 => &color[2..],
            _ => return false,
        };
        rgb.eq_ignore_ascii_case(self.as_str())
    }
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::ORANGE
    }
}

impl fmt::Display for HighlightMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighlightMarker {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HighlightMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HighlightMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
