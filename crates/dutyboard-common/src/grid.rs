//! Rectangular (possibly ragged) grid of raw cell values.
//!
//! Positions are 0-based `(row, col)` pairs. Backends that work in 1-based
//! spreadsheet coordinates go through [`RawGrid::from_excel_cells`], which
//! anchors spreadsheet cell `A1` at grid position `(0, 0)`.

use crate::CellValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static EMPTY: CellValue = CellValue::Empty;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
}

impl RawGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Build a dense grid from sparse 1-based `(row, col)` cells.
    ///
    /// Zero coordinates are ignored. Later duplicates overwrite earlier ones.
    pub fn from_excel_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = ((u32, u32), CellValue)>,
    {
        let mut grid = Self::new();
        for ((row, col), value) in cells {
            if row == 0 || col == 0 {
                continue;
            }
            grid.set((row - 1) as usize, (col - 1) as usize, value);
        }
        grid
    }

    /// Cell at `(row, col)`; anything outside the grid reads as empty.
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize_with(col + 1, CellValue::default);
        }
        r[col] = value;
    }

    pub fn row(&self, row: usize) -> &[CellValue] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.iter().all(CellValue::is_empty))
    }
}

impl<V: Into<CellValue>> FromIterator<Vec<V>> for RawGrid {
    fn from_iter<T: IntoIterator<Item = Vec<V>>>(iter: T) -> Self {
        Self::from_rows(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let grid: RawGrid = vec![vec![CellValue::Int(1)], vec![]].into_iter().collect();
        assert_eq!(grid.get(0, 0), &CellValue::Int(1));
        assert!(grid.get(0, 5).is_empty());
        assert!(grid.get(1, 0).is_empty());
        assert!(grid.get(9, 9).is_empty());
    }

    #[test]
    fn excel_cells_anchor_at_a1() {
        let grid = RawGrid::from_excel_cells(vec![
            ((1, 3), CellValue::Int(12)),
            ((3, 2), CellValue::from("Kim")),
            ((0, 4), CellValue::from("ignored")),
        ]);
        assert_eq!(grid.get(0, 2), &CellValue::Int(12));
        assert_eq!(grid.get(2, 1), &CellValue::from("Kim"));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 3);
        assert!(grid.get(1, 1).is_empty());
    }

    #[test]
    fn ragged_rows_report_widest_column() {
        let grid: RawGrid = vec![vec!["a"], vec!["a", "b", "c"], vec!["a", "b"]]
            .into_iter()
            .collect();
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.row(2).len(), 2);
        assert!(grid.row(7).is_empty());
    }
}
