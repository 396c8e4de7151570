#![cfg(feature = "calamine")]

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use dutyboard_common::{CellValue, HighlightMap, HighlightMarker, RawGrid};

use crate::traits::{RosterSource, SheetGrid};
use crate::WorkbookError;

enum Book {
    File(Sheets<BufReader<File>>),
    Bytes(Sheets<Cursor<Vec<u8>>>),
}

/// Value-only backend for xlsx, xls, xlsb and ods.
///
/// Cell styles are not decoded, so no cell is ever reported as highlighted.
pub struct CalamineAdapter {
    workbook: Book,
}

impl CalamineAdapter {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, WorkbookError> {
        let workbook = open_workbook_auto(path.as_ref())?;
        Ok(Self {
            workbook: Book::File(workbook),
        })
    }

    pub fn open_bytes(data: Vec<u8>) -> Result<Self, WorkbookError> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(data))?;
        Ok(Self {
            workbook: Book::Bytes(workbook),
        })
    }

    fn convert_value(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(_) => CellValue::Empty,
            // Keep the serial number; roster cells are not dates.
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }

    fn range_to_grid(range: &Range<Data>) -> RawGrid {
        let (start_row, start_col) = range.start().unwrap_or_default();
        let cells = range.used_cells().filter_map(|(row, col, val)| {
            let value = Self::convert_value(val);
            if value.is_empty() {
                return None;
            }
            // calamine is 0-based relative to the range start; grid cells are 1-based.
            let excel_row = row as u32 + start_row + 1;
            let excel_col = col as u32 + start_col + 1;
            Some(((excel_row, excel_col), value))
        });
        RawGrid::from_excel_cells(cells)
    }
}

impl RosterSource for CalamineAdapter {
    fn backend(&self) -> &'static str {
        "calamine"
    }

    fn supports_highlights(&self) -> bool {
        false
    }

    fn sheet_names(&self) -> Vec<String> {
        match &self.workbook {
            Book::File(wb) => wb.sheet_names(),
            Book::Bytes(wb) => wb.sheet_names(),
        }
    }

    fn read_sheet(
        &mut self,
        sheet: &str,
        _marker: &HighlightMarker,
    ) -> Result<SheetGrid, WorkbookError> {
        if !self.sheet_names().iter().any(|n| n == sheet) {
            return Err(WorkbookError::SheetNotFound(sheet.to_string()));
        }
        let range = match &mut self.workbook {
            Book::File(wb) => wb.worksheet_range(sheet)?,
            Book::Bytes(wb) => wb.worksheet_range(sheet)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sheet,
            rows = range.height(),
            cols = range.width(),
            "read calamine sheet"
        );

        Ok(SheetGrid {
            name: sheet.to_string(),
            grid: Self::range_to_grid(&range),
            highlights: HighlightMap::new(),
        })
    }
}
