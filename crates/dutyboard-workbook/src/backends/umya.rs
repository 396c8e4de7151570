#![cfg(feature = "umya")]

use std::io::Cursor;
use std::path::Path;

use dutyboard_common::{CellValue, HighlightMap, HighlightMarker, RawGrid};
use umya_spreadsheet::{Cell, CellRawValue, Spreadsheet, reader::xlsx};

use crate::traits::{RosterSource, SheetGrid};
use crate::WorkbookError;

/// xlsx backend that reads values and fill colors.
pub struct UmyaAdapter {
    workbook: Spreadsheet,
}

impl UmyaAdapter {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, WorkbookError> {
        // Full read: every sheet is deserialized up front.
        let workbook = xlsx::read(path.as_ref())?;
        Ok(Self { workbook })
    }

    pub fn open_bytes(data: Vec<u8>) -> Result<Self, WorkbookError> {
        let workbook = xlsx::read_reader(Cursor::new(data), true)?;
        Ok(Self { workbook })
    }

    fn convert_cell_value(cell: &Cell) -> CellValue {
        match cell.get_cell_value().get_raw_value() {
            CellRawValue::Numeric(n) => CellValue::Number(*n),
            CellRawValue::Bool(b) => CellValue::Boolean(*b),
            CellRawValue::String(s) => CellValue::Text(s.to_string()),
            CellRawValue::RichText(rt) => CellValue::Text(rt.get_text().to_string()),
            CellRawValue::Lazy(s) => {
                let txt = s.as_ref();
                if let Ok(n) = txt.parse::<f64>() {
                    CellValue::Number(n)
                } else if txt.eq_ignore_ascii_case("TRUE") {
                    CellValue::Boolean(true)
                } else if txt.eq_ignore_ascii_case("FALSE") {
                    CellValue::Boolean(false)
                } else {
                    CellValue::Text(txt.to_string())
                }
            }
            // Error cells carry no duty.
            CellRawValue::Error(_) => CellValue::Empty,
            CellRawValue::Empty => CellValue::Empty,
        }
    }

    /// Pattern-fill foreground color as stored (ARGB hex), if any.
    fn fill_color(cell: &Cell) -> Option<&str> {
        cell.get_style()
            .get_background_color()
            .map(|c| c.get_argb())
            .filter(|argb| !argb.is_empty())
    }
}

impl RosterSource for UmyaAdapter {
    fn backend(&self) -> &'static str {
        "umya"
    }

    fn supports_highlights(&self) -> bool {
        true
    }

    fn sheet_names(&self) -> Vec<String> {
        self.workbook
            .get_sheet_collection()
            .iter()
            .map(|ws| ws.get_name().to_string())
            .collect()
    }

    fn read_sheet(
        &mut self,
        sheet: &str,
        marker: &HighlightMarker,
    ) -> Result<SheetGrid, WorkbookError> {
        let ws = self
            .workbook
            .get_sheet_by_name(sheet)
            .ok_or_else(|| WorkbookError::SheetNotFound(sheet.to_string()))?;

        let mut values = Vec::new();
        let mut highlights = HighlightMap::new();
        for cell in ws.get_cell_collection() {
            let coord = cell.get_coordinate();
            let col = *coord.get_col_num();
            let row = *coord.get_row_num();
            if row == 0 || col == 0 {
                continue;
            }
            if Self::fill_color(cell).is_some_and(|argb| marker.matches(argb)) {
                highlights.insert((row - 1) as usize, (col - 1) as usize);
            }
            let value = Self::convert_cell_value(cell);
            if !value.is_empty() {
                values.push(((row, col), value));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sheet,
            cells = values.len(),
            highlighted = highlights.len(),
            "read umya sheet"
        );

        Ok(SheetGrid {
            name: sheet.to_string(),
            grid: RawGrid::from_excel_cells(values),
            highlights,
        })
    }
}
