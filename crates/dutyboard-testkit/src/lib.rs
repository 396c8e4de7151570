//! Writes small roster workbooks to a temp directory.
//!
//! Sheets follow the usual layout: day numbers in row 1 from column C,
//! weekday labels in row 2 under each day, one person per row from row 3
//! with the name in column B.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// ARGB fill the roster sheets use for highlighted cells.
pub const HIGHLIGHT_ARGB: &str = "FFFFC000";

#[derive(Debug, Clone)]
pub struct FixtureSheet {
    name: String,
    days: Vec<u32>,
    weekdays: Vec<String>,
    people: Vec<(String, Vec<String>)>,
    /// (person index, day index, argb)
    fills: Vec<(usize, usize, String)>,
}

impl FixtureSheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            days: Vec::new(),
            weekdays: Vec::new(),
            people: Vec::new(),
            fills: Vec::new(),
        }
    }

    pub fn days(mut self, days: &[u32]) -> Self {
        self.days = days.to_vec();
        self
    }

    pub fn weekdays(mut self, labels: &[&str]) -> Self {
        self.weekdays = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add a person; empty strings leave the cell blank.
    pub fn person(mut self, name: &str, codes: &[&str]) -> Self {
        self.people.push((
            name.to_string(),
            codes.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Highlight the duty cell of the `person`-th person on the `day`-th day column.
    pub fn highlight(self, person: usize, day: usize) -> Self {
        self.fill(person, day, HIGHLIGHT_ARGB)
    }

    pub fn fill(mut self, person: usize, day: usize, argb: &str) -> Self {
        self.fills.push((person, day, argb.to_string()));
        self
    }

    fn write_into(&self, ws: &mut umya_spreadsheet::Worksheet) {
        // umya uses (col, row), 1-based.
        for (i, day) in self.days.iter().enumerate() {
            ws.get_cell_mut((i as u32 + 3, 1)).set_value_number(*day as f64);
        }
        for (i, label) in self.weekdays.iter().enumerate() {
            ws.get_cell_mut((i as u32 + 3, 2)).set_value_string(label.clone());
        }
        for (p, (name, codes)) in self.people.iter().enumerate() {
            let row = p as u32 + 3;
            ws.get_cell_mut((2, row)).set_value_string(name.clone());
            for (d, code) in codes.iter().enumerate() {
                if code.is_empty() {
                    continue;
                }
                let col = d as u32 + 3;
                match code.parse::<f64>() {
                    // Keep leading zeros as text, like a hand-typed "01".
                    Ok(n) if !code.starts_with('0') => {
                        ws.get_cell_mut((col, row)).set_value_number(n);
                    }
                    _ => {
                        ws.get_cell_mut((col, row)).set_value_string(code.clone());
                    }
                }
            }
        }
        for (p, d, argb) in &self.fills {
            let coord = (*d as u32 + 3, *p as u32 + 3);
            ws.get_style_mut(coord).set_background_color(argb.clone());
        }
    }
}

/// A workbook written to disk; the directory is removed on drop.
pub struct RosterFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl RosterFixture {
    pub fn write(sheets: &[FixtureSheet]) -> Self {
        Self::write_named("roster.xlsx", sheets)
    }

    pub fn write_named(file_name: &str, sheets: &[FixtureSheet]) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(file_name);

        let mut book = umya_spreadsheet::new_file();
        for (i, sheet) in sheets.iter().enumerate() {
            if i == 0 {
                let ws = book.get_sheet_mut(&0).expect("default sheet");
                ws.set_name(sheet.name.clone());
                sheet.write_into(ws);
            } else {
                let ws = book.new_sheet(sheet.name.clone()).expect("add sheet");
                sheet.write_into(ws);
            }
        }
        umya_spreadsheet::writer::xlsx::write(&book, &path).expect("write workbook");

        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> Vec<u8> {
        std::fs::read(&self.path).expect("read fixture")
    }
}
