use dutyboard_common::{HighlightMap, HighlightMarker, RawGrid};
use dutyboard_engine::{RosterBuilder, RosterLayout, RosterResult};

use crate::WorkbookError;

/// One decoded sheet: its values anchored at `A1` plus the cells whose fill
/// matched the highlight marker.
///
/// Indices are absolute sheet positions even when the leading rows or columns
/// are blank. A roster that starts further in (names in column C, say) needs a
/// matching [`RosterLayout`] in the board config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub grid: RawGrid,
    pub highlights: HighlightMap,
}

impl SheetGrid {
    pub fn build_roster(&self, layout: RosterLayout) -> RosterResult {
        RosterBuilder::with_layout(layout).build(&self.grid, &self.highlights)
    }
}

/// A workbook backend that can hand roster sheets to the engine.
pub trait RosterSource {
    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;

    /// Whether [`read_sheet`](Self::read_sheet) can report highlighted cells.
    fn supports_highlights(&self) -> bool;

    fn sheet_names(&self) -> Vec<String>;

    fn read_sheet(
        &mut self,
        sheet: &str,
        marker: &HighlightMarker,
    ) -> Result<SheetGrid, WorkbookError>;
}
