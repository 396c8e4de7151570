use dutyboard_common::{HighlightLookup, RawGrid};

use crate::{DayResult, PersonEntry, RosterLayout, RosterResult, normalize};

/// Groups a roster grid into per-day duty buckets.
///
/// The builder holds only the layout; every call to [`build`](Self::build)
/// is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterBuilder {
    layout: RosterLayout,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: RosterLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &RosterLayout {
        &self.layout
    }

    pub fn build<H>(&self, grid: &RawGrid, highlight: &H) -> RosterResult
    where
        H: HighlightLookup + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "build_roster",
            rows = grid.row_count(),
            cols = grid.col_count()
        )
        .entered();

        let mut roster = RosterResult::default();
        let header = grid.row(self.layout.day_row);
        for (col, cell) in header.iter().enumerate().skip(self.layout.first_day_col) {
            let Some(day) = cell
                .as_integer()
                .filter(|d| RosterLayout::DAY_RANGE.contains(d))
            else {
                continue;
            };
            let day = day as u32;
            let Some(result) = self.build_day(grid, highlight, day, col) else {
                #[cfg(feature = "tracing")]
                tracing::trace!(day, col, "day column has no assignments");
                continue;
            };
            if let Some(_replaced) = roster.insert(result) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    day,
                    col,
                    replaced_col = _replaced.column(),
                    "duplicate day header; later column wins"
                );
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(days = roster.len(), "roster built");
        roster
    }

    fn build_day<H>(&self, grid: &RawGrid, highlight: &H, day: u32, col: usize) -> Option<DayResult>
    where
        H: HighlightLookup + ?Sized,
    {
        let weekday = grid
            .get(self.layout.weekday_row, self.layout.weekday_col(day))
            .to_text();
        let weekday = (!weekday.is_empty()).then_some(weekday);
        let mut result = DayResult::new(day, col, weekday);

        for row in self.layout.first_person_row..grid.row_count() {
            let code = grid.get(row, col);
            if !code.is_truthy() {
                continue;
            }
            let raw = code.to_text();
            let entry = PersonEntry {
                name: grid.get(row, self.layout.name_col).to_text(),
                highlighted: highlight.is_highlighted(row, col),
                row,
            };
            result.bucket_for(normalize(&raw), &raw).push(entry);
        }

        for bucket in result.buckets_mut() {
            bucket.sort_entries();
        }
        (!result.is_empty()).then_some(result)
    }
}

/// Build with the default layout.
pub fn build<H>(grid: &RawGrid, highlight: &H) -> RosterResult
where
    H: HighlightLookup + ?Sized,
{
    RosterBuilder::default().build(grid, highlight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dutyboard_common::{CellValue, NoHighlights};

    fn grid(rows: Vec<Vec<CellValue>>) -> RawGrid {
        RawGrid::from_rows(rows)
    }

    fn t(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn header_must_be_a_day_number_past_the_name_columns() {
        let g = grid(vec![
            vec![
                CellValue::Int(1),
                CellValue::Int(2),
                t("3"),
                CellValue::Number(4.5),
                CellValue::Int(0),
                CellValue::Int(32),
                CellValue::Number(5.0),
            ],
            vec![],
            vec![CellValue::Empty, t("Kim"), t("1"), t("1"), t("1"), t("1"), t("1")],
        ]);
        let roster = build(&g, &NoHighlights);
        assert_eq!(roster.day_numbers().collect::<Vec<_>>(), vec![5]);
        assert_eq!(roster.get(5).unwrap().column(), 6);
    }

    #[test]
    fn falsy_codes_are_skipped() {
        let g = grid(vec![
            vec![CellValue::Empty, CellValue::Empty, CellValue::Int(1)],
            vec![],
            vec![CellValue::Empty, t("a"), t("")],
            vec![CellValue::Empty, t("b"), CellValue::Int(0)],
            vec![CellValue::Empty, t("c"), CellValue::Boolean(false)],
            vec![CellValue::Empty, t("d"), CellValue::Int(3)],
        ]);
        let roster = build(&g, &NoHighlights);
        let day = roster.get(1).unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day.get("3").unwrap().names().collect::<Vec<_>>(), vec!["d"]);
    }

    #[test]
    fn later_duplicate_day_column_wins() {
        let g = grid(vec![
            vec![CellValue::Empty, CellValue::Empty, CellValue::Int(1), CellValue::Int(1)],
            vec![],
            vec![CellValue::Empty, t("Kim"), t("2"), t("OFF")],
        ]);
        let roster = build(&g, &NoHighlights);
        let day = roster.get(1).unwrap();
        assert_eq!(day.column(), 3);
        assert!(day.get("OFF").is_some());
        assert!(day.get("2").is_none());
    }

    #[test]
    fn weekday_comes_from_day_number_column() {
        let g = grid(vec![
            vec![CellValue::Empty, CellValue::Empty, CellValue::Int(1), CellValue::Int(2)],
            vec![CellValue::Empty, CellValue::Empty, t("월"), CellValue::Empty],
            vec![CellValue::Empty, t("Kim"), t("1"), t("1")],
        ]);
        let roster = build(&g, &NoHighlights);
        assert_eq!(roster.get(1).unwrap().weekday(), Some("월"));
        assert_eq!(roster.get(2).unwrap().weekday(), None);
    }

    #[test]
    fn custom_layout_shifts_rows_and_columns() {
        let layout = RosterLayout {
            day_row: 1,
            weekday_row: 2,
            first_person_row: 3,
            name_col: 0,
            first_day_col: 1,
        };
        let g = grid(vec![
            vec![t("March")],
            vec![CellValue::Empty, CellValue::Int(1)],
            vec![CellValue::Empty, t("Sun")],
            vec![t("Kim"), t("n")],
        ]);
        let roster = RosterBuilder::with_layout(layout).build(&g, &NoHighlights);
        let day = roster.get(1).unwrap();
        assert_eq!(day.weekday(), Some("Sun"));
        assert_eq!(day.get("N").unwrap().names().collect::<Vec<_>>(), vec!["Kim"]);
    }
}
