use std::fmt::Write;

use dutyboard_engine::{DayView, RosterView};

/// Plain-text board: one block per day, one line per duty.
///
/// Highlighted names are wrapped in `*`; a `---` line closes the numbered posts.
pub fn render_text(view: &RosterView) -> String {
    let mut out = String::new();
    for (i, day) in view.days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_day(&mut out, day);
    }
    out
}

fn render_day(out: &mut String, day: &DayView) {
    match &day.weekday {
        Some(weekday) => {
            let _ = writeln!(out, "{}일 ({weekday})", day.day);
        }
        None => {
            let _ = writeln!(out, "{}일", day.day);
        }
    }
    for (index, duty) in day.duties.iter().enumerate() {
        let names: Vec<String> = duty
            .entries
            .iter()
            .map(|e| {
                if e.highlighted {
                    format!("*{}*", e.name)
                } else {
                    e.name.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "{}: {}", duty.label, names.join(", "));
        if day.ends_numbered_section(index) && index + 1 < day.duties.len() {
            out.push_str("---\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dutyboard_engine::{CellValue, RawGrid, build};

    #[test]
    fn renders_days_with_separator_and_highlights() {
        let e = || CellValue::Empty;
        let grid = RawGrid::from_rows(vec![
            vec![e(), e(), CellValue::Int(1), CellValue::Int(2)],
            vec![e(), e(), CellValue::from("Mon"), CellValue::from("Tue")],
            vec![e(), CellValue::from("Kim"), CellValue::from("1"), CellValue::from("1")],
            vec![e(), CellValue::from("Lee"), CellValue::from("v"), CellValue::from("2")],
            vec![e(), CellValue::from("Park"), CellValue::from("1"), e()],
        ]);
        let roster = build(&grid, &|row: usize, col: usize| row == 4 && col == 2);
        let text = render_text(&RosterView::from(&roster));

        assert_eq!(
            text,
            "1일 (Mon)\n1R: Kim, *Park*\n---\nOFF: Lee\n\n2일 (Tue)\n1R: Kim\n2R: Lee\n"
        );
    }

    #[test]
    fn empty_roster_renders_nothing() {
        let view = RosterView { days: Vec::new() };
        assert_eq!(render_text(&view), "");
    }
}
