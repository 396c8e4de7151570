// Run with: `cargo test -p dutyboard-workbook --test umya`

use dutyboard_common::{CellValue, HighlightLookup, HighlightMarker};
use dutyboard_testkit::{FixtureSheet, RosterFixture};
use dutyboard_workbook::{
    BoardConfig, RosterLoader, RosterSource, SheetSelector, UmyaAdapter, WorkbookError,
};

fn march() -> FixtureSheet {
    FixtureSheet::new("March")
        .days(&[1, 2])
        .weekdays(&["월", "화"])
        .person("Kim", &["1", "OV"])
        .person("Lee", &["01", "w"])
        .person("Park", &["1", ""])
        .highlight(2, 0)
        .highlight(1, 1)
}

#[test]
fn umya_reads_values_anchored_at_a1() {
    let fixture = RosterFixture::write(&[march()]);
    let mut adapter = UmyaAdapter::open_path(fixture.path()).expect("open workbook");

    assert_eq!(adapter.sheet_names(), vec!["March".to_string()]);
    let sheet = adapter
        .read_sheet("March", &HighlightMarker::ORANGE)
        .expect("read sheet");

    assert_eq!(sheet.grid.get(0, 2).as_integer(), Some(1));
    assert_eq!(sheet.grid.get(1, 3), &CellValue::from("화"));
    assert_eq!(sheet.grid.get(2, 1), &CellValue::from("Kim"));
    assert_eq!(sheet.grid.get(3, 2), &CellValue::from("01"));
    assert!(sheet.grid.get(4, 3).is_empty());
}

#[test]
fn umya_reports_marker_fills_only() {
    let sheet = FixtureSheet::new("Sheet1")
        .days(&[1])
        .person("A", &["1"])
        .person("B", &["1"])
        .person("C", &["1"])
        .highlight(0, 0)
        .fill(1, 0, "FF00B050");
    let fixture = RosterFixture::write(&[sheet]);
    let mut adapter = UmyaAdapter::open_path(fixture.path()).unwrap();
    let grid = adapter.read_sheet("Sheet1", &HighlightMarker::ORANGE).unwrap();

    assert!(grid.highlights.is_highlighted(2, 2));
    assert!(!grid.highlights.is_highlighted(3, 2));
    assert!(!grid.highlights.is_highlighted(4, 2));

    let green = HighlightMarker::parse("00B050").unwrap();
    let grid = adapter.read_sheet("Sheet1", &green).unwrap();
    assert!(!grid.highlights.is_highlighted(2, 2));
    assert!(grid.highlights.is_highlighted(3, 2));
}

#[test]
fn loader_builds_highlighted_roster_from_last_sheet() {
    let feb = FixtureSheet::new("February").days(&[1]).person("Old", &["ST"]);
    let fixture = RosterFixture::write(&[feb, march()]);

    let loaded = RosterLoader::default().load(fixture.path()).expect("load");
    assert_eq!(loaded.sheet.name, "March");
    assert!(loaded.highlights_available);

    let roster = &loaded.roster;
    assert_eq!(roster.day_numbers().collect::<Vec<_>>(), vec![1, 2]);

    let day1 = roster.get(1).unwrap();
    assert_eq!(day1.weekday(), Some("월"));
    let ones: Vec<_> = day1
        .get("1")
        .unwrap()
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.highlighted))
        .collect();
    assert_eq!(ones, vec![("Kim", false), ("Park", true)]);
    assert_eq!(day1.get("01").unwrap().names().collect::<Vec<_>>(), vec!["Lee"]);

    let off = roster.get(2).unwrap().get("OFF").unwrap();
    assert_eq!(off.original_keys(), &["OV", "w"]);
    assert_eq!(
        off.entries().iter().map(|e| e.highlighted).collect::<Vec<_>>(),
        vec![false, true]
    );
}

#[test]
fn loader_selects_named_sheet() {
    let feb = FixtureSheet::new("February").days(&[3]).person("Old", &["ST"]);
    let fixture = RosterFixture::write(&[feb, march()]);

    let cfg = BoardConfig::default().with_sheet(SheetSelector::Named("February".into()));
    let loaded = RosterLoader::new(cfg).load(fixture.path()).unwrap();
    assert_eq!(loaded.sheet.name, "February");
    assert_eq!(loaded.roster.get(3).unwrap().get("ST").unwrap().label(), "Station");

    let cfg = BoardConfig::default().with_sheet(SheetSelector::Named("April".into()));
    assert!(matches!(
        RosterLoader::new(cfg).load(fixture.path()),
        Err(WorkbookError::SheetNotFound(_))
    ));
}

#[test]
fn open_bytes_matches_open_path() {
    let fixture = RosterFixture::write(&[march()]);
    let mut from_path = UmyaAdapter::open_path(fixture.path()).unwrap();
    let mut from_bytes = UmyaAdapter::open_bytes(fixture.bytes()).unwrap();
    let marker = HighlightMarker::default();
    assert_eq!(
        from_path.read_sheet("March", &marker).unwrap(),
        from_bytes.read_sheet("March", &marker).unwrap()
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RosterLoader::default()
        .load(dir.path().join("absent.xlsx"))
        .unwrap_err();
    assert!(matches!(err, WorkbookError::Io { .. }), "{err}");
}
