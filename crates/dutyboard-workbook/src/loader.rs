use std::path::Path;

use dutyboard_engine::RosterResult;

use crate::{BoardConfig, RosterSource, SheetGrid, WorkbookError};

/// File families, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFormat {
    /// `.xlsx` / `.xlsm`: styles are available.
    Xlsx,
    /// `.xls` / `.xlsb` / `.ods`: values only.
    Legacy,
}

impl BoardFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" => Some(BoardFormat::Xlsx),
            "xls" | "xlsb" | "ods" => Some(BoardFormat::Legacy),
            _ => None,
        }
    }
}

/// A built roster and the sheet it came from.
#[derive(Debug, Clone)]
pub struct LoadedRoster {
    pub sheet: SheetGrid,
    pub roster: RosterResult,
    /// False when the backend could not see fill colors.
    pub highlights_available: bool,
}

/// Opens roster workbooks and runs them through the engine.
#[derive(Debug, Clone, Default)]
pub struct RosterLoader {
    config: BoardConfig,
}

impl RosterLoader {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Pick a backend for `path` from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn RosterSource>, WorkbookError> {
        let path = path.as_ref();
        let unsupported = || WorkbookError::UnsupportedFormat(path.display().to_string());
        let format = BoardFormat::from_path(path).ok_or_else(unsupported)?;
        if !path.exists() {
            return Err(WorkbookError::io(
                path,
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ));
        }
        match format {
            #[cfg(feature = "umya")]
            BoardFormat::Xlsx => Ok(Box::new(crate::UmyaAdapter::open_path(path)?)),
            #[cfg(all(feature = "calamine", not(feature = "umya")))]
            BoardFormat::Xlsx => Ok(Box::new(crate::CalamineAdapter::open_path(path)?)),
            #[cfg(feature = "calamine")]
            BoardFormat::Legacy => Ok(Box::new(crate::CalamineAdapter::open_path(path)?)),
            #[allow(unreachable_patterns)]
            _ => Err(unsupported()),
        }
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LoadedRoster, WorkbookError> {
        let path = path.as_ref();
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("load_roster", path = %path.display()).entered();

        let mut source = Self::open(path)?;
        self.load_from(source.as_mut())
    }

    /// Select the configured sheet from an already-open source and build it.
    pub fn load_from(&self, source: &mut dyn RosterSource) -> Result<LoadedRoster, WorkbookError> {
        let names = source.sheet_names();
        let sheet_name = self.config.sheet.resolve(&names)?.to_string();
        let highlights_available = source.supports_highlights();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                backend = source.backend(),
                sheet = %sheet_name,
                sheets = names.len(),
                "selected roster sheet"
            );
            if !highlights_available {
                tracing::warn!(
                    backend = source.backend(),
                    "backend cannot read fill colors; no entry will be highlighted"
                );
            }
        }

        let sheet = source.read_sheet(&sheet_name, &self.config.highlight_marker)?;
        let roster = sheet.build_roster(self.config.layout);
        Ok(LoadedRoster {
            sheet,
            roster,
            highlights_available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetSelector;
    use dutyboard_common::{CellValue, HighlightMap, HighlightMarker, RawGrid};

    struct MemorySource {
        sheets: Vec<SheetGrid>,
    }

    impl RosterSource for MemorySource {
        fn backend(&self) -> &'static str {
            "memory"
        }

        fn supports_highlights(&self) -> bool {
            true
        }

        fn sheet_names(&self) -> Vec<String> {
            self.sheets.iter().map(|s| s.name.clone()).collect()
        }

        fn read_sheet(
            &mut self,
            sheet: &str,
            _marker: &HighlightMarker,
        ) -> Result<SheetGrid, WorkbookError> {
            self.sheets
                .iter()
                .find(|s| s.name == sheet)
                .cloned()
                .ok_or_else(|| WorkbookError::SheetNotFound(sheet.to_string()))
        }
    }

    fn sheet(name: &str, day: i64, code: &str) -> SheetGrid {
        let grid = RawGrid::from_rows(vec![
            vec![CellValue::Empty, CellValue::Empty, CellValue::Int(day)],
            vec![],
            vec![CellValue::Empty, CellValue::from("Kim"), CellValue::from(code)],
        ]);
        SheetGrid {
            name: name.to_string(),
            grid,
            highlights: [(2, 2)].into_iter().collect::<HighlightMap>(),
        }
    }

    #[test]
    fn defaults_to_last_sheet() {
        let mut source = MemorySource {
            sheets: vec![sheet("Jan", 1, "1"), sheet("Feb", 2, "OFF")],
        };
        let loaded = RosterLoader::default().load_from(&mut source).unwrap();
        assert_eq!(loaded.sheet.name, "Feb");
        let off = loaded.roster.get(2).unwrap().get("OFF").unwrap();
        assert!(off.entries()[0].highlighted);
    }

    #[test]
    fn honours_configured_sheet() {
        let mut source = MemorySource {
            sheets: vec![sheet("Jan", 1, "1"), sheet("Feb", 2, "OFF")],
        };
        let cfg = BoardConfig::default().with_sheet(SheetSelector::First);
        let loaded = RosterLoader::new(cfg).load_from(&mut source).unwrap();
        assert_eq!(loaded.sheet.name, "Jan");
        assert!(loaded.roster.get(1).is_some());
    }

    #[test]
    fn inset_sheet_needs_layout_override() {
        let e = || CellValue::Empty;
        let grid = RawGrid::from_rows(vec![
            vec![],
            vec![e(), e(), e(), CellValue::Int(1)],
            vec![e(), e(), e(), CellValue::from("Thu")],
            vec![e(), e(), CellValue::from("Kim"), CellValue::from("st")],
        ]);
        let inset = SheetGrid {
            name: "Inset".to_string(),
            grid,
            highlights: HighlightMap::default(),
        };

        let default = RosterLoader::default()
            .load_from(&mut MemorySource { sheets: vec![inset.clone()] })
            .unwrap();
        assert!(default.roster.is_empty());

        let yaml = concat!(
            "layout:\n",
            "  day_row: 1\n",
            "  weekday_row: 2\n",
            "  first_person_row: 3\n",
            "  name_col: 2\n",
            "  first_day_col: 3\n",
        );
        let cfg = BoardConfig::from_yaml_str(yaml).unwrap();
        let loaded = RosterLoader::new(cfg)
            .load_from(&mut MemorySource { sheets: vec![inset] })
            .unwrap();
        let day = loaded.roster.get(1).unwrap();
        assert_eq!(day.column(), 3);
        assert_eq!(day.weekday(), Some("Thu"));
        assert_eq!(day.get("ST").unwrap().names().collect::<Vec<_>>(), vec!["Kim"]);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(BoardFormat::from_path(Path::new("a.XLSX")), Some(BoardFormat::Xlsx));
        assert_eq!(BoardFormat::from_path(Path::new("a.xls")), Some(BoardFormat::Legacy));
        assert_eq!(BoardFormat::from_path(Path::new("a.csv")), None);
        assert_eq!(BoardFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        assert!(matches!(
            RosterLoader::open("roster.txt"),
            Err(WorkbookError::UnsupportedFormat(_))
        ));
    }
}
