//! Board configuration, read from YAML.
//!
//! ```yaml
//! sheet: last            # or `first`, `{ index: 2 }`, `{ name: "March" }`
//! highlight_marker: FFC000
//! layout:
//!   name_col: 1
//!   first_day_col: 2
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use dutyboard_common::HighlightMarker;
use dutyboard_engine::RosterLayout;
use serde::{Deserialize, Serialize};

use crate::{SheetSelector, WorkbookError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub sheet: SheetSelector,
    pub highlight_marker: HighlightMarker,
    pub layout: RosterLayout,
}

impl BoardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, WorkbookError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, WorkbookError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WorkbookError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| WorkbookError::io(path, e))?;
        Self::from_yaml_reader(BufReader::new(file))
    }

    pub fn to_yaml(&self) -> Result<String, WorkbookError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_marker(mut self, marker: HighlightMarker) -> Self {
        self.highlight_marker = marker;
        self
    }
}
