use serde::{Deserialize, Serialize};

use crate::WorkbookError;

/// Which sheet of a workbook holds the roster.
///
/// Roster workbooks usually append a sheet per period, so the default is the
/// last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetSelector {
    #[default]
    Last,
    First,
    /// 0-based position in workbook order.
    Index(usize),
    #[serde(rename = "name")]
    Named(String),
}

impl SheetSelector {
    pub fn resolve<'a>(&self, names: &'a [String]) -> Result<&'a str, WorkbookError> {
        if names.is_empty() {
            return Err(WorkbookError::NoSheets);
        }
        match self {
            SheetSelector::Last => Ok(names[names.len() - 1].as_str()),
            SheetSelector::First => Ok(names[0].as_str()),
            SheetSelector::Index(index) => {
                names
                    .get(*index)
                    .map(String::as_str)
                    .ok_or(WorkbookError::SheetIndex {
                        index: *index,
                        count: names.len(),
                    })
            }
            SheetSelector::Named(name) => names
                .iter()
                .find(|n| *n == name)
                .or_else(|| names.iter().find(|n| n.eq_ignore_ascii_case(name)))
                .map(String::as_str)
                .ok_or_else(|| WorkbookError::SheetNotFound(name.clone())),
        }
    }
}
