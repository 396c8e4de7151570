pub mod backends;
pub mod config;
pub mod error;
pub mod loader;
pub mod sheet;
pub mod traits;

#[cfg(feature = "calamine")]
pub use backends::CalamineAdapter;
#[cfg(feature = "umya")]
pub use backends::UmyaAdapter;
pub use config::BoardConfig;
pub use error::WorkbookError;
pub use loader::{BoardFormat, LoadedRoster, RosterLoader};
pub use sheet::SheetSelector;
pub use traits::{RosterSource, SheetGrid};

// Re-export for convenience
pub use dutyboard_common::{HighlightMap, HighlightMarker, RawGrid};
pub use dutyboard_engine::{RosterLayout, RosterResult, RosterView};
