use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use dutyboard_common::HighlightMarker;
use dutyboard_engine::RosterView;
use dutyboard_workbook::{BoardConfig, RosterLoader, SheetSelector};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "duty-board",
    version,
    about = "Print a duty roster workbook grouped by day and duty"
)]
struct Cli {
    /// Roster workbook (.xlsx, .xlsm, .xls, .xlsb, .ods).
    file: PathBuf,

    /// YAML board config (sheet, highlight_marker, layout).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sheet name; defaults to the last sheet.
    #[arg(long, conflicts_with = "sheet_index")]
    sheet: Option<String>,

    /// 0-based sheet position.
    #[arg(long = "sheet-index")]
    sheet_index: Option<usize>,

    /// Fill color (RRGGBB) that marks a highlighted assignment.
    #[arg(long)]
    marker: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Only print this day.
    #[arg(long)]
    day: Option<u32>,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn board_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(name) = &cli.sheet {
        config.sheet = SheetSelector::Named(name.clone());
    }
    if let Some(index) = cli.sheet_index {
        config.sheet = SheetSelector::Index(index);
    }
    if let Some(marker) = &cli.marker {
        config.highlight_marker =
            HighlightMarker::parse(marker).with_context(|| format!("--marker {marker}"))?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = board_config(&cli)?;
    let loaded = RosterLoader::new(config)
        .load(&cli.file)
        .with_context(|| format!("loading roster {}", cli.file.display()))?;
    tracing::info!(
        sheet = %loaded.sheet.name,
        days = loaded.roster.len(),
        "roster loaded"
    );

    let mut view = RosterView::from(&loaded.roster);
    if let Some(day) = cli.day {
        view.days.retain(|d| d.day == day);
        if view.days.is_empty() {
            bail!("day {day} has no assignments in sheet '{}'", loaded.sheet.name);
        }
    }

    match cli.format {
        Format::Text => print!("{}", render::render_text(&view)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
