//! Command-line surface. Precedence is CLI flag, then settings file, then defaults.

use crate::application::{Settings, SettingsError};
use crate::domain::sizing::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::domain::{Pattern, SizingPolicy, presets};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "life_board", about = "Interactive Conway's Game of Life board")]
pub struct Args {
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fixed number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Fixed number of columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Fill the window with cells of this many pixels instead of a fixed size
    #[arg(long, value_name = "PX", conflicts_with_all = ["rows", "cols"])]
    pub responsive: Option<f32>,

    /// Cell cap for --responsive
    #[arg(long, default_value_t = 100_000)]
    pub max_cells: usize,

    /// Milliseconds between generations
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Pattern stamped in the middle of the board at startup
    #[arg(long)]
    pub pattern: Option<String>,

    /// Start from random soup
    #[arg(long)]
    pub random: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Resolve the effective settings
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let base = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(self.apply_flags(base))
    }

    /// Like [`Args::settings`], but a bad settings file only loses the file:
    /// the flags are still applied on top of the defaults
    pub fn settings_or_defaults(&self) -> Settings {
        self.settings().unwrap_or_else(|err| {
            log::warn!("{err}; using default settings");
            self.apply_flags(Settings::default())
        })
    }

    fn apply_flags(&self, mut settings: Settings) -> Settings {
        if let Some(cell_px) = self.responsive {
            settings.sizing = SizingPolicy::Responsive {
                cell_px,
                max_cells: self.max_cells,
            };
        } else if self.rows.is_some() || self.cols.is_some() {
            let (rows, cols) = match settings.sizing {
                SizingPolicy::Fixed { rows, cols } => (rows, cols),
                SizingPolicy::Responsive { .. } => (DEFAULT_ROWS, DEFAULT_COLS),
            };
            settings.sizing = SizingPolicy::Fixed {
                rows: self.rows.unwrap_or(rows),
                cols: self.cols.unwrap_or(cols),
            };
        }
        if let Some(interval) = self.interval {
            settings.update_interval_ms = interval;
        }
        settings.validated()
    }

    /// Look up the startup pattern, if one was requested
    pub fn pattern(&self) -> Option<Result<Pattern, String>> {
        self.pattern.as_ref().map(|name| {
            presets::find(name).ok_or_else(|| {
                let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
                format!("unknown pattern '{}' (known: {})", name, known.join(", "))
            })
        })
    }
}
