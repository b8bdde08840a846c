//! Runtime-adjustable configuration.

use crate::domain::{EditMode, SizingPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 1000;
pub const MIN_CELL_SIZE: f32 = 0.05;
pub const MAX_CELL_SIZE: f32 = 1.0;
/// Quiet period before dimension edits from the panel are applied
pub const DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All user-facing settings. Colors are `0xRRGGBB`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sizing: SizingPolicy,
    /// Cell edge in world units; the camera zoom is derived from it
    pub cell_size: f32,
    pub update_interval_ms: u64,
    pub alive_color: u32,
    pub dead_color: u32,
    pub mode: EditMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            cell_size: 0.2,
            update_interval_ms: 100,
            alive_color: 0xffffff,
            dead_color: 0x222222,
            mode: EditMode::Draw,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamp every value into its supported range
    pub fn validated(mut self) -> Self {
        let interval = self.update_interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if interval != self.update_interval_ms {
            log::warn!(
                "update interval {}ms out of range, using {}ms",
                self.update_interval_ms,
                interval
            );
            self.update_interval_ms = interval;
        }

        let cell_size = if self.cell_size.is_finite() {
            self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
        } else {
            Settings::default().cell_size
        };
        if cell_size != self.cell_size {
            log::warn!("cell size {} out of range, using {}", self.cell_size, cell_size);
            self.cell_size = cell_size;
        }

        let sizing = self.sizing.normalized();
        if sizing != self.sizing {
            log::warn!("sizing {:?} out of range, using {:?}", self.sizing, sizing);
            self.sizing = sizing;
        }

        self.alive_color &= 0xffffff;
        self.dead_color &= 0xffffff;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// Whether moving from `self` to `other` requires rebuilding the grid
    /// shown in `viewport`: a new cell size, or a sizing change that
    /// actually yields different dimensions
    pub fn needs_rebuild(&self, other: &Settings, viewport: (f32, f32)) -> bool {
        self.cell_size != other.cell_size
            || self.sizing.dimensions(viewport) != other.sizing.dimensions(viewport)
    }

    pub fn colors_differ(&self, other: &Settings) -> bool {
        self.alive_color != other.alive_color || self.dead_color != other.dead_color
    }
}

/// Holds the latest edited settings until no new edit arrives for
/// [`DEBOUNCE`], then releases them once.
#[derive(Debug, Default)]
pub struct SettingsDebounce {
    pending: Option<Settings>,
    quiet_for: Duration,
}

impl SettingsDebounce {
    /// Record an edit, restarting the quiet period
    pub fn push(&mut self, settings: Settings) {
        self.pending = Some(settings);
        self.quiet_for = Duration::ZERO;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Latest edit, whether or not it has settled
    pub fn peek(&self) -> Option<&Settings> {
        self.pending.as_ref()
    }

    /// Advance time; yields the settings once the quiet period has passed
    pub fn poll(&mut self, elapsed: Duration) -> Option<Settings> {
        self.pending.as_ref()?;
        self.quiet_for += elapsed;
        if self.quiet_for >= DEBOUNCE {
            self.quiet_for = Duration::ZERO;
            self.pending.take()
        } else {
            None
        }
    }
}
