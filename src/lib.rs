// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Session, clock and settings
pub mod application;

// Command-line configuration
pub mod cli;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellState, EditMode, Grid, GridError, Pattern, SizingPolicy, StepStrategy, presets};
pub use application::{Camera, Session, Settings, SimulationClock, TickSource};
