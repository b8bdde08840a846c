use super::clock::{IntervalTimer, SimulationClock, TickSource};
use super::settings::Settings;
use crate::domain::{CellChange, EditMode, Editor, Grid, GridError, StepStrategy};
use std::time::{Duration, Instant};

/// Density used when seeding random soup
pub const RANDOM_DENSITY: f64 = 0.3;

/// What the renderer has to redraw since it last asked
#[derive(Debug, PartialEq, Eq)]
pub enum Repaint {
    /// Dimensions or colors changed; redraw every cell
    Full,
    /// Only these cells changed
    Cells(Vec<CellChange>),
}

/// Session orchestrates the simulation.
/// It is the single owner of the grid, the editor and the clock; every
/// input path and every timer tick goes through it, so the grid has one
/// writer at any instant.
pub struct Session<T: TickSource = IntervalTimer> {
    grid: Grid,
    editor: Editor,
    clock: SimulationClock<T>,
    settings: Settings,
    viewport: (f32, f32),
    strategy: StepStrategy,
    generation: u64,
    full_repaint: bool,
    pub last_step_time_ms: f32, // Step performance metric
}

impl Session<IntervalTimer> {
    /// Create a session driven by frame time
    pub fn new(settings: Settings, viewport: (f32, f32)) -> Result<Self, GridError> {
        Self::with_source(settings, viewport, IntervalTimer::default())
    }
}

impl<T: TickSource> Session<T> {
    /// Create a session with an explicit tick source
    pub fn with_source(settings: Settings, viewport: (f32, f32), source: T) -> Result<Self, GridError> {
        let settings = settings.validated();
        let (rows, cols) = settings.sizing.dimensions(viewport);
        let grid = Grid::new(rows, cols)?;
        log::info!("created {}x{} grid", rows, cols);

        Ok(Self {
            strategy: StepStrategy::for_size(grid.len()),
            grid,
            editor: Editor::new(settings.mode),
            clock: SimulationClock::new(source, settings.interval()),
            settings,
            viewport,
            generation: 0,
            full_repaint: true,
            last_step_time_ms: 0.0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for seeding; not gated on the run state
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn clock(&self) -> &SimulationClock<T> {
        &self.clock
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Toggle play/pause state. Starting abandons any drag in progress.
    pub fn toggle_run(&mut self) {
        self.clock.toggle_run();
        if self.clock.is_running() {
            self.editor.end_gesture();
        }
    }

    /// Kill every cell, stop the clock and reset the generation counter
    pub fn reset(&mut self) {
        self.grid.reset_all();
        self.clock.suspend();
        self.editor.end_gesture();
        self.generation = 0;
    }

    /// Fill the grid with random soup (stops the simulation)
    pub fn randomize(&mut self) {
        self.clock.suspend();
        self.grid.randomize(RANDOM_DENSITY);
        self.generation = 0;
    }

    /// Replace the grid with a fresh all-dead one of the given size.
    /// The clock is stopped for the swap and restarted if it had been running.
    /// An invalid size is rejected before anything changes.
    pub fn rebuild(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        Grid::check_dimensions(rows, cols)?;
        let was_running = self.clock.suspend();

        self.grid = Grid::new(rows, cols)?;
        self.strategy = StepStrategy::for_size(self.grid.len());
        self.editor.end_gesture();
        self.generation = 0;
        self.full_repaint = true;
        log::info!("rebuilt grid as {}x{} ({})", rows, cols, self.strategy.name());

        self.clock.resume(was_running);
        Ok(())
    }

    /// Apply a new set of settings, doing only the work the difference needs:
    /// size or cell-size changes rebuild the grid, interval changes restart
    /// the clock, color changes schedule a full repaint.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), GridError> {
        let settings = settings.validated();

        let (rows, cols) = settings.sizing.dimensions(self.viewport);
        if self.settings.needs_rebuild(&settings, self.viewport)
            || (rows, cols) != self.grid.dimensions()
        {
            self.rebuild(rows, cols)?;
        }
        self.clock.set_interval(settings.interval());
        if self.settings.colors_differ(&settings) {
            self.full_repaint = true;
        }
        self.editor.set_mode(settings.mode);

        self.settings = settings;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.editor.set_mode(mode);
        self.settings.mode = mode;
    }

    /// Shift the update interval by `delta_ms`, clamped to the valid range
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let interval = self.settings.update_interval_ms.saturating_add_signed(delta_ms);
        let settings = Settings {
            update_interval_ms: interval,
            ..self.settings.clone()
        }
        .validated();
        self.clock.set_interval(settings.interval());
        self.settings = settings;
    }

    /// React to a new drawable area. Only responsive sizing rebuilds.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> Result<(), GridError> {
        self.viewport = (width, height);
        if !self.settings.sizing.is_responsive() {
            return Ok(());
        }
        let (rows, cols) = self.settings.sizing.dimensions(self.viewport);
        if (rows, cols) != self.grid.dimensions() {
            self.rebuild(rows, cols)?;
        }
        Ok(())
    }

    /// Pointer pressed, `cell` is the grid coordinate under it if any
    pub fn pointer_down(&mut self, cell: Option<(i32, i32)>) {
        if self.is_running() {
            return;
        }
        self.editor.begin_gesture();
        if let Some((row, col)) = cell {
            self.editor.handle_pointer_move(&mut self.grid, row, col);
        }
    }

    /// Pointer moved; only edits while a gesture is active
    pub fn pointer_move(&mut self, cell: Option<(i32, i32)>) {
        if self.is_running() || !self.editor.in_gesture() {
            return;
        }
        if let Some((row, col)) = cell {
            self.editor.handle_pointer_move(&mut self.grid, row, col);
        }
    }

    pub fn pointer_up(&mut self) {
        self.editor.end_gesture();
    }

    /// Update simulation by one frame. Returns the generations applied.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        let start = Instant::now();
        let steps = self.clock.advance(elapsed, &mut self.grid, self.strategy);
        if steps > 0 {
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0 / steps as f32;
            self.generation += u64::from(steps);
        }
        steps
    }

    /// Hand the renderer everything it must redraw since the last call
    pub fn take_repaint(&mut self) -> Repaint {
        let changes = self.grid.take_changes();
        if std::mem::take(&mut self.full_repaint) {
            Repaint::Full
        } else {
            Repaint::Cells(changes)
        }
    }
}
