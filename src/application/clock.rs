//! Run/pause state machine that turns elapsed time into generations.

use crate::domain::{Grid, StepStrategy, engine};
use std::time::Duration;

/// Upper bound on ticks released by a single advance. Backlog beyond this
/// (a stalled frame, a dragged window) is dropped rather than replayed.
pub const MAX_CATCH_UP: u32 = 4;

/// A source of periodic ticks.
///
/// The clock never reads wall time itself: the owner feeds elapsed time in
/// through [`TickSource::advance`], which makes every source deterministic
/// under test.
pub trait TickSource {
    /// Begin producing ticks every `interval`, discarding any prior phase
    fn start(&mut self, interval: Duration);
    /// Cancel; no tick is produced until the next start
    fn stop(&mut self);
    fn is_active(&self) -> bool;
    /// Account for `elapsed` time and return how many ticks fell due
    fn advance(&mut self, elapsed: Duration) -> u32;
}

/// Frame-time accumulator that behaves like a repeating interval timer
#[derive(Debug, Default)]
pub struct IntervalTimer {
    interval: Option<Duration>,
    accumulated: Duration,
}

impl TickSource for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval.max(Duration::from_millis(1)));
        self.accumulated = Duration::ZERO;
    }

    fn stop(&mut self) {
        self.interval = None;
        self.accumulated = Duration::ZERO;
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(interval) = self.interval else {
            return 0;
        };
        self.accumulated += elapsed;

        let interval_ns = interval.as_nanos();
        let elapsed_ticks = self.accumulated.as_nanos() / interval_ns;
        // Leftover phase is kept; backlog beyond the cap is dropped
        self.accumulated = Duration::from_nanos((self.accumulated.as_nanos() % interval_ns) as u64);
        elapsed_ticks.min(u128::from(MAX_CATCH_UP)) as u32
    }
}

/// SimulationClock toggles between stopped and running and applies one
/// generation per tick while running.
#[derive(Debug)]
pub struct SimulationClock<T: TickSource = IntervalTimer> {
    source: T,
    interval: Duration,
    running: bool,
}

impl<T: TickSource> SimulationClock<T> {
    pub fn new(source: T, interval: Duration) -> Self {
        Self { source, interval, running: false }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }

    /// Flip between stopped and running
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        if self.running {
            self.source.start(self.interval);
        } else {
            self.source.stop();
        }
        log::info!(
            "simulation {}",
            if self.running { "running" } else { "paused" }
        );
    }

    /// Change the tick interval; a running source is restarted with it
    pub fn set_interval(&mut self, interval: Duration) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if self.running {
            self.source.stop();
            self.source.start(interval);
        }
    }

    /// Force the stopped state, returning whether the clock had been running
    pub fn suspend(&mut self) -> bool {
        let was_running = self.running;
        if was_running {
            self.toggle_run();
        }
        was_running
    }

    /// Restart after a [`suspend`](Self::suspend) if the clock had been running
    pub fn resume(&mut self, was_running: bool) {
        if was_running && !self.running {
            self.toggle_run();
        }
    }

    /// Feed elapsed time and step the grid once per due tick.
    /// Returns the number of generations applied.
    pub fn advance(&mut self, elapsed: Duration, grid: &mut Grid, strategy: StepStrategy) -> u32 {
        if !self.running {
            return 0;
        }
        let due = self.source.advance(elapsed);
        for _ in 0..due {
            let report = engine::step(grid, strategy);
            log::debug!("step: {} births, {} deaths", report.births, report.deaths);
        }
        due
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{CellState, presets};

    /// Tick source double: ticks are released only when a test queues them
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedTicks {
        pub active: bool,
        pub queued: u32,
        pub starts: Vec<Duration>,
        pub stops: u32,
    }

    impl ScriptedTicks {
        pub fn fire(&mut self, n: u32) {
            self.queued += n;
        }
    }

    impl TickSource for ScriptedTicks {
        fn start(&mut self, interval: Duration) {
            self.active = true;
            self.queued = 0;
            self.starts.push(interval);
        }

        fn stop(&mut self) {
            self.active = false;
            self.queued = 0;
            self.stops += 1;
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn advance(&mut self, _elapsed: Duration) -> u32 {
            if !self.active {
                return 0;
            }
            std::mem::take(&mut self.queued)
        }
    }

    fn blinker_grid() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        presets::blinker().place_on(&mut grid, 2, 1);
        grid
    }

    #[test]
    fn test_interval_timer_fires_on_schedule() {
        let mut timer = IntervalTimer::default();
        assert_eq!(timer.advance(Duration::from_secs(1)), 0);

        timer.start(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        assert_eq!(timer.advance(Duration::from_millis(80)), 1);
        assert_eq!(timer.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_interval_timer_caps_backlog() {
        let mut timer = IntervalTimer::default();
        timer.start(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_secs(5)), MAX_CATCH_UP);
        assert_eq!(timer.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_interval_timer_long_stall_keeps_phase() {
        let mut timer = IntervalTimer::default();
        timer.start(Duration::from_millis(1));
        let stall = Duration::from_secs(3600 * 24 * 365) + Duration::from_micros(400);
        assert_eq!(timer.advance(stall), MAX_CATCH_UP);
        assert_eq!(timer.advance(Duration::from_micros(500)), 0);
        assert_eq!(timer.advance(Duration::from_micros(100)), 1);
    }

    #[test]
    fn test_interval_timer_stop_discards_phase() {
        let mut timer = IntervalTimer::default();
        timer.start(Duration::from_millis(100));
        timer.advance(Duration::from_millis(90));
        timer.stop();
        assert!(!timer.is_active());
        timer.start(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(20)), 0);
    }

    #[test]
    fn test_toggle_twice_applies_no_steps() {
        let mut clock = SimulationClock::new(IntervalTimer::default(), Duration::from_millis(100));
        let mut grid = blinker_grid();

        clock.toggle_run();
        assert_eq!(clock.advance(Duration::from_millis(40), &mut grid, StepStrategy::Serial), 0);
        clock.toggle_run();
        assert!(!clock.is_running());
        assert_eq!(clock.advance(Duration::from_millis(500), &mut grid, StepStrategy::Serial), 0);
        assert_eq!(grid.get(2, 1), Ok(CellState::Alive));
        assert_eq!(grid.get(1, 2), Ok(CellState::Dead));
    }

    #[test]
    fn test_each_tick_is_one_generation() {
        let mut clock = SimulationClock::new(ScriptedTicks::default(), Duration::from_millis(50));
        let mut grid = blinker_grid();

        clock.toggle_run();
        clock.source_mut().fire(1);
        assert_eq!(clock.advance(Duration::ZERO, &mut grid, StepStrategy::Serial), 1);
        assert_eq!(grid.get(1, 2), Ok(CellState::Alive));

        clock.source_mut().fire(2);
        assert_eq!(clock.advance(Duration::ZERO, &mut grid, StepStrategy::Serial), 2);
        assert_eq!(grid.get(1, 2), Ok(CellState::Alive));
    }

    #[test]
    fn test_stop_cancels_pending_ticks() {
        let mut clock = SimulationClock::new(ScriptedTicks::default(), Duration::from_millis(50));
        let mut grid = blinker_grid();

        clock.toggle_run();
        clock.source_mut().fire(3);
        clock.toggle_run();
        assert_eq!(clock.advance(Duration::ZERO, &mut grid, StepStrategy::Serial), 0);
        assert_eq!(clock.source().stops, 1);
        assert_eq!(grid.get(2, 1), Ok(CellState::Alive));
    }

    #[test]
    fn test_interval_change_restarts_running_source() {
        let mut clock = SimulationClock::new(ScriptedTicks::default(), Duration::from_millis(100));
        clock.set_interval(Duration::from_millis(200));
        assert!(clock.source().starts.is_empty());

        clock.toggle_run();
        clock.set_interval(Duration::from_millis(50));
        clock.set_interval(Duration::from_millis(50));
        assert_eq!(
            clock.source().starts,
            vec![Duration::from_millis(200), Duration::from_millis(50)]
        );
        assert!(clock.is_running());
        assert!(clock.source().is_active());
    }

    #[test]
    fn test_interval_change_neither_drops_nor_duplicates() {
        let mut clock = SimulationClock::new(IntervalTimer::default(), Duration::from_millis(100));
        let mut grid = blinker_grid();

        clock.toggle_run();
        assert_eq!(clock.advance(Duration::from_millis(100), &mut grid, StepStrategy::Serial), 1);
        clock.set_interval(Duration::from_millis(30));
        assert_eq!(clock.advance(Duration::from_millis(29), &mut grid, StepStrategy::Serial), 0);
        assert_eq!(clock.advance(Duration::from_millis(1), &mut grid, StepStrategy::Serial), 1);
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut clock = SimulationClock::new(ScriptedTicks::default(), Duration::from_millis(100));
        assert!(!clock.suspend());
        clock.resume(false);
        assert!(!clock.is_running());

        clock.toggle_run();
        let was_running = clock.suspend();
        assert!(was_running);
        assert!(!clock.is_running());
        clock.resume(was_running);
        assert!(clock.is_running());
    }
}
