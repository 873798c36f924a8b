// src/surface/scheduler.rs

//! Frame timing: the monotonic clock and the scheduler that gates ticks.
//!
//! The clock is owned data, not shared state, so independent sessions (and
//! tests) never share timing. It is restarted, not merely advanced, on every
//! resume so the first post-resume delta is near zero instead of the whole
//! suspended duration.

use std::time::Instant;

/// Holds the last tick timestamp and derives per-tick deltas.
#[derive(Debug)]
pub(crate) struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        Self { last_tick: None }
    }

    /// Forgets any previous timestamp and starts counting from `now`.
    pub(crate) fn restart(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    /// Returns the seconds elapsed since the previous tick and advances the
    /// clock to `now` before the caller dispatches anything, so a slow or
    /// reentrant tick never compounds drift.
    ///
    /// Saturating monotonic subtraction clamps a backwards `now` (clock
    /// adjustment) to a zero delta rather than a negative time step.
    pub(crate) fn advance(&mut self, now: Instant) -> f32 {
        let delta = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        delta
    }
}

/// Gates the tick stream on the surface being active and owns the clock.
///
/// `start` and `stop` are synchronous: once `stop` returns, `tick` yields
/// nothing until the next `start`, so a detached surface is guaranteed to
/// issue no further engine calls from the draw callback.
#[derive(Debug)]
pub(crate) struct FrameScheduler {
    clock: FrameClock,
    running: bool,
}

impl FrameScheduler {
    pub(crate) fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            running: false,
        }
    }

    /// Starts (or resumes) the tick stream with a fresh clock.
    pub(crate) fn start(&mut self, now: Instant) {
        self.clock.restart(now);
        self.running = true;
    }

    /// Stops the tick stream. Idempotent.
    pub(crate) fn stop(&mut self) {
        self.running = false;
    }

    /// Returns the delta for this tick, or `None` while stopped.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.running {
            return None;
        }
        Some(self.clock.advance(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn it_should_report_elapsed_seconds_between_ticks() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.restart(t0);

        let delta = clock.advance(t0 + Duration::from_millis(16));
        assert!((delta - 0.016).abs() < 1e-4);
    }

    #[test]
    fn it_should_clamp_a_backwards_clock_to_zero_delta() {
        let t0 = Instant::now() + Duration::from_secs(10);
        let mut clock = FrameClock::new();
        clock.restart(t0);

        let delta = clock.advance(t0 - Duration::from_secs(5));
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn it_should_measure_from_the_restart_point_not_the_old_timestamp() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.restart(t0);
        clock.advance(t0 + Duration::from_millis(16));

        // A long gap, then a restart; the next delta ignores the gap.
        let resumed = t0 + Duration::from_secs(3600);
        clock.restart(resumed);
        let delta = clock.advance(resumed + Duration::from_millis(8));
        assert!((delta - 0.008).abs() < 1e-4);
    }

    #[test]
    fn it_should_yield_no_ticks_while_stopped() {
        let t0 = Instant::now();
        let mut scheduler = FrameScheduler::new();
        assert_eq!(scheduler.tick(t0), None);

        scheduler.start(t0);
        assert!(scheduler.tick(t0 + Duration::from_millis(16)).is_some());

        scheduler.stop();
        assert_eq!(scheduler.tick(t0 + Duration::from_millis(32)), None);
    }
}
