//! # Frame Scheduler
//!
//! Fixed-FPS pacing and delta-time computation.
//!
//! The scheduler never clamps or subdivides the delta: a long stall between
//! frames turns into one large integration step.

use log::{trace, warn};
use std::time::{Duration, Instant};

/// Deltas above this many seconds are logged as stalls.
const STALL_WARN_SECS: f32 = 0.25;

/// Millisecond clock and sleep used for frame pacing.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Blocks for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by `Instant` and `thread::sleep`.
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Hand-driven clock. Sleeping advances time instantly and is recorded.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub now: u64,
    /// Every sleep requested, in order
    pub sleeps: Vec<u64>,
}

impl ManualClock {
    /// Creates a clock reading `now` milliseconds.
    pub fn new(now: u64) -> Self {
        Self {
            now,
            sleeps: Vec::new(),
        }
    }

    /// Moves time forward without sleeping.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.sleeps.push(ms);
        self.now += ms;
    }
}

/// Paces the loop to a fixed frame budget and measures each frame's delta.
pub struct FrameScheduler<C: Clock> {
    clock: C,
    frame_budget_ms: u64,
    last_frame_ms: u64,
    last_delta: f32,
}

impl<C: Clock> FrameScheduler<C> {
    /// Creates a scheduler whose first frame is measured from now.
    ///
    /// # Examples
    ///
    /// ```
    /// use paddle::{FrameScheduler, ManualClock};
    ///
    /// let mut scheduler = FrameScheduler::new(ManualClock::new(0), 8);
    /// let delta = scheduler.wait_for_next_frame();
    /// assert_eq!(delta, 0.008);
    /// ```
    pub fn new(clock: C, frame_budget_ms: u64) -> Self {
        let last_frame_ms = clock.now_ms();
        Self {
            clock,
            frame_budget_ms,
            last_frame_ms,
            last_delta: 0.0,
        }
    }

    /// Sleeps out the rest of the frame budget, then returns the seconds
    /// elapsed since the previous frame.
    ///
    /// The sleep is skipped when the budget is already spent, and also when
    /// the computed wait exceeds the budget (clock went backwards).
    pub fn wait_for_next_frame(&mut self) -> f32 {
        let elapsed = self.clock.now_ms() as i64 - self.last_frame_ms as i64;
        let time_to_wait = self.frame_budget_ms as i64 - elapsed;

        if time_to_wait > 0 && time_to_wait <= self.frame_budget_ms as i64 {
            self.clock.sleep_ms(time_to_wait as u64);
        }

        let now = self.clock.now_ms();
        let delta = now.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now;
        self.last_delta = delta;

        if delta > STALL_WARN_SECS {
            warn!("frame stalled for {:.3}s, integrating in one step", delta);
        } else {
            trace!("frame delta {:.4}s", delta);
        }

        delta
    }

    /// Delta returned by the most recent frame.
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Frame budget in milliseconds.
    pub fn frame_budget_ms(&self) -> u64 {
        self.frame_budget_ms
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the underlying clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleeps_remaining_budget() {
        let mut scheduler = FrameScheduler::new(ManualClock::new(1000), 8);
        scheduler.clock_mut().advance(3);

        let delta = scheduler.wait_for_next_frame();

        assert_eq!(scheduler.clock().sleeps, vec![5]);
        assert_eq!(delta, 0.008);
    }

    #[test]
    fn test_no_sleep_when_budget_spent() {
        let mut scheduler = FrameScheduler::new(ManualClock::new(0), 8);
        scheduler.clock_mut().advance(20);

        let delta = scheduler.wait_for_next_frame();

        assert!(scheduler.clock().sleeps.is_empty());
        assert_eq!(delta, 0.02);
    }

    #[test]
    fn test_long_stall_is_not_clamped() {
        let mut scheduler = FrameScheduler::new(ManualClock::new(0), 8);
        scheduler.clock_mut().advance(2_000);

        assert_eq!(scheduler.wait_for_next_frame(), 2.0);
        assert_eq!(scheduler.last_delta(), 2.0);
    }

    #[test]
    fn test_consecutive_frames_measure_from_previous() {
        let mut scheduler = FrameScheduler::new(ManualClock::new(0), 8);

        scheduler.wait_for_next_frame();
        scheduler.clock_mut().advance(10);
        let delta = scheduler.wait_for_next_frame();

        assert_eq!(delta, 0.01);
        assert_eq!(scheduler.clock().now, 18);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(2);
        assert!(clock.now_ms() >= before + 2);
    }
}
