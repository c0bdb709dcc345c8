// SPDX-License-Identifier: MPL-2.0
//! Stat counter animation.
//!
//! Counts a displayed value up from zero to a target over a fixed duration
//! with linear per-frame steps and no easing. The animation is started once
//! when the stat strip becomes half visible; a target of zero completes
//! immediately.

use std::time::{Duration, Instant};

/// Duration of the count-up.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { started_at: Instant },
    Done,
}

/// Counts from 0 to `target` over [`COUNTER_DURATION`].
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    phase: Phase,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION)
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            phase: Phase::Idle,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Starts the count-up. A zero target (or zero duration) finishes on
    /// the spot.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.target == 0 || self.duration.is_zero() {
            self.phase = Phase::Done;
        } else {
            self.phase = Phase::Running { started_at: now };
        }
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advances the animation and returns the value to display.
    pub fn tick(&mut self, now: Instant) -> u64 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Done => self.target,
            Phase::Running { started_at } => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= self.duration {
                    self.phase = Phase::Done;
                    return self.target;
                }
                let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                (self.target as f64 * progress).floor() as u64
            }
        }
    }

    /// The value to display without advancing the animation.
    pub fn current(&self, now: Instant) -> u64 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Done => self.target,
            Phase::Running { started_at } => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= self.duration {
                    return self.target;
                }
                let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                (self.target as f64 * progress).floor() as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counter_displays_zero() {
        let counter = CounterAnimation::new(250);
        assert_eq!(counter.current(Instant::now()), 0);
        assert!(!counter.has_started());
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut counter = CounterAnimation::new(0);
        let now = Instant::now();
        counter.start(now);
        assert!(counter.is_done());
        assert_eq!(counter.tick(now), 0);
    }

    #[test]
    fn midway_value_is_the_floor_of_the_interpolation() {
        let mut counter = CounterAnimation::with_duration(100, Duration::from_millis(1000));
        let start = Instant::now();
        counter.start(start);

        let value = counter.tick(start + Duration::from_millis(500));
        assert_eq!(value, 50);
        assert!(!counter.is_done());

        let value = counter.tick(start + Duration::from_millis(250 + 500));
        assert_eq!(value, 75);
    }

    #[test]
    fn finished_counter_displays_exactly_the_target() {
        let mut counter = CounterAnimation::with_duration(237, Duration::from_millis(100));
        let start = Instant::now();
        counter.start(start);

        let value = counter.tick(start + Duration::from_millis(150));
        assert_eq!(value, 237);
        assert!(counter.is_done());

        // Further ticks stay pinned at the target.
        assert_eq!(counter.tick(start + Duration::from_secs(10)), 237);
    }

    #[test]
    fn start_is_one_shot() {
        let mut counter = CounterAnimation::with_duration(100, Duration::from_millis(1000));
        let start = Instant::now();
        counter.start(start);

        // A second start later must not rewind the animation.
        counter.start(start + Duration::from_millis(900));
        let value = counter.tick(start + Duration::from_millis(1100));
        assert_eq!(value, 100);
    }
}
