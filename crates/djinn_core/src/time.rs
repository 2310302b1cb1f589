//! Fixed-step frame clock
//!
//! Scripts receive a delta time per frame; the reference runtime advances in
//! fixed ticks so replays are identical.

use std::time::Duration;

/// Default simulation tick rate (60 Hz = 16.666ms per tick)
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Simulation time tracker
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_rate_hz: u32,
    tick_duration: Duration,
    tick_count: u64,
    accumulated_time: Duration,
}

impl FrameClock {
    /// A tick rate of zero is clamped to 1 Hz.
    pub fn new(tick_rate_hz: u32) -> Self {
        let tick_rate_hz = tick_rate_hz.max(1);
        Self {
            tick_rate_hz,
            tick_duration: Duration::from_secs_f64(1.0 / tick_rate_hz as f64),
            tick_count: 0,
            accumulated_time: Duration::ZERO,
        }
    }

    pub fn tick_rate_hz(&self) -> u32 {
        self.tick_rate_hz
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Seconds per tick, as handed to script update hooks.
    pub fn dt(&self) -> f32 {
        self.tick_duration.as_secs_f32()
    }

    pub fn advance_tick(&mut self) {
        self.tick_count += 1;
        self.accumulated_time += self.tick_duration;
    }

    pub fn total_time(&self) -> Duration {
        self.accumulated_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_HZ)
    }
}
