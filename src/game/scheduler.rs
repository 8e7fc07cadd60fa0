//! Fixed-rate gating for simulation updates and redraws.
//!
//! The scheduler never reads a clock itself. Callers pass a monotonic
//! millisecond timestamp each iteration (see [`MonotonicClock`]), which keeps
//! the gates deterministic under test.

use std::time::Instant;

/// A single fixed-rate gate.
///
/// The first poll only arms the gate. After that, a poll at `now` fires when
/// more than `1000 / rate_hz` milliseconds have passed since the last time it
/// fired, i.e. when `(now - last) * rate_hz > 1000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateGate {
    last: Option<u64>,
}

impl RateGate {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Timestamp of the last time the gate fired or was armed
    pub fn last(&self) -> Option<u64> {
        self.last
    }

    pub fn poll(&mut self, now: u64, rate_hz: u32) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return false;
        };

        let elapsed = now.saturating_sub(last);
        if elapsed.saturating_mul(u64::from(rate_hz)) > 1000 {
            self.last = Some(now);
            true
        } else {
            false
        }
    }

    /// Forget the last timestamp; the next poll re-arms
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Independent update and draw gates
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    update: RateGate,
    draw: RateGate,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_update(&mut self, now: u64, update_rate_hz: u32) -> bool {
        self.update.poll(now, update_rate_hz)
    }

    pub fn should_draw(&mut self, now: u64, draw_rate_hz: u32) -> bool {
        self.draw.poll(now, draw_rate_hz)
    }

    /// Re-arm the update gate so the next update waits a full interval
    pub fn reset_update(&mut self) {
        self.update.reset();
    }

    pub fn last_update(&self) -> Option<u64> {
        self.update.last()
    }

    pub fn last_draw(&self) -> Option<u64> {
        self.draw.last()
    }
}

/// Milliseconds elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
