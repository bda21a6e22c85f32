//! Scoped timer handles.
//!
//! A timer belongs to exactly one runner and lives inside that runner's state.
//! Dropping the runner drops its timers, and a runner disarms its timers the
//! moment it completes, so nothing can fire into a finished or disposed task.

use crate::clock::Millis;

pub const TICK_MS: Millis = 1_000;

/// A single-shot or repeating deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerHandle {
    deadline: Option<Millis>,
    period: Option<Millis>,
}

impl TimerHandle {
    pub fn disarmed() -> Self {
        Self::default()
    }

    /// Fires once, `delay` ms after `now`.
    pub fn once(now: Millis, delay: Millis) -> Self {
        Self {
            deadline: Some(now.saturating_add(delay)),
            period: None,
        }
    }

    /// Fires every `period` ms, first at `now + period`.
    pub fn every(now: Millis, period: Millis) -> Self {
        let period = period.max(1);
        Self {
            deadline: Some(now.saturating_add(period)),
            period: Some(period),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
        self.period = None;
    }

    /// Number of firings due at or before `now`.
    ///
    /// A one-shot timer disarms itself after firing; a repeating timer
    /// reschedules past `now`. A disarmed timer always returns 0.
    pub fn fire(&mut self, now: Millis) -> u32 {
        let Some(deadline) = self.deadline else {
            return 0;
        };
        if now < deadline {
            return 0;
        }
        match self.period {
            Some(period) => {
                let fired = (now - deadline) / period + 1;
                self.deadline = Some(deadline + fired * period);
                u32::try_from(fired).unwrap_or(u32::MAX)
            }
            None => {
                self.deadline = None;
                1
            }
        }
    }
}

/// One-second resolution countdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    ticker: TimerHandle,
    remaining: u32,
}

impl Countdown {
    pub fn start(&mut self, now: Millis, seconds: u32) {
        self.remaining = seconds;
        self.ticker = TimerHandle::every(now, TICK_MS);
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn next_tick(&self) -> Option<Millis> {
        self.ticker.deadline()
    }

    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    /// Applies every tick due by `now`. Returns `true` exactly once, on the
    /// call that brings the countdown to zero; the ticker is disarmed then.
    pub fn poll(&mut self, now: Millis) -> bool {
        if !self.ticker.is_armed() {
            return false;
        }
        let ticks = self.ticker.fire(now);
        self.remaining = self.remaining.saturating_sub(ticks);
        if self.remaining == 0 {
            self.ticker.cancel();
            return true;
        }
        false
    }
}
