//! Clock setting to a fixed target time.

use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

pub const TARGET_HOUR: f64 = 11.0;
pub const TARGET_MINUTE: f64 = 10.0;

/// Points for a set hour and minute, out of 10.
pub fn clock_points(hour: f64, minute: f64) -> u32 {
    let mut points = 0;
    if (1.0..=12.0).contains(&hour) {
        points += 3;
    }
    if (0.0..60.0).contains(&minute) {
        points += 3;
    }
    if minute != 0.0 && minute % 5.0 == 0.0 {
        points += 2;
    }
    if hour == TARGET_HOUR && minute == TARGET_MINUTE {
        points += 2;
    }
    points
}

/// The subject sets the hands (entered as hour and minute); the operator
/// saves. Starts on the target time, like a pre-filled form.
#[derive(Debug)]
pub struct ClockTask {
    hour: f64,
    minute: f64,
    done: bool,
}

impl Default for ClockTask {
    fn default() -> Self {
        Self {
            hour: TARGET_HOUR,
            minute: TARGET_MINUTE,
            done: false,
        }
    }
}

impl ClockTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> (f64, f64) {
        (self.hour, self.minute)
    }

    pub fn points(&self) -> u32 {
        clock_points(self.hour, self.minute)
    }
}

impl Subtest for ClockTask {
    fn begin(&mut self, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        match *input {
            Input::ClockTime { hour, minute } => {
                if hour.is_finite() && minute.is_finite() {
                    self.hour = hour;
                    self.minute = minute;
                }
                None
            }
            Input::Finish => {
                self.done = true;
                debug!(hour = self.hour, minute = self.minute, "clock saved");
                Some(Completion::Scored(f64::from(self.points())))
            }
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
