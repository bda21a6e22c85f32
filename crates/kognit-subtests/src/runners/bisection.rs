//! Line bisection.

use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

pub const LINE_WIDTH: f64 = 400.0;

/// One click on a horizontal line; the raw value is the rounded distance from
/// the true midpoint. Saving without a click is ignored.
#[derive(Debug, Default)]
pub struct BisectionTask {
    position: Option<f64>,
    done: bool,
}

impl BisectionTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<f64> {
        self.position
    }

    pub fn deviation(&self) -> Option<f64> {
        self.position.map(|x| (x - LINE_WIDTH / 2.0).abs())
    }
}

impl Subtest for BisectionTask {
    fn begin(&mut self, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        None
    }

    fn handle(&mut self, input: &Input, _now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        if self.done {
            return None;
        }
        match *input {
            Input::Position { x } if x.is_finite() => {
                self.position = Some(x);
                None
            }
            Input::Finish => {
                let deviation = self.deviation()?;
                self.done = true;
                debug!(deviation, "bisection saved");
                Some(Completion::scored(deviation.round()))
            }
            _ => None,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
