//! Sequential path validation (trail making).

use rand::Rng;
use tracing::debug;

use crate::clock::Millis;
use crate::input::Input;
use crate::rng::RngHandle;
use crate::{Completion, Subtest};

/// Field the nodes are scattered over, in pixels.
pub const FIELD_WIDTH: f64 = 600.0;
pub const FIELD_HEIGHT: f64 = 380.0;
const MARGIN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailPattern {
    /// 1, 2, 3, ...
    Numeric,
    /// 1, A, 2, B, ...
    Alternating,
}

/// Labels in required visiting order.
pub fn labels(n: usize, pattern: TrailPattern) -> Vec<String> {
    let mut number = 1u32;
    let mut letter = 0u8;
    (0..n)
        .map(|i| match pattern {
            TrailPattern::Alternating if i % 2 == 1 => {
                let label = char::from(b'A' + letter % 26).to_string();
                letter = letter.wrapping_add(1);
                label
            }
            _ => {
                let label = number.to_string();
                number += 1;
                label
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrailNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Visit nodes in label order. Only the expected node advances the pointer;
/// any other click counts as an error and changes nothing else. The score is
/// the elapsed time from the start to the last node.
#[derive(Debug)]
pub struct TrailTask {
    count: usize,
    pattern: TrailPattern,
    nodes: Vec<TrailNode>,
    next: usize,
    errors: u32,
    started_at: Option<Millis>,
    done: bool,
}

impl TrailTask {
    pub fn new(count: usize, pattern: TrailPattern) -> Self {
        Self {
            count,
            pattern,
            nodes: Vec::new(),
            next: 0,
            errors: 0,
            started_at: None,
            done: false,
        }
    }

    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Index into the visiting order of the node expected next.
    pub fn pointer(&self) -> usize {
        self.next
    }

    pub fn expected_label(&self) -> Option<&str> {
        self.nodes.get(self.next).map(|n| n.label.as_str())
    }

    fn place(&mut self, rng: &mut RngHandle) {
        self.nodes = labels(self.count, self.pattern)
            .into_iter()
            .map(|label| TrailNode {
                label,
                x: rng.gen_range(MARGIN..FIELD_WIDTH - MARGIN),
                y: rng.gen_range(MARGIN..FIELD_HEIGHT - MARGIN),
            })
            .collect();
    }
}

impl Subtest for TrailTask {
    fn begin(&mut self, now: Millis, rng: &mut RngHandle) -> Option<Completion> {
        if self.started_at.is_some() || self.done {
            return None;
        }
        if self.count == 0 {
            self.done = true;
            return Some(Completion::Unscored);
        }
        self.place(rng);
        self.started_at = Some(now);
        None
    }

    fn handle(&mut self, input: &Input, now: Millis, _rng: &mut RngHandle) -> Option<Completion> {
        let (false, Input::Select { index }, Some(started_at)) = (self.done, input, self.started_at)
        else {
            return None;
        };
        let clicked = self.nodes.get(*index)?;
        if Some(clicked.label.as_str()) != self.expected_label() {
            self.errors += 1;
            return None;
        }

        self.next += 1;
        if self.next < self.nodes.len() {
            return None;
        }
        self.done = true;
        let elapsed = now.saturating_sub(started_at);
        debug!(elapsed, errors = self.errors, "trail finished");
        Some(Completion::Scored(elapsed as f64))
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
