use std::collections::BTreeMap;

use kognit_core::models::export::{AssessmentExport, ExportMeta};
use kognit_core::models::metric::MetricKey;
use kognit_core::models::result::{MetricResult, ScoreSummary};
use kognit_core::models::step::Step;
use kognit_core::models::subject::SubjectProfile;
use kognit_norms::scoring::ScoreEntry;
use kognit_norms::{Battery, require_battery};
use kognit_subtests::clock::Millis;
use kognit_subtests::input::Input;
use kognit_subtests::rng::RngHandle;
use kognit_subtests::{Completion, Runner, Subtest};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::{AdministrationConfig, AdministrationTable};
use crate::error::SessionError;
use crate::sequencer;
use crate::store::ScoreStore;

pub const DEFAULT_BATTERY: &str = "standard";

/// Everything the presentation layer renders, derived from the raw scores on
/// every call.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentView {
    pub step: Step,
    pub step_name: String,
    pub step_index: usize,
    pub step_count: usize,
    pub scores: BTreeMap<MetricKey, f64>,
    pub computed: BTreeMap<MetricKey, MetricResult>,
    pub summary: ScoreSummary,
}

/// One assessment run.
///
/// All time is supplied by the caller as monotonic milliseconds. Due runner
/// timers are always applied before an input stamped with the same or a
/// later time, so replaying a recorded event stream reproduces the run.
pub struct Session {
    id: Uuid,
    battery: Box<dyn Battery>,
    profile: SubjectProfile,
    table: AdministrationTable,
    steps: Vec<Step>,
    index: usize,
    store: ScoreStore,
    active: Option<Runner>,
    rng: RngHandle,
    notes: String,
    now: Millis,
}

impl Session {
    pub fn new(profile: SubjectProfile, rng: RngHandle) -> Self {
        Self::with_parts(
            profile,
            rng,
            Box::new(kognit_norms::batteries::standard::StandardBattery),
            AdministrationTable::default(),
        )
    }

    pub fn with_battery(
        profile: SubjectProfile,
        rng: RngHandle,
        battery_id: &str,
        table: AdministrationTable,
    ) -> Result<Self, SessionError> {
        let battery = require_battery(battery_id)?;
        Ok(Self::with_parts(profile, rng, battery, table))
    }

    fn with_parts(
        profile: SubjectProfile,
        rng: RngHandle,
        battery: Box<dyn Battery>,
        table: AdministrationTable,
    ) -> Self {
        let steps = sequencer::plan_steps(&profile);
        let id = Uuid::new_v4();
        info!(
            %id,
            battery = battery.id(),
            age = profile.age,
            steps = steps.len(),
            "session started"
        );
        Self {
            id,
            battery,
            profile,
            table,
            steps,
            index: 0,
            store: ScoreStore::new(),
            active: None,
            rng,
            notes: String::new(),
            now: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &SubjectProfile {
        &self.profile
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Step {
        self.steps[self.index]
    }

    /// Administration parameters for the subject's current age group.
    pub fn config(&self) -> &AdministrationConfig {
        self.table.get(self.profile.age_group())
    }

    /// The runner of the current step, if it has one and has not finished.
    pub fn runner(&self) -> Option<&Runner> {
        self.active.as_ref()
    }

    pub fn scores(&self) -> &BTreeMap<MetricKey, f64> {
        self.store.scores()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Replace the profile and re-plan the steps.
    ///
    /// The current step is kept when it is still planned, runner included.
    /// Otherwise the index is clamped into the new list and that step starts.
    /// Recorded scores are never discarded.
    pub fn update_profile(&mut self, profile: SubjectProfile, now: Millis) {
        self.now = self.now.max(now);
        let current = self.current_step();
        self.profile = profile;
        self.steps = sequencer::plan_steps(&self.profile);
        match self.steps.iter().position(|s| *s == current) {
            Some(index) => self.index = index,
            None => {
                self.index = self.index.min(self.steps.len() - 1);
                info!(
                    removed = current.name(),
                    now_at = self.current_step().name(),
                    "current step no longer planned"
                );
                self.enter(self.now);
            }
        }
    }

    /// (Re)start the current step.
    pub fn begin(&mut self, now: Millis) {
        self.now = self.now.max(now);
        self.enter(self.now);
    }

    pub fn next(&mut self, now: Millis) {
        self.advance(now);
        self.go_to(sequencer::step_forward(self.index, self.steps.len()), self.now);
    }

    pub fn previous(&mut self, now: Millis) {
        self.advance(now);
        self.go_to(sequencer::step_back(self.index), self.now);
    }

    /// Apply every runner timer due by `now`, each at its own deadline.
    pub fn advance(&mut self, now: Millis) {
        self.now = self.now.max(now);
        let now = self.now;
        loop {
            let Some(runner) = self.active.as_mut() else {
                return;
            };
            let Some(due) = runner.next_deadline().filter(|d| *d <= now) else {
                break;
            };
            match runner.poll(due, &mut self.rng) {
                Some(completion) => self.finish(completion, due),
                None if runner.next_deadline() == Some(due) => break,
                None => {}
            }
        }
        if let Some(runner) = self.active.as_mut()
            && let Some(completion) = runner.poll(now, &mut self.rng)
        {
            self.finish(completion, now);
        }
    }

    /// Deliver a subject or operator action to the current step.
    pub fn input(&mut self, input: &Input, now: Millis) {
        self.advance(now);
        let now = self.now;
        let Some(runner) = self.active.as_mut() else {
            debug!(step = self.current_step().name(), "input with no active runner");
            return;
        };
        if let Some(completion) = runner.handle(input, now, &mut self.rng) {
            self.finish(completion, now);
        }
    }

    /// Validate and store externally collected scores. Nothing is stored if
    /// any entry is invalid.
    pub fn import_scores(&mut self, entries: &[ScoreEntry]) -> Result<usize, SessionError> {
        let scores = self.battery.collect_scores(entries)?;
        let count = scores.len();
        for (key, raw) in scores {
            self.store.record(key, raw);
        }
        Ok(count)
    }

    pub fn view(&self) -> AssessmentView {
        let computed = self.battery.evaluate(self.profile.age, self.store.scores());
        let summary = self.battery.summarize(&computed);
        let step = self.current_step();
        AssessmentView {
            step,
            step_name: step.name().to_string(),
            step_index: self.index,
            step_count: self.steps.len(),
            scores: self.store.scores().clone(),
            computed,
            summary,
        }
    }

    /// Plain-text results, one section per domain.
    pub fn structured_text(&self) -> String {
        let view = self.view();
        self.battery.to_structured_text(&view.computed, &view.summary)
    }

    pub fn export(&self, generated_at: jiff::Timestamp) -> AssessmentExport {
        let view = self.view();
        let export = AssessmentExport {
            id: self.id,
            meta: ExportMeta {
                subject: self.profile.clone(),
                age_group: self.profile.age_group(),
                band: self.battery.pick_band(self.profile.age).range,
                steps: self.steps.clone(),
                generated_at,
            },
            scores: view.scores,
            computed: view.computed,
            summary: view.summary,
            notes: self.notes.clone(),
        };
        info!(
            id = %export.id,
            file = %export.file_name(),
            scores = export.scores.len(),
            "export built"
        );
        export
    }

    fn go_to(&mut self, index: usize, now: Millis) {
        if index == self.index {
            return;
        }
        self.index = index;
        self.enter(now);
    }

    /// Drop any previous runner and start the one for the current step.
    fn enter(&mut self, now: Millis) {
        let step = self.current_step();
        info!(step = step.name(), index = self.index, "step entered");
        self.active = sequencer::runner_for(step, self.config());
        if let Some(runner) = self.active.as_mut()
            && let Some(completion) = runner.begin(now, &mut self.rng)
        {
            self.finish(completion, now);
        }
    }

    /// Record the outcome of the current step and move on.
    fn finish(&mut self, completion: Completion, now: Millis) {
        let step = self.current_step();
        self.active = None;
        match (step.metric(), completion.raw()) {
            (Some(key), Some(raw)) => {
                self.store.record(key, raw);
            }
            _ => info!(step = step.name(), "step finished without a score"),
        }
        self.go_to(sequencer::step_forward(self.index, self.steps.len()), now);
    }
}
