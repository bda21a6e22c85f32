//! Per-age-group administration parameters.
//!
//! These control how each subtest is run (durations, trial counts, grid
//! sizes). They are independent of the normative bands used for scoring.

use kognit_core::models::subject::AgeGroup;
use kognit_subtests::MAX_GRID_SIDE;
use kognit_subtests::runners::fluency::DEFAULT_CATEGORIES;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CancellationParams {
    pub width: u32,
    pub height: u32,
    pub target_p: f64,
    pub seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdministrationConfig {
    pub tapping_seconds: u32,
    pub reaction_trials: u32,
    pub stroop_trials: u32,
    pub span_start: u32,
    pub span_max: u32,
    pub tone_trials: u32,
    pub tone_diff_hz: u32,
    pub visual_memory_grid: u32,
    pub visual_memory_cells: u32,
    pub search_trials: u32,
    pub search_grid: u32,
    pub cancellation: CancellationParams,
    pub line_choices: u32,
    pub line_tolerance_deg: u32,
    #[serde(default = "default_line_trials")]
    pub line_trials: u32,
    pub trail_a_nodes: u32,
    pub trail_b_nodes: u32,
    pub fluency_seconds: u32,
    #[serde(default = "default_categories")]
    pub fluency_categories: Vec<String>,
    #[serde(default = "default_face_trials")]
    pub face_trials: u32,
    #[serde(default = "default_switch_after")]
    pub card_sort_switch_after: u32,
}

fn default_line_trials() -> u32 {
    20
}

fn default_face_trials() -> u32 {
    12
}

fn default_switch_after() -> u32 {
    kognit_subtests::runners::card_sort::DEFAULT_SWITCH_AFTER
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl AdministrationConfig {
    pub fn for_group(group: AgeGroup) -> Self {
        match group {
            AgeGroup::Child => Self {
                tapping_seconds: 20,
                reaction_trials: 4,
                stroop_trials: 12,
                span_start: 3,
                span_max: 6,
                tone_trials: 10,
                tone_diff_hz: 30,
                visual_memory_grid: 3,
                visual_memory_cells: 3,
                search_trials: 5,
                search_grid: 4,
                cancellation: CancellationParams {
                    width: 10,
                    height: 8,
                    target_p: 0.08,
                    seconds: 45,
                },
                line_choices: 6,
                line_tolerance_deg: 10,
                line_trials: default_line_trials(),
                trail_a_nodes: 16,
                trail_b_nodes: 14,
                fluency_seconds: 60,
                fluency_categories: default_categories(),
                face_trials: default_face_trials(),
                card_sort_switch_after: default_switch_after(),
            },
            AgeGroup::Adult => Self {
                tapping_seconds: 30,
                reaction_trials: 6,
                stroop_trials: 20,
                span_start: 5,
                span_max: 8,
                tone_trials: 14,
                tone_diff_hz: 20,
                visual_memory_grid: 4,
                visual_memory_cells: 5,
                search_trials: 8,
                search_grid: 5,
                cancellation: CancellationParams {
                    width: 14,
                    height: 12,
                    target_p: 0.06,
                    seconds: 35,
                },
                line_choices: 10,
                line_tolerance_deg: 6,
                line_trials: default_line_trials(),
                trail_a_nodes: 20,
                trail_b_nodes: 18,
                fluency_seconds: 60,
                fluency_categories: default_categories(),
                face_trials: default_face_trials(),
                card_sort_switch_after: default_switch_after(),
            },
            AgeGroup::Teen | AgeGroup::Senior => Self {
                tapping_seconds: 25,
                reaction_trials: 5,
                stroop_trials: 16,
                span_start: 4,
                span_max: 7,
                tone_trials: 12,
                tone_diff_hz: if group == AgeGroup::Teen { 25 } else { 30 },
                visual_memory_grid: 3,
                visual_memory_cells: 4,
                search_trials: 6,
                search_grid: 4,
                cancellation: CancellationParams {
                    width: 12,
                    height: 10,
                    target_p: 0.07,
                    seconds: 40,
                },
                line_choices: 8,
                line_tolerance_deg: 8,
                line_trials: default_line_trials(),
                trail_a_nodes: 18,
                trail_b_nodes: 16,
                fluency_seconds: 60,
                fluency_categories: default_categories(),
                face_trials: default_face_trials(),
                card_sort_switch_after: default_switch_after(),
            },
        }
    }
}

/// One [`AdministrationConfig`] per age group. Groups missing from a JSON
/// override keep their built-in parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdministrationTable {
    #[serde(default = "child")]
    pub child: AdministrationConfig,
    #[serde(default = "teen")]
    pub teen: AdministrationConfig,
    #[serde(default = "adult")]
    pub adult: AdministrationConfig,
    #[serde(default = "senior")]
    pub senior: AdministrationConfig,
}

fn child() -> AdministrationConfig {
    AdministrationConfig::for_group(AgeGroup::Child)
}

fn teen() -> AdministrationConfig {
    AdministrationConfig::for_group(AgeGroup::Teen)
}

fn adult() -> AdministrationConfig {
    AdministrationConfig::for_group(AgeGroup::Adult)
}

fn senior() -> AdministrationConfig {
    AdministrationConfig::for_group(AgeGroup::Senior)
}

impl Default for AdministrationTable {
    fn default() -> Self {
        Self {
            child: child(),
            teen: teen(),
            adult: adult(),
            senior: senior(),
        }
    }
}

impl AdministrationTable {
    pub fn get(&self, group: AgeGroup) -> &AdministrationConfig {
        match group {
            AgeGroup::Child => &self.child,
            AgeGroup::Teen => &self.teen,
            AgeGroup::Adult => &self.adult,
            AgeGroup::Senior => &self.senior,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SessionError> {
        let table: Self = serde_json::from_value(value)?;
        table.validate()?;
        Ok(table)
    }

    /// Reject grid sides no runner can lay out.
    pub fn validate(&self) -> Result<(), SessionError> {
        for group in AgeGroup::ALL {
            let config = self.get(group);
            let sides = [
                ("visual_memory_grid", config.visual_memory_grid),
                ("search_grid", config.search_grid),
                ("cancellation.width", config.cancellation.width),
                ("cancellation.height", config.cancellation.height),
            ];
            for (field, value) in sides {
                if value > MAX_GRID_SIDE {
                    return Err(SessionError::GridTooLarge {
                        group: group.as_str(),
                        field,
                        value,
                        max: MAX_GRID_SIDE,
                    });
                }
            }
        }
        Ok(())
    }
}
