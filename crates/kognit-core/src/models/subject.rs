use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Below this age the intake asks whether the subject can read and count.
pub const CAPABILITY_GATE_AGE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    #[default]
    Male,
    Other,
}

/// Demographic intake for one assessment run.
///
/// `sex` is informational only. The two capability flags are asked only for
/// subjects younger than [`CAPABILITY_GATE_AGE`]; `None` means "not asked" or
/// "not answered" and is treated as "no" by the gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectProfile {
    pub age: u32,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub literacy_known: Option<bool>,
    #[serde(default)]
    pub counting_known: Option<bool>,
}

impl SubjectProfile {
    pub fn new(age: u32, sex: Sex) -> Self {
        Self {
            age,
            sex,
            literacy_known: None,
            counting_known: None,
        }
    }

    pub fn with_capabilities(mut self, literacy: Option<bool>, counting: Option<bool>) -> Self {
        self.literacy_known = literacy;
        self.counting_known = counting;
        self
    }

    /// Whether the intake should show the reading/counting questions.
    pub fn asks_capabilities(&self) -> bool {
        self.age < CAPABILITY_GATE_AGE
    }

    /// Reading/writing dependent subtests are administered.
    pub fn literacy_gate_open(&self) -> bool {
        self.age >= CAPABILITY_GATE_AGE || self.literacy_known == Some(true)
    }

    /// Subtests presuming numeral/letter familiarity are administered.
    pub fn counting_gate_open(&self) -> bool {
        self.age >= CAPABILITY_GATE_AGE || self.counting_known == Some(true)
    }

    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }
}

/// Administration-parameter bucket. Independent of normative band selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeGroup::Child,
            13..=17 => AgeGroup::Teen,
            18..=59 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

/// Inclusive age range in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}
