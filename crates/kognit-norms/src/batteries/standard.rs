use std::sync::LazyLock;

use kognit_core::models::metric::{Direction, DomainId, MetricKey};
use kognit_core::models::subject::AgeRange;

use crate::Battery;
use crate::scoring::{DomainDefinition, MetricDefinition, NormBand, NormParams};

/// The mixed digital battery: 22 metrics across cognitive, motor, auditory,
/// visual, and executive domains, normed in four age bands.
///
/// The parameters are illustrative starting values, not calibrated norms.
pub struct StandardBattery;

/// Index into [`BANDS`] of the 18–59 band, used for out-of-range ages.
const ADULT_BAND: usize = 2;

use MetricKey::*;

// Column order shared by every band row below.
const COLUMNS: [MetricKey; 22] = [
    Attention,
    WorkingMemory,
    VerbalFluency,
    Similarity,
    Orientation,
    Tapping,
    ReactionTime,
    ToneDiscrimination,
    AuditorySpan,
    VisualMemory,
    VisualSearch,
    Cancellation,
    LineOrientation,
    TrailA,
    TrailB,
    LineBisection,
    ClockDrawing,
    ComplexFigure,
    FaceDiscrimination,
    StoryRecall,
    CardSort,
    Alternation,
];

#[rustfmt::skip]
const BAND_ROWS: [(u32, u32, [(f64, f64); 22]); 4] = [
    (0, 12, [
        (18.0, 6.0), (3.5, 1.0), (10.0, 3.0), (6.0, 2.0), (5.0, 1.5),
        (60.0, 12.0), (480.0, 90.0),
        (14.0, 4.0), (3.2, 0.8),
        (12.0, 4.0), (1100.0, 200.0), (28.0, 7.0), (10.0, 3.0), (60000.0, 12000.0), (80000.0, 15000.0),
        (8.0, 4.0), (6.0, 2.0), (10.0, 3.0), (8.0, 2.0), (6.0, 2.0),
        (16.0, 5.0), (12.0, 3.0),
    ]),
    (13, 17, [
        (22.0, 6.0), (4.5, 1.0), (15.0, 4.0), (8.0, 2.0), (6.0, 1.2),
        (70.0, 12.0), (420.0, 80.0),
        (16.0, 4.0), (4.0, 0.8),
        (14.0, 3.0), (950.0, 180.0), (36.0, 7.0), (12.0, 3.0), (45000.0, 9000.0), (62000.0, 12000.0),
        (6.0, 3.0), (7.0, 2.0), (12.0, 3.0), (9.0, 2.0), (8.0, 2.0),
        (20.0, 5.0), (14.0, 3.0),
    ]),
    (18, 59, [
        (25.0, 5.0), (5.0, 1.0), (18.0, 4.0), (9.0, 2.0), (6.0, 1.0),
        (80.0, 12.0), (380.0, 70.0),
        (18.0, 4.0), (4.5, 0.8),
        (16.0, 3.0), (900.0, 160.0), (45.0, 8.0), (15.0, 3.0), (35000.0, 8000.0), (52000.0, 10000.0),
        (5.0, 2.0), (8.0, 2.0), (14.0, 3.0), (10.0, 2.0), (10.0, 2.0),
        (24.0, 5.0), (16.0, 3.0),
    ]),
    (60, 120, [
        (22.0, 6.0), (4.0, 1.0), (14.0, 4.0), (8.0, 2.0), (5.5, 1.0),
        (70.0, 12.0), (420.0, 80.0),
        (16.0, 4.0), (3.6, 0.8),
        (14.0, 3.0), (980.0, 180.0), (34.0, 7.0), (12.0, 3.0), (42000.0, 9000.0), (65000.0, 12000.0),
        (6.0, 3.0), (7.0, 2.0), (12.0, 3.0), (9.0, 2.0), (8.0, 2.0),
        (20.0, 5.0), (14.0, 3.0),
    ]),
];

static BANDS: LazyLock<Vec<NormBand>> = LazyLock::new(|| {
    BAND_ROWS
        .iter()
        .map(|(min_age, max_age, row)| NormBand {
            range: AgeRange {
                min_age: *min_age,
                max_age: *max_age,
            },
            params: COLUMNS
                .iter()
                .zip(row)
                .map(|(key, (mean, sd))| {
                    (
                        *key,
                        NormParams {
                            mean: *mean,
                            sd: *sd,
                        },
                    )
                })
                .collect(),
        })
        .collect()
});

impl Battery for StandardBattery {
    fn id(&self) -> &str {
        "standard"
    }

    fn name(&self) -> &str {
        "Mixed Digital Assessment"
    }

    fn metrics(&self) -> &[MetricDefinition] {
        static METRICS: LazyLock<Vec<MetricDefinition>> = LazyLock::new(|| {
            vec![
                higher(Attention, "Attention / Stroop (correct)"),
                higher(WorkingMemory, "Working Memory (span)"),
                higher(VerbalFluency, "Verbal Fluency (correct)"),
                higher(Similarity, "Similarity / Judgement (correct)"),
                higher(Orientation, "Orientation (correct)"),
                higher(Tapping, "Tapping (count)"),
                lower(ReactionTime, "Reaction (ms)"),
                higher(ToneDiscrimination, "Tone Discrimination (correct)"),
                higher(AuditorySpan, "Auditory Sequence (span)"),
                higher(VisualMemory, "Visual Memory (correct)"),
                lower(VisualSearch, "Visual Search (ms)"),
                higher(Cancellation, "Cancellation (net)"),
                higher(LineOrientation, "Line Orientation (correct)"),
                lower(TrailA, "Trail Making A (ms)"),
                lower(TrailB, "Trail Making B (ms)"),
                lower(LineBisection, "Line Bisection (px deviation)"),
                higher(ClockDrawing, "Clock Drawing (points)"),
                higher(ComplexFigure, "Complex Figure (points)"),
                higher(FaceDiscrimination, "Face Discrimination (correct)"),
                higher(StoryRecall, "Story Recall (points)"),
                higher(CardSort, "Card Sort (correct)"),
                higher(Alternation, "Alternating Sequences (correct)"),
            ]
        });
        &METRICS
    }

    fn domains(&self) -> &[DomainDefinition] {
        static DOMAINS: LazyLock<Vec<DomainDefinition>> = LazyLock::new(|| {
            vec![
                domain(
                    DomainId::Cognitive,
                    "Cognitive",
                    &[Attention, WorkingMemory, VerbalFluency, Similarity, Orientation],
                ),
                domain(DomainId::Motor, "Motor", &[Tapping, ReactionTime]),
                domain(
                    DomainId::Auditory,
                    "Auditory",
                    &[ToneDiscrimination, AuditorySpan],
                ),
                domain(
                    DomainId::Visual,
                    "Visual",
                    &[
                        VisualMemory,
                        VisualSearch,
                        Cancellation,
                        LineOrientation,
                        TrailA,
                        TrailB,
                        LineBisection,
                        ClockDrawing,
                        ComplexFigure,
                        FaceDiscrimination,
                        StoryRecall,
                    ],
                ),
                domain(DomainId::Executive, "Executive", &[CardSort, Alternation]),
            ]
        });
        &DOMAINS
    }

    fn bands(&self) -> &[NormBand] {
        &BANDS
    }

    fn default_band(&self) -> &NormBand {
        &BANDS[ADULT_BAND]
    }
}

fn higher(key: MetricKey, label: &str) -> MetricDefinition {
    MetricDefinition {
        key,
        label: label.to_string(),
        direction: Direction::HigherIsBetter,
    }
}

fn lower(key: MetricKey, label: &str) -> MetricDefinition {
    MetricDefinition {
        key,
        label: label.to_string(),
        direction: Direction::LowerIsBetter,
    }
}

fn domain(id: DomainId, name: &str, metrics: &[MetricKey]) -> DomainDefinition {
    DomainDefinition {
        id,
        name: name.to_string(),
        metrics: metrics.to_vec(),
    }
}
