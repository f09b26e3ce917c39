//! Events that drive a journey forward.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::classify;
use crate::domain::curriculum::ModuleId;
use crate::domain::foundation::{Score, ValidationError};
use crate::domain::profile::{RiskTolerance, Track, UseCase, WorkStyle};

/// Intake form contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeSubmission {
    name: String,
    use_case: UseCase,
    work_style: WorkStyle,
    risk_tolerance: RiskTolerance,
}

impl IntakeSubmission {
    /// Creates a submission. The name is stored as entered but must contain
    /// something other than whitespace.
    pub fn new(
        name: impl Into<String>,
        use_case: UseCase,
        work_style: WorkStyle,
        risk_tolerance: RiskTolerance,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            use_case,
            work_style,
            risk_tolerance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn use_case(&self) -> UseCase {
        self.use_case
    }

    pub fn work_style(&self) -> WorkStyle {
        self.work_style
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        self.risk_tolerance
    }
}

/// Result of the placement diagnostic. The track is always derived from the
/// score, so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagnosticOutcome {
    score: Score,
    track: Track,
}

impl DiagnosticOutcome {
    pub fn from_score(score: Score) -> Self {
        Self {
            score,
            track: classify(score),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn track(&self) -> Track {
        self.track
    }
}

/// Input to [`AppState::apply`](super::AppState::apply).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JourneyEvent {
    IntakeSubmitted(IntakeSubmission),
    DiagnosticCompleted(DiagnosticOutcome),
    ModuleCompleted { module: ModuleId, score: Score },
}

impl JourneyEvent {
    /// Stable event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyEvent::IntakeSubmitted(_) => "intake_submitted",
            JourneyEvent::DiagnosticCompleted(_) => "diagnostic_completed",
            JourneyEvent::ModuleCompleted { .. } => "module_completed",
        }
    }
}

impl From<IntakeSubmission> for JourneyEvent {
    fn from(submission: IntakeSubmission) -> Self {
        JourneyEvent::IntakeSubmitted(submission)
    }
}

impl From<DiagnosticOutcome> for JourneyEvent {
    fn from(outcome: DiagnosticOutcome) -> Self {
        JourneyEvent::DiagnosticCompleted(outcome)
    }
}
