//! UserProfile - the learner record the journey refines step by step.

use serde::{Deserialize, Serialize};

use super::{RiskTolerance, Track, UseCase, WorkStyle};
use crate::domain::foundation::Score;

/// Flat description of a learner.
///
/// Seeded by intake, refined by the diagnostic and by module quiz results.
/// Only the journey controller writes to a profile held in `AppState`; the
/// `with_*` methods build standalone values (fixtures, previews).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub(crate) name: String,
    pub(crate) primary_use_case: UseCase,
    pub(crate) work_style: WorkStyle,
    pub(crate) risk_tolerance: RiskTolerance,
    pub(crate) track: Track,
    pub(crate) technical_comfort: Score,
    pub(crate) prefers_precision: bool,
    pub(crate) prefers_creativity: bool,
    pub(crate) security_conscious: Score,
}

impl UserProfile {
    /// Creates the default profile (empty name, writing, balanced, moderate).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_use_case(mut self, use_case: UseCase) -> Self {
        self.primary_use_case = use_case;
        self
    }

    pub fn with_work_style(mut self, work_style: WorkStyle) -> Self {
        self.work_style = work_style;
        self
    }

    pub fn with_risk_tolerance(mut self, risk_tolerance: RiskTolerance) -> Self {
        self.risk_tolerance = risk_tolerance;
        self
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    pub fn with_technical_comfort(mut self, score: Score) -> Self {
        self.technical_comfort = score;
        self
    }

    pub fn with_precision(mut self, prefers_precision: bool) -> Self {
        self.prefers_precision = prefers_precision;
        self
    }

    pub fn with_creativity(mut self, prefers_creativity: bool) -> Self {
        self.prefers_creativity = prefers_creativity;
        self
    }

    pub fn with_security_conscious(mut self, score: Score) -> Self {
        self.security_conscious = score;
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Name exactly as entered at intake (surrounding whitespace kept).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_use_case(&self) -> UseCase {
        self.primary_use_case
    }

    pub fn work_style(&self) -> WorkStyle {
        self.work_style
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        self.risk_tolerance
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Diagnostic score.
    pub fn technical_comfort(&self) -> Score {
        self.technical_comfort
    }

    pub fn prefers_precision(&self) -> bool {
        self.prefers_precision
    }

    pub fn prefers_creativity(&self) -> bool {
        self.prefers_creativity
    }

    /// Module 5 quiz score; zero until that module is completed.
    pub fn security_conscious(&self) -> Score {
        self.security_conscious
    }
}
