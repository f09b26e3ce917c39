//! Closed vocabularies that describe a learner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// What the learner mainly wants to use AI for at work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    #[default]
    Writing,
    Analysis,
    Coding,
    Research,
    CustomerService,
}

impl UseCase {
    /// All use cases in intake-form order.
    pub fn all() -> &'static [UseCase] {
        &[
            UseCase::Writing,
            UseCase::Analysis,
            UseCase::Coding,
            UseCase::Research,
            UseCase::CustomerService,
        ]
    }

    /// Machine identifier (`customer_service`).
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::Writing => "writing",
            UseCase::Analysis => "analysis",
            UseCase::Coding => "coding",
            UseCase::Research => "research",
            UseCase::CustomerService => "customer_service",
        }
    }

    /// Identifier with the underscore replaced by a space (`customer service`).
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// True for the use cases that get the tagged-markup prompt template.
    pub fn prefers_structured_markup(&self) -> bool {
        matches!(self, UseCase::Writing | UseCase::Analysis)
    }
}

/// How the learner prefers AI output to be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Structured,
    #[default]
    Balanced,
    Flexible,
}

impl WorkStyle {
    pub fn all() -> &'static [WorkStyle] {
        &[WorkStyle::Structured, WorkStyle::Balanced, WorkStyle::Flexible]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStyle::Structured => "structured",
            WorkStyle::Balanced => "balanced",
            WorkStyle::Flexible => "flexible",
        }
    }

    /// Intake form caption.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkStyle::Structured => "Structured & Formal",
            WorkStyle::Balanced => "Balanced",
            WorkStyle::Flexible => "Flexible & Creative",
        }
    }
}

/// How strict the learner wants safety guardrails to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Cautious,
    #[default]
    Moderate,
    Experimental,
}

impl RiskTolerance {
    pub fn all() -> &'static [RiskTolerance] {
        &[
            RiskTolerance::Cautious,
            RiskTolerance::Moderate,
            RiskTolerance::Experimental,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Cautious => "cautious",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Experimental => "experimental",
        }
    }

    /// Intake form caption.
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTolerance::Cautious => "Cautious (Zero Risk)",
            RiskTolerance::Moderate => "Moderate (Standard)",
            RiskTolerance::Experimental => "Experimental (Low Guardrails)",
        }
    }
}

/// Proficiency tier assigned once from the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Foundation,
    Practitioner,
    Advanced,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Foundation => "foundation",
            Track::Practitioner => "practitioner",
            Track::Advanced => "advanced",
        }
    }
}

macro_rules! str_enum_traits {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $ty::variants()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        ValidationError::invalid_format($field, format!("unknown value '{}'", s))
                    })
            }
        }
    };
}

impl UseCase {
    fn variants() -> &'static [UseCase] {
        Self::all()
    }
}

impl WorkStyle {
    fn variants() -> &'static [WorkStyle] {
        Self::all()
    }
}

impl RiskTolerance {
    fn variants() -> &'static [RiskTolerance] {
        Self::all()
    }
}

impl Track {
    fn variants() -> &'static [Track] {
        &[Track::Foundation, Track::Practitioner, Track::Advanced]
    }
}

str_enum_traits!(UseCase, "primary_use_case");
str_enum_traits!(WorkStyle, "work_style");
str_enum_traits!(RiskTolerance, "risk_tolerance");
str_enum_traits!(Track, "track");
