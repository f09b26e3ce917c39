//! Lessons module - the interactive tools inside each module.
//!
//! Every tool is plain state plus pure functions; nothing here performs I/O.
//! Most lessons contrast the same two fictional businesses: Finley & Co (a
//! compliance-heavy consultancy) and BrightCart (an online retailer).

mod crisp;
mod data_security;
mod grounding;
mod temperature;
mod tokens;

use serde::{Deserialize, Serialize};

pub use crisp::CrispPrompt;
pub use data_security::{
    AnonymizationExercise, DataRisk, RiskKind, SecurityScenario, Severity,
};
pub use grounding::{GroundingComparison, GroundingResult, GroundingScenario};
pub use temperature::{SimulatorMode, SimulatorOutput, TemperatureSimulator, TemperatureTier};
pub use tokens::{estimate_tokens, TokenEstimate, TokenEstimator, COST_PER_THOUSAND_TOKENS_USD};

/// The two recurring business case studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudy {
    Finley,
    BrightCart,
}

impl CaseStudy {
    pub fn display_name(&self) -> &'static str {
        match self {
            CaseStudy::Finley => "Finley & Co",
            CaseStudy::BrightCart => "BrightCart",
        }
    }
}
