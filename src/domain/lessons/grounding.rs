//! Grounded vs. non-grounded comparison (module 4).

use serde::Serialize;

use super::CaseStudy;

/// One answer to the scenario query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroundingResult {
    pub grounded: bool,
    pub response: &'static str,
    /// Problems for the static answer, benefits for the grounded one.
    pub points: &'static [&'static str],
    pub verdict: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroundingScenario {
    pub query: &'static str,
    pub non_grounded: GroundingResult,
    pub grounded: GroundingResult,
}

const FINLEY: GroundingScenario = GroundingScenario {
    query: "What are the current FCA regulations on AI disclosure for financial advice?",
    non_grounded: GroundingResult {
        grounded: false,
        response: "According to the FCA guidelines from 2022, firms must disclose when AI is used in financial advice. The key regulation is FCA Handbook SYSC 8.1.4 which requires clear documentation of algorithmic decision-making.",
        points: &[
            "FCA updated AI guidance in March 2024 - this response misses 2 years of regulatory change",
            "SYSC 8.1.4 doesn't exist - the model hallucinated a plausible-sounding reference",
            "Client could receive non-compliant advice based on outdated information",
        ],
        verdict: "DANGEROUS - Regulatory advice requires current data",
    },
    grounded: GroundingResult {
        grounded: true,
        response: "Based on current FCA guidance (last updated March 2024), firms using AI in financial advice must: (1) Clearly disclose AI involvement to consumers, (2) Maintain human oversight per Consumer Duty requirements, (3) Document decision-making processes. Source: FCA.org.uk/publications/guidance/ai-machine-learning",
        points: &[
            "Cites the actual March 2024 update with source URL",
            "References real regulatory framework (Consumer Duty)",
            "Client receives accurate, defensible advice",
        ],
        verdict: "SAFE - Verifiable, current, citable",
    },
};

const BRIGHTCART: GroundingScenario = GroundingScenario {
    query: "Is the Patagonia Better Sweater currently in stock in size Medium?",
    non_grounded: GroundingResult {
        grounded: false,
        response: "The Patagonia Better Sweater is a popular fleece jacket available in sizes XS-XXL. It typically retails for around $139 and comes in various colors including black, navy, and grey.",
        points: &[
            "Doesn't answer the actual question - is it IN STOCK right now?",
            "Price may be outdated (Patagonia updated pricing in 2024)",
            "Customer leaves without the information they need",
        ],
        verdict: "USELESS - Generic info doesn't help the customer buy",
    },
    grounded: GroundingResult {
        grounded: true,
        response: "Checking BrightCart inventory... The Patagonia Better Sweater in Medium is currently: \u{2713} In stock (3 units) in Black, \u{2717} Out of stock in Navy (restocking Thursday), \u{2713} In stock (1 unit) in Grey. Current price: $149. Would you like me to reserve one?",
        points: &[
            "Answers the exact question with real-time inventory",
            "Provides actionable next steps (reserve option)",
            "Customer can make an immediate purchase decision",
        ],
        verdict: "CONVERSION - Real data drives real sales",
    },
};

impl GroundingScenario {
    pub fn for_case(case: CaseStudy) -> &'static GroundingScenario {
        match case {
            CaseStudy::Finley => &FINLEY,
            CaseStudy::BrightCart => &BRIGHTCART,
        }
    }
}

/// Scenario picker plus a grounding toggle that reveals the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundingComparison {
    case: Option<CaseStudy>,
    grounded: bool,
    show_result: bool,
}

impl GroundingComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a scenario and resets the toggle and the revealed result.
    pub fn select(&mut self, case: CaseStudy) {
        self.case = Some(case);
        self.grounded = false;
        self.show_result = false;
    }

    /// Flips grounding on or off and reveals the matching answer.
    pub fn toggle_grounding(&mut self) {
        self.grounded = !self.grounded;
        self.show_result = true;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn scenario(&self) -> Option<&'static GroundingScenario> {
        self.case.map(GroundingScenario::for_case)
    }

    /// Revealed answer, if a scenario is picked and the toggle was used.
    pub fn result(&self) -> Option<&'static GroundingResult> {
        if !self.show_result {
            return None;
        }
        self.scenario().map(|s| {
            if self.grounded {
                &s.grounded
            } else {
                &s.non_grounded
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_revealed_until_toggled() {
        let mut comparison = GroundingComparison::new();
        assert!(comparison.result().is_none());
        comparison.select(CaseStudy::Finley);
        assert!(comparison.scenario().unwrap().query.contains("FCA"));
        assert!(comparison.result().is_none());
    }

    #[test]
    fn toggle_alternates_between_answers() {
        let mut comparison = GroundingComparison::new();
        comparison.select(CaseStudy::BrightCart);

        comparison.toggle_grounding();
        let result = comparison.result().unwrap();
        assert!(result.grounded);
        assert_eq!(result.verdict, "CONVERSION - Real data drives real sales");

        comparison.toggle_grounding();
        let result = comparison.result().unwrap();
        assert!(!result.grounded);
        assert!(result.verdict.starts_with("USELESS"));
    }

    #[test]
    fn selecting_resets_toggle() {
        let mut comparison = GroundingComparison::new();
        comparison.select(CaseStudy::Finley);
        comparison.toggle_grounding();
        comparison.select(CaseStudy::BrightCart);
        assert!(!comparison.is_grounded());
        assert!(comparison.result().is_none());
    }

    #[test]
    fn toggle_without_scenario_reveals_nothing() {
        let mut comparison = GroundingComparison::new();
        comparison.toggle_grounding();
        assert!(comparison.result().is_none());
    }

    #[test]
    fn every_answer_lists_three_points() {
        for case in [CaseStudy::Finley, CaseStudy::BrightCart] {
            let scenario = GroundingScenario::for_case(case);
            assert_eq!(scenario.grounded.points.len(), 3);
            assert_eq!(scenario.non_grounded.points.len(), 3);
        }
    }
}
