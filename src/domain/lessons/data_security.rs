//! Anonymization exercise (module 5).

use serde::Serialize;

use super::CaseStudy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskKind {
    Company,
    Financial,
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A sensitive item found in the unsafe draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataRisk {
    pub text: &'static str,
    pub kind: RiskKind,
    pub severity: Severity,
}

const fn risk(text: &'static str, kind: RiskKind, severity: Severity) -> DataRisk {
    DataRisk {
        text,
        kind,
        severity,
    }
}

/// An unsafe draft, its anonymized rewrite and what was wrong with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityScenario {
    pub unsafe_text: &'static str,
    pub safe_text: &'static str,
    pub risks: &'static [DataRisk],
}

const FINLEY: SecurityScenario = SecurityScenario {
    unsafe_text: "Dear Team,

Please review the attached M&A proposal for Acme Corp's acquisition of Beta Industries.
Key financials:
- Deal value: \u{a3}45.2M
- CEO John Mitchell's personal guarantee of \u{a3}2M
- Target EBITDA: \u{a3}8.3M
- Bank account ending 4521 for escrow

The client contact is Sarah Williams (sarah.williams@acmecorp.com, +44 7700 900123).

Please summarise the key risks for the board presentation tomorrow.",
    safe_text: "Dear Team,

Please review the attached M&A proposal for [Client A]'s acquisition of [Target B].
Key financials:
- Deal value: [Mid-8 figures]
- Personal guarantee from principal
- Target EBITDA: [Strong]
- Escrow arrangements in place

Please summarise the key risks for the board presentation tomorrow.",
    risks: &[
        risk("Acme Corp / Beta Industries", RiskKind::Company, Severity::High),
        risk("\u{a3}45.2M deal value", RiskKind::Financial, Severity::High),
        risk("John Mitchell (CEO name)", RiskKind::Personal, Severity::Critical),
        risk("Bank account 4521", RiskKind::Financial, Severity::Critical),
        risk("Sarah Williams email & phone", RiskKind::Personal, Severity::Critical),
        risk("\u{a3}2M personal guarantee", RiskKind::Financial, Severity::High),
    ],
};

const BRIGHTCART: SecurityScenario = SecurityScenario {
    unsafe_text: "Customer complaint ticket #4892:

Customer: Emma Thompson (emma.t@gmail.com)
Order: #BC-2024-89421
Payment: Visa ending 8834
Shipping: 42 Oak Lane, Manchester, M1 4BH

Issue: Customer claims item arrived damaged. Requesting refund of \u{a3}89.99 to original payment method.

Please draft a response offering a replacement or refund.",
    safe_text: "Customer complaint ticket #[REDACTED]:

Customer: [Customer Name]
Order: #[Order ID]
Payment: [Card on file]
Shipping: [Delivery address on file]

Issue: Customer claims item arrived damaged. Requesting refund to original payment method.

Please draft a response offering a replacement or refund.",
    risks: &[
        risk("Emma Thompson (full name)", RiskKind::Personal, Severity::High),
        risk("emma.t@gmail.com", RiskKind::Personal, Severity::Critical),
        risk("Visa ending 8834", RiskKind::Financial, Severity::Critical),
        risk("42 Oak Lane, Manchester", RiskKind::Personal, Severity::Critical),
        risk("Order #BC-2024-89421", RiskKind::Business, Severity::Medium),
        risk("\u{a3}89.99 refund amount", RiskKind::Financial, Severity::Low),
    ],
};

impl SecurityScenario {
    pub fn for_case(case: CaseStudy) -> &'static SecurityScenario {
        match case {
            CaseStudy::Finley => &FINLEY,
            CaseStudy::BrightCart => &BRIGHTCART,
        }
    }

    /// Count of risks at `severity`.
    pub fn count_at(&self, severity: Severity) -> usize {
        self.risks.iter().filter(|r| r.severity == severity).count()
    }
}

/// Draft box with analyze and anonymize actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymizationExercise {
    case: Option<CaseStudy>,
    input_text: String,
    show_analysis: bool,
}

impl AnonymizationExercise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a scenario's unsafe draft and hides any analysis.
    pub fn select(&mut self, case: CaseStudy) {
        self.case = Some(case);
        self.input_text = SecurityScenario::for_case(case).unsafe_text.to_string();
        self.show_analysis = false;
    }

    /// Reveals the risk list.
    pub fn analyze(&mut self) {
        self.show_analysis = true;
    }

    /// Swaps in the safe draft and hides the analysis. No-op without a scenario.
    pub fn anonymize(&mut self) {
        if let Some(case) = self.case {
            self.input_text = SecurityScenario::for_case(case).safe_text.to_string();
            self.show_analysis = false;
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn is_analysis_visible(&self) -> bool {
        self.show_analysis
    }

    /// Risks to display; empty until analyzed.
    pub fn visible_risks(&self) -> &'static [DataRisk] {
        match (self.show_analysis, self.case) {
            (true, Some(case)) => SecurityScenario::for_case(case).risks,
            _ => &[],
        }
    }

    /// True once the draft has been replaced by the safe version.
    pub fn is_anonymized(&self) -> bool {
        self.case
            .map(|c| self.input_text == SecurityScenario::for_case(c).safe_text)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_loads_unsafe_draft() {
        let mut exercise = AnonymizationExercise::new();
        exercise.select(CaseStudy::BrightCart);
        assert!(exercise.input_text().contains("Emma Thompson"));
        assert!(!exercise.is_anonymized());
        assert!(exercise.visible_risks().is_empty());
    }

    #[test]
    fn analyze_reveals_risks() {
        let mut exercise = AnonymizationExercise::new();
        exercise.select(CaseStudy::Finley);
        exercise.analyze();
        assert_eq!(exercise.visible_risks().len(), 6);
        assert!(exercise
            .visible_risks()
            .iter()
            .any(|r| r.text == "Bank account 4521" && r.severity == Severity::Critical));
    }

    #[test]
    fn anonymize_swaps_text_and_hides_analysis() {
        let mut exercise = AnonymizationExercise::new();
        exercise.select(CaseStudy::Finley);
        exercise.analyze();
        exercise.anonymize();
        assert!(exercise.input_text().contains("[Client A]"));
        assert!(!exercise.input_text().contains("Sarah Williams"));
        assert!(!exercise.is_analysis_visible());
        assert!(exercise.is_anonymized());
    }

    #[test]
    fn anonymize_without_scenario_is_noop() {
        let mut exercise = AnonymizationExercise::new();
        exercise.anonymize();
        assert_eq!(exercise.input_text(), "");
    }

    #[test]
    fn severity_counts() {
        let scenario = SecurityScenario::for_case(CaseStudy::BrightCart);
        assert_eq!(scenario.count_at(Severity::Critical), 3);
        assert_eq!(scenario.count_at(Severity::Low), 1);
        assert!(Severity::Critical > Severity::High);
    }
}
