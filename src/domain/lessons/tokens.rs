//! Token estimator (module 1).

use serde::Serialize;

use super::CaseStudy;

/// Illustrative price used for the cost readout.
pub const COST_PER_THOUSAND_TOKENS_USD: f64 = 0.002;

/// Characters per token in the rough estimate.
const CHARS_PER_TOKEN: usize = 4;

/// Token counts above this show the capacity insight.
const INSIGHT_ABOVE_TOKENS: usize = 100;

const FINLEY_PRESET: &str = "[CONFIDENTIAL CLIENT PROPOSAL - DRAFT v4]

EXECUTIVE SUMMARY
We propose a comprehensive restructuring of the compliance framework...
(Imagine 50 more pages of dense legal text here)
...
REGULATORY CITATIONS:
1. EU GDPR Art 5(1)
2. UK Data Protection Act 2018
...
(The sheer volume of this document risks exceeding the context window, causing the model to \"forget\" the initial instructions about tone and formatting.)";

const BRIGHTCART_PRESET: &str = "Product: Ultra-Soft Merino Wool Socks
Target Audience: Hikers
Tone: Energetic

Description:
Experience the ultimate comfort on the trails with our Merino Wool socks. Breathable, durable, and itch-free.";

/// Size and cost readout for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenEstimate {
    pub characters: usize,
    pub words: usize,
    pub tokens: usize,
    pub cost_usd: f64,
}

impl TokenEstimate {
    /// Cost with four decimals, as displayed (`$0.0001`).
    pub fn formatted_cost(&self) -> String {
        format!("${:.4}", self.cost_usd)
    }
}

/// Estimates tokens as one per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> TokenEstimate {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    let tokens = characters.div_ceil(CHARS_PER_TOKEN);
    TokenEstimate {
        characters,
        words,
        tokens,
        cost_usd: tokens as f64 / 1000.0 * COST_PER_THOUSAND_TOKENS_USD,
    }
}

/// Text box plus case-study presets.
#[derive(Debug, Clone, Default)]
pub struct TokenEstimator {
    text: String,
    active_case: Option<CaseStudy>,
}

impl TokenEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text; the active case study is kept.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Loads a case study's preset text.
    pub fn load_case(&mut self, case: CaseStudy) {
        self.active_case = Some(case);
        self.text = match case {
            CaseStudy::Finley => FINLEY_PRESET,
            CaseStudy::BrightCart => BRIGHTCART_PRESET,
        }
        .to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn active_case(&self) -> Option<CaseStudy> {
        self.active_case
    }

    pub fn estimate(&self) -> TokenEstimate {
        estimate_tokens(&self.text)
    }

    /// Capacity insight, shown once the text passes 100 tokens.
    pub fn insight(&self) -> Option<&'static str> {
        if self.estimate().tokens <= INSIGHT_ABOVE_TOKENS {
            return None;
        }
        Some(match self.active_case {
            Some(CaseStudy::Finley) => "Heavy legal documents consume context window quickly. This increases the risk of the model forgetting earlier instructions.",
            _ => "Short descriptions are cheap and fast. You could generate 100 variations of this for the price of one legal document.",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        let estimate = estimate_tokens("");
        assert_eq!(estimate.characters, 0);
        assert_eq!(estimate.words, 0);
        assert_eq!(estimate.tokens, 0);
        assert_eq!(estimate.cost_usd, 0.0);
    }

    #[test]
    fn tokens_round_up_per_four_characters() {
        assert_eq!(estimate_tokens("abc").tokens, 1);
        assert_eq!(estimate_tokens("abcd").tokens, 1);
        assert_eq!(estimate_tokens("abcde").tokens, 2);
    }

    #[test]
    fn whitespace_only_counts_characters_but_no_words() {
        let estimate = estimate_tokens("   \n ");
        assert_eq!(estimate.characters, 5);
        assert_eq!(estimate.words, 0);
        assert_eq!(estimate.tokens, 2);
    }

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(estimate_tokens("  hello \t big\nworld  ").words, 3);
    }

    #[test]
    fn cost_is_per_thousand_tokens() {
        let text = "x".repeat(4_000);
        let estimate = estimate_tokens(&text);
        assert_eq!(estimate.tokens, 1_000);
        assert!((estimate.cost_usd - 0.002).abs() < 1e-12);
        assert_eq!(estimate.formatted_cost(), "$0.0020");
    }

    #[test]
    fn finley_preset_triggers_legal_insight() {
        let mut estimator = TokenEstimator::new();
        estimator.load_case(CaseStudy::Finley);
        assert!(estimator.estimate().tokens > 100);
        assert!(estimator.insight().unwrap().starts_with("Heavy legal documents"));
    }

    #[test]
    fn brightcart_preset_is_below_insight_threshold() {
        let mut estimator = TokenEstimator::new();
        estimator.load_case(CaseStudy::BrightCart);
        assert!(estimator.text().starts_with("Product: Ultra-Soft Merino Wool Socks"));
        assert!(estimator.estimate().tokens <= 100);
        assert!(estimator.insight().is_none());
    }

    #[test]
    fn long_custom_text_gets_generic_insight() {
        let mut estimator = TokenEstimator::new();
        estimator.set_text("word ".repeat(100));
        assert!(estimator.insight().unwrap().starts_with("Short descriptions"));
    }
}
