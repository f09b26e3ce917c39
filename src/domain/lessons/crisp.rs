//! CRISP prompt builder (module 3).

use serde::{Deserialize, Serialize};

/// Context, Role, Instruction, Specs, Proof.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrispPrompt {
    pub context: String,
    pub role: String,
    pub instruction: String,
    pub specs: String,
    pub proof: String,
}

impl CrispPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preview text. Empty fields show a `[Missing ...]` placeholder.
    pub fn render(&self) -> String {
        fn or_missing<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
            if value.is_empty() {
                placeholder
            } else {
                value
            }
        }

        format!(
            "Context: {}\nRole: {}\nInstruction: {}\nConstraints: {}\nExample: {}",
            or_missing(&self.context, "[Missing Context]"),
            or_missing(&self.role, "[Missing Role]"),
            or_missing(&self.instruction, "[Missing Instruction]"),
            or_missing(&self.specs, "[Missing Specs]"),
            or_missing(&self.proof, "[Missing Proof]"),
        )
        .trim()
        .to_string()
    }

    /// Number of the five fields that are filled in.
    pub fn completeness(&self) -> usize {
        [
            &self.context,
            &self.role,
            &self.instruction,
            &self.specs,
            &self.proof,
        ]
        .iter()
        .filter(|f| !f.is_empty())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_shows_every_placeholder() {
        assert_eq!(
            CrispPrompt::new().render(),
            "Context: [Missing Context]\nRole: [Missing Role]\nInstruction: [Missing Instruction]\nConstraints: [Missing Specs]\nExample: [Missing Proof]"
        );
        assert_eq!(CrispPrompt::new().completeness(), 0);
    }

    #[test]
    fn filled_fields_replace_placeholders() {
        let prompt = CrispPrompt {
            context: "We are launching a new coffee brand".into(),
            role: "Act as a Senior Marketing Copywriter".into(),
            instruction: "Write 3 taglines".into(),
            specs: String::new(),
            proof: "Like: \"Wake up to better beans\"".into(),
        };
        let text = prompt.render();
        assert!(text.starts_with("Context: We are launching a new coffee brand\nRole: Act as"));
        assert!(text.contains("Constraints: [Missing Specs]"));
        assert_eq!(prompt.completeness(), 4);
    }

    #[test]
    fn trailing_whitespace_in_last_field_is_trimmed() {
        let prompt = CrispPrompt {
            proof: "example  \n".into(),
            ..CrispPrompt::default()
        };
        assert!(prompt.render().ends_with("Example: example"));
    }
}
