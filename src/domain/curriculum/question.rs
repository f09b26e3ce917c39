//! Multiple-choice question value objects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
        }
    }
}

/// A multiple-choice question with exactly one correct option.
///
/// Deserialized questions go through the same checks as [`Question::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionData")]
pub struct Question {
    id: String,
    text: String,
    options: Vec<AnswerOption>,
    feedback: String,
}

/// Wire shape of a question before validation.
#[derive(Deserialize)]
struct QuestionData {
    id: String,
    text: String,
    options: Vec<AnswerOption>,
    feedback: String,
}

impl TryFrom<QuestionData> for Question {
    type Error = ValidationError;

    fn try_from(data: QuestionData) -> Result<Self, Self::Error> {
        Question::new(data.id, data.text, data.options, data.feedback)
    }
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if id or text is blank
    /// - `InvalidFormat` if fewer than two options, duplicate option ids,
    ///   or not exactly one correct option
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        feedback: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = Self::unchecked(id, text, options, feedback);
        question.validate()?;
        Ok(question)
    }

    /// Builds a question from static bank data; banks are checked by tests.
    pub(crate) fn unchecked(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            feedback: feedback.into(),
        }
    }

    /// Checks the structural rules a question must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field("question.id"));
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("question.text"));
        }
        if self.options.len() < 2 {
            return Err(ValidationError::invalid_format(
                "question.options",
                format!("question '{}' needs at least two options", self.id),
            ));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "question.options",
                    format!("duplicate option id '{}' in '{}'", option.id, self.id),
                ));
            }
        }

        let correct = self.options.iter().filter(|o| o.is_correct).count();
        if correct != 1 {
            return Err(ValidationError::invalid_format(
                "question.options",
                format!(
                    "question '{}' must have exactly one correct option, found {}",
                    self.id, correct
                ),
            ));
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Explanation revealed after answering.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Looks up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// The single correct option.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    /// True iff `option_id` names the correct option. Unknown ids are wrong.
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option().map(|o| o.id == option_id).unwrap_or(false)
    }
}
