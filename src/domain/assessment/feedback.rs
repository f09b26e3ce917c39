//! Per-question result shown after an answer is locked or a quiz submitted.

use serde::Serialize;

use crate::domain::curriculum::Question;

/// Whether one answer was right, plus the explanation to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub question_id: String,
    pub selected_option_id: Option<String>,
    pub correct_option_id: Option<String>,
    pub is_correct: bool,
    pub explanation: String,
}

impl AnswerFeedback {
    pub fn for_question(question: &Question, selected: Option<&str>) -> Self {
        Self {
            question_id: question.id().to_string(),
            selected_option_id: selected.map(str::to_string),
            correct_option_id: question.correct_option().map(|o| o.id.clone()),
            is_correct: selected.map(|s| question.is_correct(s)).unwrap_or(false),
            explanation: question.feedback().to_string(),
        }
    }

    /// Review heading.
    pub fn verdict(&self) -> &'static str {
        if self.is_correct {
            "Correct"
        } else {
            "Incorrect"
        }
    }
}
