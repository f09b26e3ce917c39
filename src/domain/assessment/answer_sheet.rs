//! AnswerSheet - a learner's selections for one question set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map of question id to selected option id. May be incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(HashMap<String, String>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the selection for a question.
    pub fn select(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        self.0.insert(question_id.into(), option_id.into());
    }

    /// Builder form of [`select`](Self::select).
    pub fn with(mut self, question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.select(question_id, option_id);
        self
    }

    pub fn selection(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Number of questions with a selection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<Q, O> FromIterator<(Q, O)> for AnswerSheet
where
    Q: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, O)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(q, o)| (q.into(), o.into())).collect())
    }
}
