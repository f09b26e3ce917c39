//! DiagnosticSession - one question at a time, answers lock on selection.

use crate::domain::assessment::{score_answers, AnswerFeedback, AnswerSheet};
use crate::domain::curriculum::{diagnostic_questions, Question};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::DiagnosticOutcome;

/// Result of [`DiagnosticSession::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticStep {
    /// Moved on to the next question.
    Next,
    /// Past the last question; the outcome is ready to apply.
    Finished(DiagnosticOutcome),
}

/// Walks a learner through the placement questions.
///
/// Selecting an option locks the current question and reveals feedback;
/// `advance` is only allowed once the current question is locked.
#[derive(Debug, Clone)]
pub struct DiagnosticSession {
    questions: Vec<Question>,
    index: usize,
    answers: AnswerSheet,
    locked: bool,
    finished: bool,
}

impl Default for DiagnosticSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSession {
    /// Session over the standard diagnostic bank.
    pub fn new() -> Self {
        Self {
            questions: diagnostic_questions().to_vec(),
            index: 0,
            answers: AnswerSheet::new(),
            locked: false,
            finished: false,
        }
    }

    /// Session over a custom question set. Every question must pass
    /// [`Question::validate`].
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self {
            questions,
            ..Self::new()
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.index]
    }

    /// (1-based position, total).
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.questions.len())
    }

    /// Fraction of questions already passed, for the progress bar.
    pub fn completion_ratio(&self) -> f64 {
        self.index as f64 / self.questions.len() as f64
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Records an answer for the current question and locks it.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` after the diagnostic has finished
    /// - `AnswerLocked` if the current question was already answered
    /// - `OptionNotFound` if the option id is not on the question
    pub fn select(&mut self, option_id: &str) -> Result<AnswerFeedback, DomainError> {
        self.ensure_open()?;
        if self.locked {
            return Err(DomainError::new(
                ErrorCode::AnswerLocked,
                "This question has already been answered",
            )
            .with_detail("question_id", self.current_question().id()));
        }

        let question = self.current_question();
        if question.option(option_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Question '{}' has no option '{}'", question.id(), option_id),
            ));
        }
        let question_id = question.id().to_string();

        self.answers.select(question_id, option_id);
        self.locked = true;
        Ok(AnswerFeedback::for_question(self.current_question(), Some(option_id)))
    }

    /// Feedback for the current question, once locked.
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if !self.locked {
            return None;
        }
        let question = self.current_question();
        Some(AnswerFeedback::for_question(
            question,
            self.answers.selection(question.id()),
        ))
    }

    /// Moves to the next question, or scores the diagnostic after the last.
    ///
    /// # Errors
    ///
    /// - `QuizIncomplete` if the current question has not been answered
    /// - `AlreadySubmitted` after the diagnostic has finished
    pub fn advance(&mut self) -> Result<DiagnosticStep, DomainError> {
        self.ensure_open()?;
        if !self.locked {
            return Err(DomainError::new(
                ErrorCode::QuizIncomplete,
                "Select an answer before continuing",
            ));
        }

        if self.is_last() {
            self.finished = true;
            let score = score_answers(&self.questions, &self.answers);
            return Ok(DiagnosticStep::Finished(DiagnosticOutcome::from_score(score)));
        }

        self.index += 1;
        self.locked = false;
        Ok(DiagnosticStep::Next)
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::new(
                ErrorCode::AlreadySubmitted,
                "The diagnostic has already been completed",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::AnswerOption;
    use crate::domain::foundation::Score;
    use crate::domain::profile::Track;

    fn run(session: &mut DiagnosticSession, picks: &[&str]) -> DiagnosticOutcome {
        for pick in picks {
            session.select(pick).unwrap();
            if let DiagnosticStep::Finished(outcome) = session.advance().unwrap() {
                return outcome;
            }
        }
        panic!("diagnostic did not finish");
    }

    #[test]
    fn perfect_run_is_advanced() {
        let mut session = DiagnosticSession::new();
        let outcome = run(&mut session, &["b", "c", "a", "b", "b"]);
        assert_eq!(outcome.score(), Score::HUNDRED);
        assert_eq!(outcome.track(), Track::Advanced);
        assert!(session.is_finished());
    }

    #[test]
    fn two_of_five_is_foundation() {
        let mut session = DiagnosticSession::new();
        let outcome = run(&mut session, &["b", "c", "b", "a", "a"]);
        assert_eq!(outcome.score().value(), 40.0);
        assert_eq!(outcome.track(), Track::Foundation);
    }

    #[test]
    fn selection_locks_the_question() {
        let mut session = DiagnosticSession::new();
        let feedback = session.select("a").unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_option_id.as_deref(), Some("b"));

        let err = session.select("b").unwrap_err();
        assert_eq!(err.code, ErrorCode::AnswerLocked);
        assert_eq!(session.answers().selection("d1"), Some("a"));
    }

    #[test]
    fn cannot_advance_without_an_answer() {
        let mut session = DiagnosticSession::new();
        assert!(session.feedback().is_none());
        let err = session.advance().unwrap_err();
        assert_eq!(err.code, ErrorCode::QuizIncomplete);
        assert_eq!(session.progress(), (1, 5));
    }

    #[test]
    fn unknown_option_is_rejected_without_locking() {
        let mut session = DiagnosticSession::new();
        let err = session.select("z").unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert!(!session.is_locked());
    }

    #[test]
    fn progress_tracks_position() {
        let mut session = DiagnosticSession::new();
        session.select("b").unwrap();
        session.advance().unwrap();
        assert_eq!(session.progress(), (2, 5));
        assert!((session.completion_ratio() - 0.2).abs() < f64::EPSILON);
        assert!(!session.is_locked());
    }

    #[test]
    fn finished_session_rejects_further_input() {
        let mut session = DiagnosticSession::new();
        run(&mut session, &["a", "a", "a", "a", "a"]);
        assert_eq!(session.advance().unwrap_err().code, ErrorCode::AlreadySubmitted);
        assert_eq!(session.select("a").unwrap_err().code, ErrorCode::AlreadySubmitted);
    }

    #[test]
    fn empty_custom_question_set_is_rejected() {
        assert!(DiagnosticSession::with_questions(Vec::new()).is_err());
    }

    #[test]
    fn custom_question_set_must_be_valid() {
        let broken = Question::unchecked(
            "x1",
            "Which is right?",
            vec![
                AnswerOption::new("a", "This one", true),
                AnswerOption::new("b", "Also this one", true),
            ],
            "",
        );
        assert!(matches!(
            DiagnosticSession::with_questions(vec![broken]),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let session =
            DiagnosticSession::with_questions(diagnostic_questions()[..2].to_vec()).unwrap();
        assert_eq!(session.progress(), (1, 2));
    }
}
