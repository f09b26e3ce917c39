//! ModuleSession - the learn/quiz cycle inside one module.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{score_answers, AnswerFeedback, AnswerSheet};
use crate::domain::curriculum::{quiz_questions, ModuleId, Question, TrackCallout};
use crate::domain::foundation::{DomainError, ErrorCode, Score, StateMachine};
use crate::domain::profile::Track;

use super::JourneyEvent;

/// Sub-state of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStep {
    #[default]
    Learn,
    Quiz,
}

impl StateMachine for ModuleStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (ModuleStep::Learn, ModuleStep::Quiz) | (ModuleStep::Quiz, ModuleStep::Learn)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ModuleStep::Learn => vec![ModuleStep::Quiz],
            ModuleStep::Quiz => vec![ModuleStep::Learn],
        }
    }
}

/// One pass through a module: read the lesson, take the quiz, submit once.
#[derive(Debug, Clone)]
pub struct ModuleSession {
    module: ModuleId,
    track: Track,
    step: ModuleStep,
    answers: AnswerSheet,
    submitted: Option<Score>,
}

impl ModuleSession {
    pub fn new(module: ModuleId, track: Track) -> Self {
        Self {
            module,
            track,
            step: ModuleStep::Learn,
            answers: AnswerSheet::new(),
            submitted: None,
        }
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn step(&self) -> ModuleStep {
        self.step
    }

    pub fn title(&self) -> &'static str {
        self.module.title()
    }

    pub fn subtitle(&self) -> &'static str {
        self.module.subtitle()
    }

    pub fn design_note(&self) -> &'static str {
        self.module.design_note()
    }

    /// Track-specific aside for this learner, if any.
    pub fn callout(&self) -> Option<TrackCallout> {
        self.module.callout(self.track)
    }

    pub fn questions(&self) -> &'static [Question] {
        quiz_questions(self.module)
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Score recorded at submission.
    pub fn score(&self) -> Option<Score> {
        self.submitted
    }

    /// Leaves the lesson for the quiz.
    pub fn start_quiz(&mut self) -> Result<(), DomainError> {
        self.step = self.step.transition_to(ModuleStep::Quiz)?;
        Ok(())
    }

    /// Returns to the lesson; answers given so far are kept.
    pub fn back_to_lesson(&mut self) -> Result<(), DomainError> {
        self.ensure_not_submitted()?;
        self.step = self.step.transition_to(ModuleStep::Learn)?;
        Ok(())
    }

    /// Selects (or changes) the answer for a quiz question.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` outside the quiz step
    /// - `AlreadySubmitted` after submission
    /// - `QuestionNotFound` / `OptionNotFound` for ids not in this quiz
    pub fn select(&mut self, question_id: &str, option_id: &str) -> Result<(), DomainError> {
        self.ensure_not_submitted()?;
        if self.step != ModuleStep::Quiz {
            return Err(DomainError::invalid_transition(
                "Answers can only be given during the quiz",
            ));
        }

        let question = self
            .questions()
            .iter()
            .find(|q| q.id() == question_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::QuestionNotFound,
                    format!("Module {} has no question '{}'", self.module.number(), question_id),
                )
            })?;
        if question.option(option_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Question '{}' has no option '{}'", question_id, option_id),
            ));
        }

        self.answers.select(question_id, option_id);
        Ok(())
    }

    /// True when every question has an answer and nothing was submitted yet.
    pub fn can_submit(&self) -> bool {
        !self.is_submitted()
            && self.step == ModuleStep::Quiz
            && self.questions().iter().all(|q| self.answers.is_answered(q.id()))
    }

    /// Scores the quiz and locks the session.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` on a second submission
    /// - `InvalidStateTransition` outside the quiz step
    /// - `QuizIncomplete` if any question is unanswered
    pub fn submit(&mut self) -> Result<JourneyEvent, DomainError> {
        self.ensure_not_submitted()?;
        if self.step != ModuleStep::Quiz {
            return Err(DomainError::invalid_transition(
                "The quiz must be started before it can be submitted",
            ));
        }
        let unanswered = self
            .questions()
            .iter()
            .filter(|q| !self.answers.is_answered(q.id()))
            .count();
        if unanswered > 0 {
            return Err(DomainError::new(
                ErrorCode::QuizIncomplete,
                format!("{} question(s) still unanswered", unanswered),
            )
            .with_detail("unanswered", unanswered.to_string()));
        }

        let score = score_answers(self.questions(), &self.answers);
        self.submitted = Some(score);
        Ok(JourneyEvent::ModuleCompleted {
            module: self.module,
            score,
        })
    }

    /// Per-question results; empty until submitted.
    pub fn review(&self) -> Vec<AnswerFeedback> {
        if !self.is_submitted() {
            return Vec::new();
        }
        self.questions()
            .iter()
            .map(|q| AnswerFeedback::for_question(q, self.answers.selection(q.id())))
            .collect()
    }

    fn ensure_not_submitted(&self) -> Result<(), DomainError> {
        if self.is_submitted() {
            return Err(DomainError::new(
                ErrorCode::AlreadySubmitted,
                format!("Module {} quiz was already submitted", self.module.number()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut ModuleSession, picks: &[&str]) {
        let ids: Vec<String> = session.questions().iter().map(|q| q.id().to_string()).collect();
        for (id, pick) in ids.iter().zip(picks) {
            session.select(id, pick).unwrap();
        }
    }

    #[test]
    fn starts_in_learn_step() {
        let session = ModuleSession::new(ModuleId::One, Track::Foundation);
        assert_eq!(session.step(), ModuleStep::Learn);
        assert_eq!(session.title(), "How AI Works");
        assert_eq!(session.callout().unwrap().heading, "Key Takeaway");
    }

    #[test]
    fn cannot_answer_during_lesson() {
        let mut session = ModuleSession::new(ModuleId::One, Track::Foundation);
        let err = session.select("m1q1", "b").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn back_to_lesson_keeps_answers() {
        let mut session = ModuleSession::new(ModuleId::Two, Track::Practitioner);
        session.start_quiz().unwrap();
        session.select("m2q1", "b").unwrap();
        session.back_to_lesson().unwrap();
        assert_eq!(session.step(), ModuleStep::Learn);
        session.start_quiz().unwrap();
        assert_eq!(session.answers().selection("m2q1"), Some("b"));
    }

    #[test]
    fn submit_requires_every_answer() {
        let mut session = ModuleSession::new(ModuleId::Three, Track::Advanced);
        session.start_quiz().unwrap();
        answer_all(&mut session, &["b", "b"]);
        assert!(!session.can_submit());
        let err = session.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::QuizIncomplete);
        assert_eq!(err.details.get("unanswered"), Some(&"1".to_string()));
    }

    #[test]
    fn answers_can_change_before_submit() {
        let mut session = ModuleSession::new(ModuleId::One, Track::Foundation);
        session.start_quiz().unwrap();
        answer_all(&mut session, &["a", "a", "b"]);
        answer_all(&mut session, &["b", "b", "a"]);
        assert!(session.can_submit());
        let event = session.submit().unwrap();
        assert_eq!(
            event,
            JourneyEvent::ModuleCompleted {
                module: ModuleId::One,
                score: Score::HUNDRED
            }
        );
    }

    #[test]
    fn submission_locks_and_reveals_review() {
        let mut session = ModuleSession::new(ModuleId::Five, Track::Foundation);
        session.start_quiz().unwrap();
        assert!(session.review().is_empty());
        answer_all(&mut session, &["b", "a", "b"]);
        session.submit().unwrap();

        assert_eq!(session.score(), Some(Score::from_ratio(2, 3)));
        let verdicts: Vec<_> = session.review().iter().map(|r| r.is_correct).collect();
        assert_eq!(verdicts, vec![true, false, true]);

        assert_eq!(session.submit().unwrap_err().code, ErrorCode::AlreadySubmitted);
        assert_eq!(
            session.select("m5q2", "b").unwrap_err().code,
            ErrorCode::AlreadySubmitted
        );
        assert!(session.back_to_lesson().is_err());
    }

    #[test]
    fn rejects_foreign_question_and_option_ids() {
        let mut session = ModuleSession::new(ModuleId::Four, Track::Foundation);
        session.start_quiz().unwrap();
        assert_eq!(
            session.select("m1q1", "a").unwrap_err().code,
            ErrorCode::QuestionNotFound
        );
        assert_eq!(
            session.select("m4q2", "c").unwrap_err().code,
            ErrorCode::OptionNotFound
        );
    }

    #[test]
    fn step_machine_has_only_two_edges() {
        assert!(ModuleStep::Learn.can_transition_to(&ModuleStep::Quiz));
        assert!(!ModuleStep::Learn.can_transition_to(&ModuleStep::Learn));
        assert!(ModuleStep::Quiz.transition_to(ModuleStep::Quiz).is_err());
    }
}
