//! End-to-end journeys through the public handlers and sessions.

use std::sync::Arc;

use ai_teacher::adapters::storage::InMemoryJourneyStore;
use ai_teacher::application::{
    AdvanceJourneyCommand, AdvanceJourneyHandler, ExitJourneyCommand, ExitJourneyHandler,
    JourneyError, RenderSystemPromptHandler, RenderSystemPromptQuery, StartJourneyCommand,
    StartJourneyHandler,
};
use ai_teacher::domain::curriculum::ModuleId;
use ai_teacher::domain::foundation::{ErrorCode, Score, SessionId};
use ai_teacher::domain::journey::{
    AppView, DiagnosticSession, DiagnosticStep, IntakeSubmission, JourneyEvent, ModuleSession,
};
use ai_teacher::domain::profile::{RiskTolerance, Track, UseCase, WorkStyle};
use ai_teacher::domain::prompt::PromptFormat;
use ai_teacher::ports::JourneyStore;

struct Course {
    store: Arc<InMemoryJourneyStore>,
    start: StartJourneyHandler,
    advance: AdvanceJourneyHandler,
    render: RenderSystemPromptHandler,
    exit: ExitJourneyHandler,
}

impl Course {
    fn new() -> Self {
        let store = Arc::new(InMemoryJourneyStore::new());
        let port: Arc<dyn JourneyStore> = store.clone();
        Self {
            start: StartJourneyHandler::new(port.clone()),
            advance: AdvanceJourneyHandler::new(port.clone()),
            render: RenderSystemPromptHandler::new(port.clone()),
            exit: ExitJourneyHandler::new(port),
            store,
        }
    }

    async fn apply(&self, id: SessionId, event: impl Into<JourneyEvent>) {
        self.advance
            .handle(AdvanceJourneyCommand::new(id, event))
            .await
            .unwrap();
    }
}

/// Answers every diagnostic question correctly.
fn perfect_diagnostic() -> JourneyEvent {
    let mut session = DiagnosticSession::new();
    loop {
        let correct = session
            .current_question()
            .correct_option()
            .map(|o| o.id.clone())
            .unwrap();
        let feedback = session.select(&correct).unwrap();
        assert!(feedback.is_correct);
        if let DiagnosticStep::Finished(outcome) = session.advance().unwrap() {
            return outcome.into();
        }
    }
}

/// Takes a module quiz, answering the first `correct` questions right and
/// the rest wrong.
fn take_quiz(module: ModuleId, track: Track, correct: usize) -> JourneyEvent {
    let mut session = ModuleSession::new(module, track);
    session.start_quiz().unwrap();
    for (i, question) in session.questions().iter().enumerate() {
        let option = question
            .options()
            .iter()
            .find(|o| o.is_correct == (i < correct))
            .unwrap();
        session.select(question.id(), &option.id).unwrap();
    }
    assert!(session.can_submit());
    session.submit().unwrap()
}

#[tokio::test]
async fn ada_completes_the_course() {
    let course = Course::new();
    let id = course
        .start
        .handle(StartJourneyCommand::new())
        .await
        .unwrap()
        .session_id;

    let intake = IntakeSubmission::new(
        "Ada",
        UseCase::Coding,
        WorkStyle::Balanced,
        RiskTolerance::Moderate,
    )
    .unwrap();
    course.apply(id, intake).await;
    course.apply(id, perfect_diagnostic()).await;

    let state = course.store.load(id).await.unwrap();
    assert_eq!(state.view(), AppView::Learning);
    assert_eq!(state.profile().track(), Track::Advanced);
    assert_eq!(state.profile().technical_comfort(), Score::HUNDRED);
    assert!(state.profile().prefers_precision());

    for (module, score) in [
        (ModuleId::One, 85),
        (ModuleId::Two, 90),
        (ModuleId::Three, 60),
    ] {
        course
            .apply(
                id,
                JourneyEvent::ModuleCompleted {
                    module,
                    score: Score::from(score),
                },
            )
            .await;
    }
    course
        .apply(id, take_quiz(ModuleId::Four, Track::Advanced, 3))
        .await;
    course
        .apply(
            id,
            JourneyEvent::ModuleCompleted {
                module: ModuleId::Five,
                score: Score::from(95),
            },
        )
        .await;

    let state = course.store.load(id).await.unwrap();
    assert_eq!(state.view(), AppView::Final);
    assert_eq!(state.current_module(), ModuleId::Five);
    assert_eq!(state.unlocked_keys(), [true, true, false, true, true]);
    assert_eq!(state.module_score(ModuleId::Four), Some(Score::HUNDRED));
    assert_eq!(state.profile().security_conscious(), Score::from(95));

    let rendered = course
        .render
        .handle(RenderSystemPromptQuery { session_id: id })
        .await
        .unwrap();
    assert_eq!(rendered.prompt.format, PromptFormat::Markdown);
    assert_eq!(rendered.prompt.temperature, 0.3);
    assert!(rendered
        .prompt
        .text
        .contains("**Role:** You are an expert assistant for Ada, specializing in coding."));
    assert!(rendered.prompt.text.contains("REDACT"));
    assert!(rendered.prompt.text.contains("Low (Stick to facts)"));
    assert_eq!(rendered.recommendations.model, "GPT-4o / Claude 3.5 Sonnet");
    assert_eq!(rendered.recommendations.security_level, "Strict");

    let exited = course
        .exit
        .handle(ExitJourneyCommand { session_id: id })
        .await
        .unwrap();
    assert!(exited.final_state.is_complete());
    assert_eq!(course.store.journey_count().await, 0);
}

#[tokio::test]
async fn quiz_driven_journey_records_partial_scores() {
    let course = Course::new();
    let id = course
        .start
        .handle(StartJourneyCommand::new())
        .await
        .unwrap()
        .session_id;

    let intake = IntakeSubmission::new(
        "Grace",
        UseCase::Writing,
        WorkStyle::Structured,
        RiskTolerance::Cautious,
    )
    .unwrap();
    course.apply(id, intake).await;
    course.apply(id, perfect_diagnostic()).await;

    let track = course.store.load(id).await.unwrap().profile().track();
    for (module, correct) in [
        (ModuleId::One, 3),
        (ModuleId::Two, 2),
        (ModuleId::Three, 3),
        (ModuleId::Four, 0),
        (ModuleId::Five, 1),
    ] {
        course.apply(id, take_quiz(module, track, correct)).await;
    }

    let state = course.store.load(id).await.unwrap();
    assert_eq!(state.view(), AppView::Final);
    assert_eq!(state.unlocked_keys(), [true, false, true, false, false]);
    assert_eq!(state.keys_unlocked(), 2);
    assert_eq!(state.module_score(ModuleId::Four), Some(Score::ZERO));
    // Module 2 failed, but the diagnostic already set precision.
    assert!(state.profile().prefers_precision());

    let rendered = course
        .render
        .handle(RenderSystemPromptQuery { session_id: id })
        .await
        .unwrap();
    assert_eq!(rendered.prompt.format, PromptFormat::StructuredMarkup);
    assert!(rendered.prompt.text.contains("<name>Grace</name>"));
    assert!(!rendered.prompt.text.contains("<security>"));
    assert_eq!(rendered.recommendations.security_level, "Standard");
}

#[tokio::test]
async fn out_of_order_events_are_rejected() {
    let course = Course::new();
    let id = course
        .start
        .handle(StartJourneyCommand::new())
        .await
        .unwrap()
        .session_id;

    let early = course
        .advance
        .handle(AdvanceJourneyCommand::new(id, perfect_diagnostic()))
        .await;
    assert!(matches!(
        early,
        Err(JourneyError::Domain(ref err)) if err.code == ErrorCode::InvalidStateTransition
    ));

    let intake = IntakeSubmission::new(
        "Lin",
        UseCase::Research,
        WorkStyle::Flexible,
        RiskTolerance::Experimental,
    )
    .unwrap();
    course.apply(id, intake).await;
    course.apply(id, perfect_diagnostic()).await;

    let skipped = course
        .advance
        .handle(AdvanceJourneyCommand::new(
            id,
            JourneyEvent::ModuleCompleted {
                module: ModuleId::Three,
                score: Score::HUNDRED,
            },
        ))
        .await;
    assert!(matches!(skipped, Err(JourneyError::Domain(_))));

    course
        .apply(id, take_quiz(ModuleId::One, Track::Advanced, 3))
        .await;
    let repeated = course
        .advance
        .handle(AdvanceJourneyCommand::new(
            id,
            JourneyEvent::ModuleCompleted {
                module: ModuleId::One,
                score: Score::HUNDRED,
            },
        ))
        .await;
    assert!(matches!(
        repeated,
        Err(JourneyError::Domain(ref err)) if err.code == ErrorCode::ModuleAlreadyCompleted
    ));

    let premature = course
        .render
        .handle(RenderSystemPromptQuery { session_id: id })
        .await;
    assert!(premature.is_err());

    let state = course.store.load(id).await.unwrap();
    assert_eq!(state.current_module(), ModuleId::Two);
    assert_eq!(state.completed_modules(), &[ModuleId::One]);
}

#[test]
fn blank_name_cannot_be_submitted() {
    let result = IntakeSubmission::new(
        "   ",
        UseCase::Writing,
        WorkStyle::Balanced,
        RiskTolerance::Moderate,
    );
    assert!(result.is_err());
}
