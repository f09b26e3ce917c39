//! AppState - the journey aggregate.
//!
//! An `AppState` is never mutated in place. [`AppState::apply`] validates an
//! event against the current view and returns the successor state, leaving
//! the current state untouched when the event is rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AppView, DiagnosticOutcome, IntakeSubmission, JourneyEvent};
use crate::domain::curriculum::ModuleId;
use crate::domain::foundation::{DomainError, ErrorCode, Score, StateMachine};
use crate::domain::profile::UserProfile;

/// Quiz score needed to unlock a module's key.
pub const MODULE_PASS_THRESHOLD: f64 = 80.0;

/// Diagnostic scores above this mark the learner as precision-minded.
pub const PRECISION_THRESHOLD: f64 = 70.0;

/// Number of modules (and keys) in the course.
pub const MODULE_COUNT: usize = 5;

/// Whole-course progress for one learner session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    view: AppView,
    current_module: ModuleId,
    completed_modules: Vec<ModuleId>,
    module_scores: BTreeMap<ModuleId, Score>,
    unlocked_keys: [bool; MODULE_COUNT],
    profile: UserProfile,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh journey: intake screen, module 1, nothing completed, all keys
    /// locked, default profile.
    pub fn new() -> Self {
        Self {
            view: AppView::Intake,
            current_module: ModuleId::FIRST,
            completed_modules: Vec::new(),
            module_scores: BTreeMap::new(),
            unlocked_keys: [false; MODULE_COUNT],
            profile: UserProfile::default(),
        }
    }

    /// Applies an event and returns the next state.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the event does not belong to the
    ///   current view, or completes a module other than the current one
    /// - `ModuleAlreadyCompleted` if the module already has a score
    /// - `EmptyField` if an intake submission carries a blank name
    pub fn apply(&self, event: JourneyEvent) -> Result<AppState, DomainError> {
        match (self.view, event) {
            (AppView::Intake, JourneyEvent::IntakeSubmitted(submission)) => {
                self.submit_intake(submission)
            }
            (AppView::Diagnostic, JourneyEvent::DiagnosticCompleted(outcome)) => {
                self.complete_diagnostic(outcome)
            }
            (AppView::Learning, JourneyEvent::ModuleCompleted { module, score }) => {
                self.complete_module(module, score)
            }
            (view, event) => Err(DomainError::invalid_transition(format!(
                "Cannot apply {} while in {} view",
                event.name(),
                view
            ))
            .with_detail("view", view.as_str())
            .with_detail("event", event.name())),
        }
    }

    fn submit_intake(&self, submission: IntakeSubmission) -> Result<AppState, DomainError> {
        if submission.name().trim().is_empty() {
            return Err(DomainError::new(ErrorCode::EmptyField, "Name cannot be empty")
                .with_detail("field", "name"));
        }
        let view = self.view.transition_to(AppView::Diagnostic)?;

        let mut next = self.clone();
        next.view = view;
        next.profile.name = submission.name().to_string();
        next.profile.primary_use_case = submission.use_case();
        next.profile.work_style = submission.work_style();
        next.profile.risk_tolerance = submission.risk_tolerance();
        Ok(next)
    }

    fn complete_diagnostic(&self, outcome: DiagnosticOutcome) -> Result<AppState, DomainError> {
        let view = self.view.transition_to(AppView::Learning)?;

        let mut next = self.clone();
        next.view = view;
        next.current_module = ModuleId::FIRST;
        next.profile.track = outcome.track();
        next.profile.technical_comfort = outcome.score();
        next.profile.prefers_precision = outcome.score().value() > PRECISION_THRESHOLD;
        Ok(next)
    }

    fn complete_module(&self, module: ModuleId, score: Score) -> Result<AppState, DomainError> {
        if self.module_scores.contains_key(&module) {
            return Err(DomainError::new(
                ErrorCode::ModuleAlreadyCompleted,
                format!("Module {} has already been completed", module.number()),
            )
            .with_detail("module", module.number().to_string()));
        }
        if module != self.current_module {
            return Err(DomainError::invalid_transition(format!(
                "Cannot complete module {} while module {} is current",
                module.number(),
                self.current_module.number()
            ))
            .with_detail("module", module.number().to_string()));
        }

        let passed = score.value() >= MODULE_PASS_THRESHOLD;
        let mut next = self.clone();

        next.unlocked_keys[module.index()] = passed;
        if module == ModuleId::Two && passed {
            next.profile.prefers_precision = true;
        }
        if module == ModuleId::Five {
            next.profile.security_conscious = score;
        }
        next.completed_modules.push(module);
        next.module_scores.insert(module, score);

        match module.next() {
            Some(following) => {
                next.view = self.view.transition_to(AppView::Learning)?;
                next.current_module = following;
            }
            None => {
                next.view = self.view.transition_to(AppView::Final)?;
                next.current_module = ModuleId::LAST;
            }
        }
        Ok(next)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn view(&self) -> AppView {
        self.view
    }

    /// Module being studied; pinned at 5 once the course is finished.
    pub fn current_module(&self) -> ModuleId {
        self.current_module
    }

    /// Completed modules in completion order.
    pub fn completed_modules(&self) -> &[ModuleId] {
        &self.completed_modules
    }

    pub fn module_scores(&self) -> &BTreeMap<ModuleId, Score> {
        &self.module_scores
    }

    pub fn module_score(&self, module: ModuleId) -> Option<Score> {
        self.module_scores.get(&module).copied()
    }

    /// Key flags; index `i` belongs to module `i + 1`.
    pub fn unlocked_keys(&self) -> [bool; MODULE_COUNT] {
        self.unlocked_keys
    }

    pub fn is_key_unlocked(&self, module: ModuleId) -> bool {
        self.unlocked_keys[module.index()]
    }

    pub fn keys_unlocked(&self) -> usize {
        self.unlocked_keys.iter().filter(|k| **k).count()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_complete(&self) -> bool {
        self.view == AppView::Final
    }
}
