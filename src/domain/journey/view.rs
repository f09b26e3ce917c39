//! AppView - the top-level screen of a journey.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Which screen the learner is on.
///
/// ```text
/// Intake ──► Diagnostic ──► Learning ──► Final
///                           (1..=5)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    #[default]
    Intake,
    Diagnostic,
    Learning,
    Final,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Intake => "intake",
            AppView::Diagnostic => "diagnostic",
            AppView::Learning => "learning",
            AppView::Final => "final",
        }
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for AppView {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AppView::*;
        matches!(
            (self, target),
            (Intake, Diagnostic)
                | (Diagnostic, Learning)
                // module to module stays in Learning
                | (Learning, Learning)
                | (Learning, Final)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AppView::*;
        match self {
            Intake => vec![Diagnostic],
            Diagnostic => vec![Learning],
            Learning => vec![Learning, Final],
            Final => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_path_is_valid() {
        let view = AppView::Intake
            .transition_to(AppView::Diagnostic)
            .and_then(|v| v.transition_to(AppView::Learning))
            .and_then(|v| v.transition_to(AppView::Learning))
            .and_then(|v| v.transition_to(AppView::Final))
            .unwrap();
        assert_eq!(view, AppView::Final);
    }

    #[test]
    fn skipping_or_going_back_is_rejected() {
        assert!(AppView::Intake.transition_to(AppView::Learning).is_err());
        assert!(AppView::Diagnostic.transition_to(AppView::Intake).is_err());
        assert!(AppView::Learning.transition_to(AppView::Diagnostic).is_err());
    }

    #[test]
    fn final_is_terminal() {
        assert!(AppView::Final.is_terminal());
        assert!(!AppView::Learning.is_terminal());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for view in [AppView::Intake, AppView::Diagnostic, AppView::Learning, AppView::Final] {
            for target in view.valid_transitions() {
                assert!(view.can_transition_to(&target));
            }
        }
    }
}
