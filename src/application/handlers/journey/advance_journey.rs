//! AdvanceJourneyHandler - Command handler for applying journey events.
//!
//! Applies one event through `AppState::apply` inside a single store update,
//! so concurrent events for one session run one after another. Rejected
//! events leave the stored state untouched.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::journey::{AppState, AppView, JourneyEvent};
use crate::ports::{JourneyStore, JourneyStoreError, JourneyTransition};

use super::JourneyError;

/// Command to apply an event to a journey.
#[derive(Debug, Clone)]
pub struct AdvanceJourneyCommand {
    pub session_id: SessionId,
    pub event: JourneyEvent,
}

impl AdvanceJourneyCommand {
    pub fn new(session_id: SessionId, event: impl Into<JourneyEvent>) -> Self {
        Self {
            session_id,
            event: event.into(),
        }
    }
}

/// Result of applying an event.
#[derive(Debug, Clone)]
pub struct AdvanceJourneyResult {
    /// View before the event.
    pub previous_view: AppView,
    /// State after the event.
    pub state: AppState,
}

/// Handler for advancing journeys.
pub struct AdvanceJourneyHandler {
    store: Arc<dyn JourneyStore>,
}

impl AdvanceJourneyHandler {
    pub fn new(store: Arc<dyn JourneyStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceJourneyCommand,
    ) -> Result<AdvanceJourneyResult, JourneyError> {
        let session_id = cmd.session_id;
        let event_name = cmd.event.name();
        let event = cmd.event;

        let transition = match self
            .store
            .update(session_id, Box::new(move |state: &AppState| state.apply(event)))
            .await
        {
            Ok(transition) => transition,
            Err(JourneyStoreError::Rejected(err)) => {
                tracing::warn!(
                    session_id = %session_id,
                    event = event_name,
                    code = %err.code,
                    "Journey event rejected"
                );
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        let JourneyTransition { previous, current } = transition;
        tracing::info!(
            session_id = %session_id,
            event = event_name,
            from = %previous.view(),
            view = %current.view(),
            module = current.current_module().number(),
            keys_unlocked = current.keys_unlocked(),
            "Journey advanced"
        );

        Ok(AdvanceJourneyResult {
            previous_view: previous.view(),
            state: current,
        })
    }
}
