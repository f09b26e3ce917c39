//! StartJourneyHandler - Command handler for opening a new journey.
//!
//! Every journey starts from the same state: intake view, module 1 current,
//! nothing completed, all keys locked and the default profile.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::journey::AppState;
use crate::ports::JourneyStore;

use super::JourneyError;

/// Command to start a journey.
#[derive(Debug, Clone, Default)]
pub struct StartJourneyCommand {
    /// Session to bind the journey to; a fresh id is minted when absent.
    pub session_id: Option<SessionId>,
}

impl StartJourneyCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_session(session_id: SessionId) -> Self {
        Self {
            session_id: Some(session_id),
        }
    }
}

/// Result of starting a journey.
#[derive(Debug, Clone)]
pub struct StartJourneyResult {
    pub session_id: SessionId,
    pub state: AppState,
}

/// Handler for starting journeys.
pub struct StartJourneyHandler {
    store: Arc<dyn JourneyStore>,
}

impl StartJourneyHandler {
    pub fn new(store: Arc<dyn JourneyStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartJourneyCommand,
    ) -> Result<StartJourneyResult, JourneyError> {
        let session_id = cmd.session_id.unwrap_or_default();
        let state = AppState::new();

        self.store.insert(session_id, state.clone()).await?;

        tracing::info!(session_id = %session_id, view = %state.view(), "Journey started");

        Ok(StartJourneyResult { session_id, state })
    }
}
