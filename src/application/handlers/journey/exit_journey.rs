//! ExitJourneyHandler - Command handler for ending a session.
//!
//! Journeys are not persisted; exiting discards the state for good.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::journey::AppState;
use crate::ports::JourneyStore;

use super::JourneyError;

/// Command to end a journey.
#[derive(Debug, Clone)]
pub struct ExitJourneyCommand {
    pub session_id: SessionId,
}

/// Result of ending a journey.
#[derive(Debug, Clone)]
pub struct ExitJourneyResult {
    /// State at the moment of exit.
    pub final_state: AppState,
}

/// Handler for ending journeys.
pub struct ExitJourneyHandler {
    store: Arc<dyn JourneyStore>,
}

impl ExitJourneyHandler {
    pub fn new(store: Arc<dyn JourneyStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ExitJourneyCommand) -> Result<ExitJourneyResult, JourneyError> {
        let final_state = self.store.discard(cmd.session_id).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            view = %final_state.view(),
            completed = final_state.completed_modules().len(),
            "Journey exited"
        );

        Ok(ExitJourneyResult { final_state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryJourneyStore;
    use crate::domain::journey::AppView;

    #[tokio::test]
    async fn exit_discards_journey() {
        let store = Arc::new(InMemoryJourneyStore::new());
        let id = SessionId::new();
        store.insert(id, AppState::new()).await.unwrap();
        let handler = ExitJourneyHandler::new(store.clone());

        let result = handler
            .handle(ExitJourneyCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(result.final_state.view(), AppView::Intake);
        assert_eq!(store.journey_count().await, 0);
    }

    #[tokio::test]
    async fn exit_twice_is_not_found() {
        let store = Arc::new(InMemoryJourneyStore::new());
        let id = SessionId::new();
        store.insert(id, AppState::new()).await.unwrap();
        let handler = ExitJourneyHandler::new(store);

        handler
            .handle(ExitJourneyCommand { session_id: id })
            .await
            .unwrap();
        let result = handler.handle(ExitJourneyCommand { session_id: id }).await;

        assert!(matches!(result, Err(JourneyError::NotFound(_))));
    }
}
