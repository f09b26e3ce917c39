//! In-Memory Journey Store Adapter
//!
//! Keeps live journeys in memory. A journey is lost when the process exits,
//! which matches its session-scoped lifetime.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::journey::AppState;
use crate::ports::{JourneyStore, JourneyStoreError, JourneyTransition, JourneyUpdate};

/// In-memory storage for journeys
#[derive(Debug, Clone, Default)]
pub struct InMemoryJourneyStore {
    journeys: Arc<RwLock<HashMap<SessionId, AppState>>>,
}

impl InMemoryJourneyStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored journeys (useful for tests)
    pub async fn clear(&self) {
        self.journeys.write().await.clear();
    }

    /// Get the number of live journeys
    pub async fn journey_count(&self) -> usize {
        self.journeys.read().await.len()
    }
}

#[async_trait]
impl JourneyStore for InMemoryJourneyStore {
    async fn insert(
        &self,
        session_id: SessionId,
        state: AppState,
    ) -> Result<(), JourneyStoreError> {
        let mut journeys = self.journeys.write().await;
        if journeys.contains_key(&session_id) {
            return Err(JourneyStoreError::AlreadyExists(session_id));
        }
        journeys.insert(session_id, state);
        Ok(())
    }

    async fn load(&self, session_id: SessionId) -> Result<AppState, JourneyStoreError> {
        let journeys = self.journeys.read().await;
        journeys
            .get(&session_id)
            .cloned()
            .ok_or(JourneyStoreError::NotFound(session_id))
    }

    async fn update(
        &self,
        session_id: SessionId,
        apply: JourneyUpdate,
    ) -> Result<JourneyTransition, JourneyStoreError> {
        let mut journeys = self.journeys.write().await;
        let slot = journeys
            .get_mut(&session_id)
            .ok_or(JourneyStoreError::NotFound(session_id))?;
        let current = apply(&*slot).map_err(JourneyStoreError::Rejected)?;
        let previous = std::mem::replace(slot, current.clone());
        Ok(JourneyTransition { previous, current })
    }

    async fn discard(&self, session_id: SessionId) -> Result<AppState, JourneyStoreError> {
        self.journeys
            .write()
            .await
            .remove(&session_id)
            .ok_or(JourneyStoreError::NotFound(session_id))
    }
}
