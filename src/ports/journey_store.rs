//! Journey Store Port - Interface for holding live journeys.
//!
//! A journey lives only as long as its session; the store maps session ids
//! to the latest `AppState` and forgets it on exit.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::journey::AppState;

/// Transition applied by [`JourneyStore::update`] while the journey is held.
pub type JourneyUpdate = Box<dyn FnOnce(&AppState) -> Result<AppState, DomainError> + Send>;

/// States on either side of an update.
#[derive(Debug, Clone)]
pub struct JourneyTransition {
    pub previous: AppState,
    pub current: AppState,
}

/// Errors that can occur during journey store operations
#[derive(Debug, thiserror::Error)]
pub enum JourneyStoreError {
    #[error("Journey not found for session: {0}")]
    NotFound(SessionId),

    #[error("Journey already exists for session: {0}")]
    AlreadyExists(SessionId),

    #[error("Update rejected: {0}")]
    Rejected(DomainError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for saving and loading journeys by session
#[async_trait]
pub trait JourneyStore: Send + Sync {
    /// Stores a new journey.
    ///
    /// # Errors
    /// Returns `JourneyStoreError::AlreadyExists` if the session is taken
    async fn insert(&self, session_id: SessionId, state: AppState)
        -> Result<(), JourneyStoreError>;

    /// Loads the latest journey state.
    ///
    /// # Errors
    /// Returns `JourneyStoreError::NotFound` if no journey exists
    async fn load(&self, session_id: SessionId) -> Result<AppState, JourneyStoreError>;

    /// Applies `apply` to the stored journey and stores its result as one
    /// step. No other write to the session can interleave.
    ///
    /// # Errors
    /// - `JourneyStoreError::NotFound` if no journey exists
    /// - `JourneyStoreError::Rejected` if `apply` fails; the stored journey
    ///   is left unchanged
    async fn update(
        &self,
        session_id: SessionId,
        apply: JourneyUpdate,
    ) -> Result<JourneyTransition, JourneyStoreError>;

    /// Discards a journey, returning its last state.
    ///
    /// # Errors
    /// Returns `JourneyStoreError::NotFound` if no journey exists
    async fn discard(&self, session_id: SessionId) -> Result<AppState, JourneyStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_session_id() {
        let id = SessionId::new();
        assert_eq!(
            JourneyStoreError::NotFound(id).to_string(),
            format!("Journey not found for session: {}", id)
        );
    }

    #[test]
    fn journey_store_is_object_safe() {
        fn _accepts(_store: &dyn JourneyStore) {}
    }
}
