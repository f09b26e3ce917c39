//! Journey command and query handlers.
//!
//! Handlers drive an `AppState` held in a `JourneyStore`: start a journey,
//! apply events to it, render the final prompt and exit.

use std::fmt;

use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::JourneyStoreError;

// Command handlers
mod advance_journey;
mod exit_journey;
mod start_journey;

// Query handlers
mod render_system_prompt;

pub use advance_journey::{AdvanceJourneyCommand, AdvanceJourneyHandler, AdvanceJourneyResult};
pub use exit_journey::{ExitJourneyCommand, ExitJourneyHandler, ExitJourneyResult};
pub use start_journey::{StartJourneyCommand, StartJourneyHandler, StartJourneyResult};

pub use render_system_prompt::{
    RenderSystemPromptHandler, RenderSystemPromptQuery, RenderSystemPromptResult,
};

/// Error type shared by the journey handlers.
#[derive(Debug, Clone)]
pub enum JourneyError {
    /// No journey for this session.
    NotFound(SessionId),
    /// A journey is already running for this session.
    AlreadyStarted(SessionId),
    /// The domain rejected the operation.
    Domain(DomainError),
    /// The store failed.
    Storage(String),
}

impl fmt::Display for JourneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyError::NotFound(id) => write!(f, "Journey not found: {}", id),
            JourneyError::AlreadyStarted(id) => write!(f, "Journey already started: {}", id),
            JourneyError::Domain(err) => write!(f, "{}", err),
            JourneyError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for JourneyError {}

impl From<DomainError> for JourneyError {
    fn from(err: DomainError) -> Self {
        JourneyError::Domain(err)
    }
}

impl From<JourneyStoreError> for JourneyError {
    fn from(err: JourneyStoreError) -> Self {
        match err {
            JourneyStoreError::NotFound(id) => JourneyError::NotFound(id),
            JourneyStoreError::AlreadyExists(id) => JourneyError::AlreadyStarted(id),
            JourneyStoreError::Rejected(err) => JourneyError::Domain(err),
            JourneyStoreError::Storage(msg) => JourneyError::Storage(msg),
        }
    }
}
