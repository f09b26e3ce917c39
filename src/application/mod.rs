//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Journey handlers go through the `JourneyStore` port; the coach handler
//! goes through the `AIProvider` port.

pub mod handlers;

pub use handlers::{
    // Journey handlers
    AdvanceJourneyCommand, AdvanceJourneyHandler, AdvanceJourneyResult,
    ExitJourneyCommand, ExitJourneyHandler, ExitJourneyResult,
    JourneyError,
    RenderSystemPromptHandler, RenderSystemPromptQuery, RenderSystemPromptResult,
    StartJourneyCommand, StartJourneyHandler, StartJourneyResult,
    // Coach handler
    AskCoachCommand, AskCoachHandler, AskCoachResult, CoachReplySource,
};
