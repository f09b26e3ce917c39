//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod coach;
pub mod journey;

pub use coach::{AskCoachCommand, AskCoachHandler, AskCoachResult, CoachReplySource};
pub use journey::{
    AdvanceJourneyCommand, AdvanceJourneyHandler, AdvanceJourneyResult, ExitJourneyCommand,
    ExitJourneyHandler, ExitJourneyResult, JourneyError, RenderSystemPromptHandler,
    RenderSystemPromptQuery, RenderSystemPromptResult, StartJourneyCommand, StartJourneyHandler,
    StartJourneyResult,
};
