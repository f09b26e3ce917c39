//! Coach chat handler.

mod ask_coach;

pub use ask_coach::{
    AskCoachCommand, AskCoachHandler, AskCoachResult, CoachReplySource, DEFAULT_MAX_OUTPUT_TOKENS,
};
