//! Coach module - the side-panel chat tutor.

mod transcript;

pub use transcript::{
    ChatMessage, ChatRole, CoachPanel, PendingTurn, COACH_GREETING, COACH_SYSTEM_INSTRUCTION,
    EMPTY_REPLY, FAILURE_REPLY, OFFLINE_REPLY,
};
