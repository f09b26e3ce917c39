//! Prompt module - the artifact the learner takes away.

mod clipboard;
mod generator;
mod recommendations;

pub use clipboard::{CopyConfirmation, COPY_CONFIRMATION_MILLIS};
pub use generator::{
    generate_system_prompt, temperature, PromptFormat, SystemPrompt, CREATIVE_TEMPERATURE,
    DEFAULT_TEMPERATURE, HIGH_CREATIVITY_ABOVE, PRECISION_TEMPERATURE, SECURITY_CLAUSE_ABOVE,
};
pub use recommendations::{Recommendations, STRICT_SECURITY_ABOVE};
