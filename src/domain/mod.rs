//! Domain layer containing the course logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `profile` - Learner profile and its closed vocabularies
//! - `curriculum` - Module ids, questions and the static question banks
//! - `assessment` - Answer sheets, scoring and track placement
//! - `journey` - The course wizard aggregate and its screen-local sessions
//! - `lessons` - Interactive lesson tools (token estimator, simulators, builders)
//! - `prompt` - System prompt generation and final recommendations
//! - `coach` - Coach chat transcript

pub mod assessment;
pub mod coach;
pub mod curriculum;
pub mod foundation;
pub mod journey;
pub mod lessons;
pub mod profile;
pub mod prompt;
