//! AI Teacher - Guided LLM-literacy course core
//!
//! A learner moves through intake, a placement diagnostic, five gated
//! lessons (tokens, temperature, prompting, grounding, data security) and
//! ends with a system prompt generated from their profile. A side-panel
//! coach forwards questions to an optional completion provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
