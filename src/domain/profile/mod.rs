//! Profile module - who the learner is and what the course learned about them.

mod attributes;
#[allow(clippy::module_inception)]
mod profile;

pub use attributes::{RiskTolerance, Track, UseCase, WorkStyle};
pub use profile::UserProfile;
