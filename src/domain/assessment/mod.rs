//! Assessment module - answer sheets, scoring and track placement.

mod answer_sheet;
mod feedback;
mod scoring;

pub use answer_sheet::AnswerSheet;
pub use feedback::AnswerFeedback;
pub use scoring::{classify, score_answers, ADVANCED_THRESHOLD, PRACTITIONER_THRESHOLD};
