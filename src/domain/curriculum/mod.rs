//! Curriculum module - the fixed course content.
//!
//! Five modules in a fixed order, each with a three-question quiz, plus a
//! five-question diagnostic. All content is static and immutable.

mod banks;
mod module_id;
mod question;

pub use banks::{diagnostic_questions, quiz_questions, DIAGNOSTIC_QUESTIONS};
pub use module_id::{ModuleId, TrackCallout};
pub use question::{AnswerOption, Question};
