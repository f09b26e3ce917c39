//! Journey module - the course wizard.
//!
//! `AppState` is the aggregate: intake, diagnostic, five modules, final.
//! `DiagnosticSession` and `ModuleSession` hold the screen-local state of
//! the diagnostic and of a single module, and hand their results to
//! `AppState::apply` as [`JourneyEvent`]s.

mod diagnostic_session;
mod events;
mod module_session;
mod state;
mod view;

pub use diagnostic_session::{DiagnosticSession, DiagnosticStep};
pub use events::{DiagnosticOutcome, IntakeSubmission, JourneyEvent};
pub use module_session::{ModuleSession, ModuleStep};
pub use state::{AppState, MODULE_COUNT, MODULE_PASS_THRESHOLD, PRECISION_THRESHOLD};
pub use view::AppView;
