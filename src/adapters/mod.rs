//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (Gemini, mock)
//! - `storage` - Journey stores (in-memory)

pub mod ai;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use storage::InMemoryJourneyStore;
