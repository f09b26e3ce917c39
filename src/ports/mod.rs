//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text completion for the coach
//! - `JourneyStore` - Live journeys keyed by session

mod ai_provider;
mod journey_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use journey_store::{JourneyStore, JourneyStoreError, JourneyTransition, JourneyUpdate};
