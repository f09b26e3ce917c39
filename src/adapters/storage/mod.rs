//! Storage Adapters
//!
//! Implementations of the JourneyStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryJourneyStore** - Keeps journeys in memory for the life of the process
//!
//! ## Usage
//!
//! ```ignore
//! use ai_teacher::adapters::storage::InMemoryJourneyStore;
//!
//! let store = Arc::new(InMemoryJourneyStore::new());
//! ```

mod in_memory_journey_store;

pub use in_memory_journey_store::InMemoryJourneyStore;
