//! State persistence seam between the handler and its collaborator.

pub mod store;

pub use store::{InMemoryStore, StateStore, SUBSCRIPTIONS_KEY, UNIVERSES_KEY};
