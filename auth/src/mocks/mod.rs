//! Mock collaborator implementations for testing and demos.
//!
//! The mock authentication client reproduces the demo service's exact
//! decision ladder; the in-memory session store stands in for local
//! key-value storage.

mod auth_client;
mod session_store;

pub use auth_client::{DEMO_EMAIL, DEMO_PASSWORD, FailingAuthClient, MockAuthClient};
pub use session_store::InMemorySessionStore;
