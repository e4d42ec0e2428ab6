//! # Taskstore Auth
//!
//! Session state and login flow for the taskstore architecture.
//!
//! The session is a reactive store like any other feature: state is an
//! `Option<UserInfo>`, mutations arrive as actions, and the login network
//! call is an effect against an injected [`AuthClient`] collaborator. The
//! session survives restarts through a [`SessionStore`], written as one
//! batch on login and cleared as one batch on logout.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskstore_auth::{AuthEnvironment, AuthStore};
//! use taskstore_auth::mocks::{InMemorySessionStore, MockAuthClient};
//! use taskstore_core::environment::SystemClock;
//!
//! # async fn example() -> Result<(), taskstore_auth::AuthError> {
//! let env = AuthEnvironment::new(
//!     MockAuthClient::new(Arc::new(SystemClock)),
//!     InMemorySessionStore::new(),
//! );
//! let auth = AuthStore::new(env).await;
//!
//! let response = auth.login("user@example.com", "password").await?;
//! assert!(response.success);
//! assert!(auth.is_logged_in().await);
//!
//! auth.logout().await;
//! assert!(!auth.is_logged_in().await);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod constants;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducer;
pub mod state;
pub mod store;
pub mod stores;
pub mod validate;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export commonly used types
pub use actions::AuthAction;
pub use environment::AuthEnvironment;
pub use error::{AuthError, Result};
pub use providers::{AuthClient, LoginRequest, LoginResponse, SessionStore, UserPayload};
pub use reducer::AuthReducer;
pub use state::{SessionRecord, SessionState, UserInfo};
pub use store::AuthStore;
pub use stores::JsonFileSessionStore;
