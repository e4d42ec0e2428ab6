//! Reactive todo list store.
//!
//! This crate owns the authoritative in-memory list of todo items and
//! exposes a continuously observable snapshot of its contents. It
//! demonstrates the taskstore architecture end to end:
//!
//! - Simple domain model (add, edit, toggle, delete todos)
//! - Silent validation no-ops (blank titles are rejected without error)
//! - Newest-first snapshot ordering
//! - The [`TodoList`] handle whose methods are thin use-case wrappers over
//!   the store
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskstore_core::environment::MonotonicIdGenerator;
//! use taskstore_todos::{TodoEnvironment, TodoList};
//!
//! # async fn example() {
//! let env = TodoEnvironment::new(Arc::new(MonotonicIdGenerator::new()));
//! let todos = TodoList::new(env);
//!
//! todos.add("Buy milk", Some("groceries".to_string()), false).await;
//!
//! let snapshot = todos.snapshot().await;
//! println!("Total todos: {}", snapshot.len());
//! # }
//! ```

pub mod list;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use list::TodoList;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Todo, TodoAction, TodoId, TodoListState};
