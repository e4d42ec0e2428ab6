//! The `TodoList` handle.
//!
//! A cheap-to-clone facade over the todo store. Each method is a thin
//! use-case wrapper that forwards one operation to the reducer; reads go
//! through the snapshot channel.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoListState};
use taskstore_runtime::Store;
use tokio::sync::watch;

/// Handle to the todo list store
///
/// All clones share the same underlying store; the todo list is a
/// process-lifetime singleton owned by whoever assembled the environment.
#[derive(Clone)]
pub struct TodoList {
    store: Store<TodoListState, TodoAction, TodoEnvironment, TodoReducer>,
}

impl TodoList {
    /// Creates an empty todo list backed by the given environment
    #[must_use]
    pub fn new(environment: TodoEnvironment) -> Self {
        Self {
            store: Store::new(TodoListState::new(), TodoReducer::new(), environment),
        }
    }

    /// Add a new todo to the front of the list
    ///
    /// A blank `title` leaves the list unchanged.
    pub async fn add(&self, title: impl Into<String>, category: Option<String>, important: bool) {
        self.store
            .send(TodoAction::Add {
                title: title.into(),
                category,
                important,
            })
            .await;
    }

    /// Edit an existing todo
    ///
    /// A blank `title` or an unknown `id` leaves the list unchanged. The
    /// supplied `category` replaces any prior value (including clearing it
    /// with `None`); `important` only changes the flag when `Some`.
    pub async fn edit(
        &self,
        id: TodoId,
        title: impl Into<String>,
        category: Option<String>,
        important: Option<bool>,
    ) {
        self.store
            .send(TodoAction::Edit {
                id,
                title: title.into(),
                category,
                important,
            })
            .await;
    }

    /// Flip the completed flag of a todo; unknown ids are ignored
    pub async fn toggle(&self, id: TodoId) {
        self.store.send(TodoAction::Toggle { id }).await;
    }

    /// Flip the important flag of a todo; unknown ids are ignored
    pub async fn toggle_important(&self, id: TodoId) {
        self.store.send(TodoAction::ToggleImportant { id }).await;
    }

    /// Remove a todo from the list; unknown ids are ignored
    pub async fn delete(&self, id: TodoId) {
        self.store.send(TodoAction::Delete { id }).await;
    }

    /// Subscribe to whole-list snapshots
    ///
    /// The receiver holds the current snapshot and is updated with the
    /// complete new list on every committed mutation.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<TodoListState> {
        self.store.watch()
    }

    /// Read the current snapshot
    pub async fn snapshot(&self) -> TodoListState {
        self.store.state(Clone::clone).await
    }
}
