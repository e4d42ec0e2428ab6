//! Reducer logic for the todo list.
//!
//! Every operation reads the current list and commits a complete new
//! snapshot. Rejected input (blank titles) and lookup misses reduce to
//! silent no-ops; nothing here ever fails or produces effects.

use crate::types::{Todo, TodoAction, TodoId, TodoListState};
use std::sync::Arc;
use taskstore_core::{
    effect::Effects,
    environment::IdGenerator,
    reducer::Reducer,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Generator for fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the trimmed title, or `None` when it is blank
    fn accepted_title(title: &str) -> Option<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            TodoAction::Add {
                title,
                category,
                important,
            } => {
                let Some(title) = Self::accepted_title(&title) else {
                    tracing::debug!("Ignoring add with blank title");
                    return Effects::new();
                };

                let id = TodoId::from_raw(env.ids.next_id());
                let todo = Todo::new(id, title, category, important);
                // Newest first
                state.todos.insert(0, todo);
                Effects::new()
            }

            TodoAction::Edit {
                id,
                title,
                category,
                important,
            } => {
                let Some(title) = Self::accepted_title(&title) else {
                    tracing::debug!(%id, "Ignoring edit with blank title");
                    return Effects::new();
                };

                if let Some(item) = state.todos.iter_mut().find(|t| t.id == id) {
                    item.title = title;
                    // The supplied category always wins, even when absent
                    item.category = category;
                    if let Some(important) = important {
                        item.important = important;
                    }
                } else {
                    tracing::debug!(%id, "Ignoring edit for unknown todo");
                }
                Effects::new()
            }

            TodoAction::Toggle { id } => {
                if let Some(item) = state.todos.iter_mut().find(|t| t.id == id) {
                    item.completed = !item.completed;
                } else {
                    tracing::debug!(%id, "Ignoring toggle for unknown todo");
                }
                Effects::new()
            }

            TodoAction::ToggleImportant { id } => {
                if let Some(item) = state.todos.iter_mut().find(|t| t.id == id) {
                    item.important = !item.important;
                } else {
                    tracing::debug!(%id, "Ignoring important-toggle for unknown todo");
                }
                Effects::new()
            }

            TodoAction::Delete { id } => {
                state.todos.retain(|t| t.id != id);
                Effects::new()
            }
        }
    }
}
