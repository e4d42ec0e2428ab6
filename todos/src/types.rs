//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items, newest first. Items
//! are only ever replaced wholesale: every mutation publishes a complete new
//! snapshot, so collaborators never observe in-place field edits.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Ids are plain integers handed out by the environment's id generator;
/// they are unique and stable for the lifetime of the item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw id value
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Title of the todo; stored trimmed, never blank
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// Optional category label
    pub category: Option<String>,
    /// Whether the todo is flagged as important
    pub important: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub const fn new(id: TodoId, title: String, category: Option<String>, important: bool) -> Self {
        Self {
            id,
            title,
            completed: false,
            category,
            important,
        }
    }
}

/// State of the todo list
///
/// The list is ordered newest-first: `add` prepends. This is the value
/// delivered, whole, to every snapshot subscriber.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListState {
    /// All todos, newest first
    pub todos: Vec<Todo>,
}

impl TodoListState {
    /// Creates a new empty todo list state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` if the list holds no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo with the given id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of important todos
    #[must_use]
    pub fn important_count(&self) -> usize {
        self.todos.iter().filter(|t| t.important).count()
    }

    /// Returns the distinct categories in list order
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for category in self.todos.iter().filter_map(|t| t.category.as_deref()) {
            if !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}

/// Actions accepted by the todo list reducer
///
/// Every action is total: malformed input (blank title) and lookup misses
/// (unknown id) reduce to silent no-ops rather than errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Add a new todo to the front of the list
    Add {
        /// Title of the todo; blank titles are ignored
        title: String,
        /// Optional category label
        category: Option<String>,
        /// Whether the todo starts out flagged as important
        important: bool,
    },

    /// Edit an existing todo
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Replacement title; blank titles leave the entry untouched
        title: String,
        /// Replacement category; `None` clears any prior value
        category: Option<String>,
        /// Replacement important flag; `None` keeps the current value
        important: Option<bool>,
    },

    /// Flip the completed flag of a todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Flip the important flag of a todo
    ToggleImportant {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove a todo from the list
    Delete {
        /// Todo to remove
        id: TodoId,
    },
}
