//! End-to-end tests for the `TodoList` handle and its snapshot contract.

use std::sync::Arc;
use taskstore_core::reducer::Reducer;
use taskstore_testing::SequentialIdGenerator;
use taskstore_todos::{TodoAction, TodoEnvironment, TodoId, TodoList, TodoListState, TodoReducer};

fn test_list() -> TodoList {
    TodoList::new(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())))
}

#[tokio::test]
async fn add_publishes_a_snapshot_to_watchers() {
    let todos = test_list();
    let mut rx = todos.watch();
    assert!(rx.borrow().is_empty());

    todos.add("Buy milk", Some("groceries".to_string()), false).await;

    rx.changed().await.ok();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.todos[0].title, "Buy milk");
    assert_eq!(snapshot.todos[0].category.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn operations_drive_the_full_lifecycle() {
    let todos = test_list();

    todos.add("Buy milk", None, false).await;
    todos.add("Write report", Some("work".to_string()), true).await;

    let snapshot = todos.snapshot().await;
    assert_eq!(snapshot.len(), 2);
    // Newest first
    assert_eq!(snapshot.todos[0].title, "Write report");
    let milk = snapshot.todos[1].id;

    todos.toggle(milk).await;
    assert_eq!(todos.snapshot().await.completed_count(), 1);

    todos.toggle_important(milk).await;
    assert_eq!(todos.snapshot().await.important_count(), 2);

    todos
        .edit(milk, "Buy oat milk", Some("groceries".to_string()), Some(false))
        .await;
    let snapshot = todos.snapshot().await;
    let edited = snapshot.get(milk);
    assert_eq!(edited.map(|t| t.title.as_str()), Some("Buy oat milk"));
    assert_eq!(edited.map(|t| t.important), Some(false));
    // Toggled state survives edits
    assert_eq!(edited.map(|t| t.completed), Some(true));

    todos.delete(milk).await;
    let snapshot = todos.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert!(!snapshot.contains(milk));

    // Deleting again changes nothing
    todos.delete(milk).await;
    assert_eq!(todos.snapshot().await.len(), 1);
}

#[tokio::test]
async fn blank_input_changes_nothing() {
    let todos = test_list();

    todos.add("   ", None, false).await;
    assert!(todos.snapshot().await.is_empty());

    todos.add("Real entry", None, false).await;
    let id = todos.snapshot().await.todos[0].id;

    todos.edit(id, "\t", Some("ignored".to_string()), Some(true)).await;
    let snapshot = todos.snapshot().await;
    assert_eq!(snapshot.todos[0].title, "Real entry");
    assert_eq!(snapshot.todos[0].category, None);
    assert!(!snapshot.todos[0].important);
}

#[tokio::test]
async fn independent_watchers_share_the_latest_snapshot() {
    let todos = test_list();
    let rx_a = todos.watch();
    let rx_b = todos.watch();

    todos.add("one", None, false).await;
    todos.add("two", None, false).await;

    assert_eq!(rx_a.borrow().len(), 2);
    assert_eq!(rx_b.borrow().len(), 2);
}

#[tokio::test]
async fn unknown_ids_are_ignored_by_every_operation() {
    let todos = test_list();
    todos.add("keep me", None, false).await;
    let ghost = TodoId::from_raw(999);

    todos.toggle(ghost).await;
    todos.toggle_important(ghost).await;
    todos.edit(ghost, "new title", None, None).await;
    todos.delete(ghost).await;

    let snapshot = todos.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.todos[0].title, "keep me");
    assert!(!snapshot.todos[0].completed);
    assert!(!snapshot.todos[0].important);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(100)))
    }

    proptest! {
        #[test]
        fn add_stores_exactly_the_trimmed_title(raw in "[ \t]{0,3}[A-Za-z0-9 ]{0,20}[ \t]{0,3}") {
            let env = test_env();
            let mut state = TodoListState::new();
            TodoReducer::new().reduce(&mut state, TodoAction::Add {
                title: raw.clone(),
                category: None,
                important: false,
            }, &env);

            let trimmed = raw.trim();
            if trimmed.is_empty() {
                prop_assert!(state.is_empty());
            } else {
                prop_assert_eq!(state.len(), 1);
                prop_assert_eq!(state.todos[0].title.as_str(), trimmed);
                prop_assert!(!state.todos[0].completed);
            }
        }

        #[test]
        fn toggle_pairs_are_an_involution(titles in proptest::collection::vec("[a-z]{1,8}", 1..5), pick in 0usize..5) {
            let env = test_env();
            let reducer = TodoReducer::new();
            let mut state = TodoListState::new();
            for title in &titles {
                reducer.reduce(&mut state, TodoAction::Add {
                    title: title.clone(),
                    category: None,
                    important: false,
                }, &env);
            }

            let id = state.todos[pick % state.len()].id;
            let before = state.clone();
            reducer.reduce(&mut state, TodoAction::Toggle { id }, &env);
            reducer.reduce(&mut state, TodoAction::Toggle { id }, &env);
            prop_assert_eq!(state, before);
        }
    }
}
