//! Demo binary for the taskstore workspace.
//!
//! Assembles the process-lifetime singletons once (explicit constructor
//! wiring, no injection framework) and drives the full flow: failed and
//! successful logins, todo CRUD with a live snapshot subscriber, and
//! logout.

use anyhow::Result;
use std::sync::Arc;
use taskstore_auth::mocks::{DEMO_EMAIL, DEMO_PASSWORD, MockAuthClient};
use taskstore_auth::{AuthEnvironment, AuthStore, JsonFileSessionStore};
use taskstore_core::environment::{MonotonicIdGenerator, SystemClock};
use taskstore_todos::{TodoEnvironment, TodoList, TodoListState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_todos(snapshot: &TodoListState) {
    for todo in &snapshot.todos {
        let done = if todo.completed { "x" } else { " " };
        let flag = if todo.important { " !" } else { "" };
        let category = todo
            .category
            .as_deref()
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        println!("  [{done}] {}{flag}{category}", todo.title);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskstore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Taskstore Demo ===\n");

    // Assemble the singletons once; everything downstream borrows these.
    let session_path = std::env::temp_dir().join("taskstore-session.json");
    let auth = AuthStore::new(AuthEnvironment::new(
        MockAuthClient::new(Arc::new(SystemClock)),
        JsonFileSessionStore::new(session_path.clone()),
    ))
    .await;
    let todos = TodoList::new(TodoEnvironment::new(Arc::new(MonotonicIdGenerator::new())));

    if let Some(user) = auth.current_user().await {
        println!("Restored session for {} from {}\n", user.email, session_path.display());
        auth.logout().await;
        println!("Logged out the restored session to start fresh.\n");
    }

    // A rejected attempt first
    let rejected = auth.login("someone@example.com", "hunter2").await?;
    println!(">>> login someone@example.com: {}", rejected.message);

    // Then the demo account
    let accepted = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await?;
    println!(">>> login {DEMO_EMAIL}: {}", accepted.message);
    if let Some(user) = auth.current_user().await {
        println!("    signed in as {} <{}>\n", user.name, user.email);
    }

    // Watch the todo list while mutating it
    let todo_watch = todos.watch();

    println!("Creating todos...");
    todos.add("Buy milk", Some("groceries".to_string()), false).await;
    todos.add("Write report", Some("work".to_string()), true).await;
    todos.add("Walk the dog", None, false).await;
    todos.add("   ", None, false).await; // blank title, silently ignored
    print_todos(&todo_watch.borrow().clone());

    let snapshot = todos.snapshot().await;
    let milk = snapshot.todos[2].id;
    let dog = snapshot.todos[0].id;

    println!("\nCompleting 'Buy milk' and flagging 'Walk the dog'...");
    todos.toggle(milk).await;
    todos.toggle_important(dog).await;
    print_todos(&todo_watch.borrow().clone());

    println!("\nEditing 'Buy milk'...");
    todos
        .edit(milk, "Buy oat milk", Some("groceries".to_string()), None)
        .await;
    print_todos(&todo_watch.borrow().clone());

    let snapshot = todos.snapshot().await;
    println!(
        "\nStats: {} total, {} completed, {} important, categories: {}",
        snapshot.len(),
        snapshot.completed_count(),
        snapshot.important_count(),
        snapshot.categories().join(", "),
    );

    println!("\nDeleting 'Write report'...");
    let report = snapshot.todos[1].id;
    todos.delete(report).await;
    print_todos(&todos.snapshot().await);

    auth.logout().await;
    println!(
        "\nLogged out; persisted record at {} cleared.",
        session_path.display()
    );
    println!("\n=== Demo Complete ===");

    Ok(())
}
