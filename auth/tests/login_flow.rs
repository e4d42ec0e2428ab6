//! End-to-end tests for the session store: login outcomes, persistence,
//! rehydration, and the observable session contract.

use std::sync::Arc;
use taskstore_auth::mocks::{
    DEMO_EMAIL, DEMO_PASSWORD, FailingAuthClient, InMemorySessionStore, MockAuthClient,
};
use taskstore_auth::{
    AuthEnvironment, AuthError, AuthStore, JsonFileSessionStore, SessionRecord, SessionStore,
};
use taskstore_testing::test_clock;

fn mock_client() -> MockAuthClient {
    MockAuthClient::new(Arc::new(test_clock()))
}

async fn demo_store() -> (AuthStore<MockAuthClient, InMemorySessionStore>, InMemorySessionStore) {
    let sessions = InMemorySessionStore::new();
    let store = AuthStore::new(AuthEnvironment::new(mock_client(), sessions.clone())).await;
    (store, sessions)
}

#[tokio::test]
async fn login_with_demo_credentials_succeeds() {
    let (auth, _) = demo_store().await;

    let response = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Login successful");
    assert!(!response.token.unwrap().is_empty());

    assert!(auth.is_logged_in().await);
    let user = auth.current_user().await.unwrap();
    assert_eq!(user.email, DEMO_EMAIL);
    assert_eq!(user.id, "123456");
    assert_eq!(user.name, "Demo User");
    assert!(!user.token.is_empty());
}

#[tokio::test]
async fn login_with_blank_fields_is_rejected() {
    let (auth, sessions) = demo_store().await;

    let response = auth.login("", "").await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Email and password are required");
    assert!(!auth.is_logged_in().await);
    assert_eq!(sessions.load().await.unwrap(), SessionRecord::default());
}

#[tokio::test]
async fn login_with_malformed_email_is_rejected() {
    let (auth, _) = demo_store().await;

    let response = auth.login("not-an-email", "secret").await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Please enter a valid email address");
    assert!(!auth.is_logged_in().await);
}

#[tokio::test]
async fn login_with_wrong_credentials_is_rejected() {
    let (auth, _) = demo_store().await;

    let response = auth.login("wrong@example.com", "wrongpassword").await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Invalid email or password");
    assert!(!auth.is_logged_in().await);
}

#[tokio::test]
async fn transport_failure_is_reported_and_leaves_state_alone() {
    let sessions = InMemorySessionStore::new();
    let auth = AuthStore::new(AuthEnvironment::new(
        FailingAuthClient::new("connection reset"),
        sessions.clone(),
    ))
    .await;

    let outcome = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    assert_eq!(
        outcome,
        Err(AuthError::Transport("connection reset".to_string()))
    );
    assert!(!auth.is_logged_in().await);
    assert_eq!(sessions.load().await.unwrap(), SessionRecord::default());
}

#[tokio::test]
async fn successful_login_persists_the_session_record() {
    let (auth, sessions) = demo_store().await;

    auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    let record = sessions.load().await.unwrap();
    assert!(record.logged_in);
    let restored = record.restored_user().unwrap();
    assert_eq!(restored.email, DEMO_EMAIL);
    assert_eq!(restored, auth.current_user().await.unwrap());
}

#[tokio::test]
async fn logout_clears_state_and_the_persisted_record() {
    let (auth, sessions) = demo_store().await;
    auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    auth.logout().await;

    assert!(!auth.is_logged_in().await);
    assert_eq!(auth.current_user().await, None);
    // A fresh rehydration finds no stored session
    assert_eq!(sessions.load().await.unwrap().restored_user(), None);
}

#[tokio::test]
async fn session_rehydrates_from_a_persisted_record() {
    let sessions = InMemorySessionStore::new();

    let first = AuthStore::new(AuthEnvironment::new(mock_client(), sessions.clone())).await;
    first.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    let user = first.current_user().await.unwrap();
    drop(first);

    let second = AuthStore::new(AuthEnvironment::new(mock_client(), sessions)).await;
    assert!(second.is_logged_in().await);
    assert_eq!(second.current_user().await, Some(user));
}

#[tokio::test]
async fn rehydration_after_logout_starts_logged_out() {
    let sessions = InMemorySessionStore::new();

    let first = AuthStore::new(AuthEnvironment::new(mock_client(), sessions.clone())).await;
    first.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    first.logout().await;
    drop(first);

    let second = AuthStore::new(AuthEnvironment::new(mock_client(), sessions)).await;
    assert!(!second.is_logged_in().await);
}

#[tokio::test]
async fn watchers_observe_login_and_logout() {
    let (auth, _) = demo_store().await;
    let rx = auth.watch();
    assert!(!rx.borrow().is_logged_in());

    auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    assert!(rx.borrow().is_logged_in());

    auth.logout().await;
    assert!(!rx.borrow().is_logged_in());
}

#[tokio::test]
async fn json_file_store_round_trips_across_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let first = AuthStore::new(AuthEnvironment::new(
        mock_client(),
        JsonFileSessionStore::new(path.clone()),
    ))
    .await;
    first.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    let user = first.current_user().await.unwrap();
    drop(first);

    let second = AuthStore::new(AuthEnvironment::new(
        mock_client(),
        JsonFileSessionStore::new(path.clone()),
    ))
    .await;
    assert_eq!(second.current_user().await, Some(user));

    second.logout().await;
    drop(second);

    let third = AuthStore::new(AuthEnvironment::new(
        mock_client(),
        JsonFileSessionStore::new(path),
    ))
    .await;
    assert!(!third.is_logged_in().await);
}
