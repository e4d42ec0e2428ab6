//! # Taskstore Runtime
//!
//! Runtime implementation for the taskstore architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution,
//! effect handling, and snapshot publication.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Snapshot channel**: Every committed mutation publishes the whole new
//!   state value to any number of subscribers (no partial/diff updates)
//! - **Effect executor**: Runs effect descriptions and feeds the actions they
//!   produce back into the reducer
//!
//! ## Example
//!
//! ```ignore
//! use taskstore_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! let handle = store.send(Action::DoSomething).await;
//! handle.wait().await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//!
//! // Observe snapshots
//! let mut rx = store.watch();
//! rx.changed().await?;
//! let current = rx.borrow().clone();
//! ```

use std::sync::Arc;
use std::time::Duration;
use taskstore_core::{effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Store mutations themselves are total and never fail; errors only
    /// arise from the request-response observation channel.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Timeout waiting for a terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        ///
        /// The action broadcast channel was closed, which only happens when
        /// the store has been dropped.
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Completion tracking shared between a handle and the effect tasks it covers.
///
/// The pending count lives inside the watch channel itself; `send_modify`
/// serializes updates, so waiters always observe a consistent count.
#[derive(Clone)]
struct EffectTracking {
    pending: Arc<watch::Sender<usize>>,
}

impl EffectTracking {
    fn increment(&self) {
        self.pending.send_modify(|count| *count += 1);
    }

    fn decrement(&self) {
        self.pending.send_modify(|count| *count -= 1);
    }
}

/// Guard that decrements the pending-effect count on drop.
///
/// Ensures the count is updated even if an effect task panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Handle for awaiting the completion of an action's effect chain
///
/// Covers the effects returned by the sent action and, transitively, the
/// effects of every feedback action those effects produce. An action that
/// returned no effects yields a handle that completes immediately.
#[derive(Debug)]
pub struct EffectHandle {
    pending: watch::Receiver<usize>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let (tx, rx) = watch::channel(0);
        let tracking = EffectTracking {
            pending: Arc::new(tx),
        };
        (Self { pending: rx }, tracking)
    }

    /// Wait until every tracked effect (including cascading feedback
    /// effects) has completed
    pub async fn wait(mut self) {
        // A closed channel means every tracking clone is gone, so nothing
        // can still be running.
        let _ = self.pending.wait_for(|count| *count == 0).await;
    }
}

/// The Store runtime
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
/// 5. Snapshot publication (whole-state values, in commit order)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Concurrency
///
/// Concurrent `send` calls serialize at the reducer: each takes the state
/// write lock, applies the reducer, and publishes the new snapshot before
/// releasing the lock. Subscribers therefore observe complete snapshots in
/// commit order and never a torn intermediate state. Effects run in spawned
/// tasks and do not hold the lock.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    /// Whole-state snapshot channel; `send_replace` on every commit.
    snapshot: Arc<watch::Sender<S>>,
    /// Actions produced by effects are broadcast to observers. This enables
    /// request-response patterns on top of the feedback loop.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            snapshot: Arc::clone(&self.snapshot),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The action broadcast capacity defaults to 16; increase it with
    /// [`Store::with_broadcast_capacity`] if observers frequently lag.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    /// - `capacity`: Action broadcast channel capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (snapshot, _) = watch::channel(initial_state.clone());
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            snapshot: Arc::new(snapshot),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Publishes the new snapshot
    /// 4. Executes returned effects asynchronously
    /// 5. Effects may produce more actions (feedback loop)
    ///
    /// `send` returns after starting effect execution, not completion; await
    /// the returned [`EffectHandle`] to wait for the whole effect chain.
    ///
    /// # Panics
    ///
    /// If the reducer panics, the panic propagates to the caller. Reducers
    /// should be pure functions that do not panic.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> EffectHandle {
        let (handle, tracking) = EffectHandle::new();
        self.send_with_tracking(action, &tracking).await;
        handle
    }

    /// Send an action and wait for a matching result action
    ///
    /// This method is designed for request-response flows (e.g. login). It
    /// subscribes to the action broadcast, sends the initial action, then
    /// waits for an action matching the predicate. Before returning the
    /// matching action it also waits for the full effect chain, so every
    /// state change and persistence effect triggered by the request has
    /// completed from the caller's point of view.
    ///
    /// # Arguments
    ///
    /// - `action`: The initial action to send
    /// - `predicate`: Test for the terminal result action
    /// - `timeout`: Maximum time to wait for a matching action
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: no matching action within `timeout`
    /// - [`StoreError::ChannelClosed`]: the store was dropped mid-flight
    ///
    /// # Notes
    ///
    /// Only actions produced by effects are broadcast (not the initial
    /// action), and each is broadcast after its state change has committed.
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        // Subscribe BEFORE sending to avoid a race with fast effects.
        let mut rx = self.action_broadcast.subscribe();

        let handle = self.send(action).await;

        let matched = tokio::time::timeout(timeout, async {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {} // Not the action we want, keep waiting
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Slow consumer; if the terminal action was dropped
                        // the timeout catches it.
                        tracing::warn!(skipped, "Action observer lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    }
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)??;

        handle.wait().await;
        Ok(matched)
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released
    /// promptly:
    ///
    /// ```ignore
    /// let count = store.state(|s| s.todos.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to whole-state snapshots
    ///
    /// The receiver starts out holding the current snapshot and is updated
    /// with the complete new state value on every committed mutation. Any
    /// number of independent subscribers is supported.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<S> {
        self.snapshot.subscribe()
    }

    /// Subscribe to all actions produced by effects
    ///
    /// Returns a receiver that gets a clone of every feedback action after
    /// its state change has committed. If the receiver lags it skips old
    /// actions and observes `RecvError::Lagged`.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Run the reducer for one action and start its effects
    async fn send_with_tracking(&self, action: A, tracking: &EffectTracking) {
        tracing::debug!("Processing action");

        let effects = {
            let mut state = self.state.write().await;
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            // Publish before releasing the lock so snapshot order always
            // matches commit order.
            let _ = self.snapshot.send_replace(state.clone());
            effects
        };

        tracing::trace!("Reducer returned {} effects", effects.len());
        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }
    }

    /// Execute one effect description
    ///
    /// `Future` effects run in a spawned task. The action a future resolves
    /// to is first fed back through the reducer and then broadcast to
    /// observers, so observers always see committed outcomes.
    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            }
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                tracking.increment();

                let store = self.clone();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking.clone());

                    if let Some(action) = fut.await {
                        tracing::trace!("Effect produced an action, feeding back");
                        store.send_with_tracking(action.clone(), &tracking).await;
                        let _ = store.action_broadcast.send(action);
                    } else {
                        tracing::trace!("Effect completed with no action");
                    }
                });
            }
        }
    }
}
