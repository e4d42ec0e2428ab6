//! # Taskstore Core
//!
//! Core traits and types for the taskstore architecture.
//!
//! This crate provides the fundamental abstractions for building reactive
//! state stores using the Reducer pattern: a store holds the authoritative
//! state for a feature, mutations arrive as actions, and a pure reducer
//! turns each action into the next state plus a set of effect descriptions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskstore_core::{effect::Effects, reducer::Reducer};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Effects<CounterAction> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 Effects::new()
//!             }
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effects;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoListState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoListState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> Effects<TodoAction> {
    ///         // Business logic here
    ///         Effects::new()
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Effects<Self::Action>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are returned from reducers.
pub mod effect {
    use futures::future::BoxFuture;
    use smallvec::SmallVec;
    use std::future::Future;

    /// The effect collection returned by a reducer.
    ///
    /// Most actions produce zero or one effect, so the inline capacity keeps
    /// the common case off the heap.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer by the runtime.
        Future(BoxFuture<'static, Option<Action>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Box an async computation into a `Future` effect
        ///
        /// # Example
        ///
        /// ```ignore
        /// Effect::future(async move {
        ///     let response = client.login(request).await;
        ///     Some(AuthAction::LoginCompleted { response })
        /// })
        /// ```
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. Production implementations live here;
/// deterministic test doubles live in `taskstore-testing`.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use taskstore_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(clock.now() >= now);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - abstracts entity id generation for testability
    ///
    /// Every call returns an id that is unique for the lifetime of the
    /// generator, even under rapid successive calls.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next unique id
        fn next_id(&self) -> i64;
    }

    /// Production id generator: an atomic counter seeded from wall-clock
    /// milliseconds
    ///
    /// Ids remain ordered like time-based ids across process restarts, while
    /// staying unique within a process no matter how quickly they are drawn.
    #[derive(Debug)]
    pub struct MonotonicIdGenerator {
        next: AtomicI64,
    }

    impl MonotonicIdGenerator {
        /// Create a generator seeded from the current wall-clock milliseconds
        #[must_use]
        pub fn new() -> Self {
            Self::starting_at(Utc::now().timestamp_millis())
        }

        /// Create a generator that hands out ids starting at `first`
        #[must_use]
        pub const fn starting_at(first: i64) -> Self {
            Self {
                next: AtomicI64::new(first),
            }
        }
    }

    impl Default for MonotonicIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for MonotonicIdGenerator {
        fn next_id(&self) -> i64 {
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, IdGenerator, MonotonicIdGenerator, SystemClock};

    #[test]
    fn monotonic_ids_are_unique_and_increasing() {
        let ids = MonotonicIdGenerator::starting_at(100);
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_eq!(a, 100);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1);
    }

    #[test]
    fn effect_debug_formatting() {
        let none: Effect<()> = Effect::None;
        assert_eq!(format!("{none:?}"), "Effect::None");

        let fut: Effect<()> = Effect::future(async { None });
        assert_eq!(format!("{fut:?}"), "Effect::Future(<future>)");
    }
}
