//! # Session Lists Core
//!
//! The two abstractions every other crate in the workspace is written against.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by one session (for the lists domain, a `ListStore`)
//! - **Action**: A command asking the state to change
//! - **Event**: A fact describing what a command did (or why it was rejected)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: A value describing what the shell should do next; never executed here
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//!
//! ## Example
//!
//! ```
//! use session_lists_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Default)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Event = u32;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Counter,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<u32>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 smallvec![Effect::Emit(state.count)]
//!             }
//!         }
//!     }
//! }
//!
//! let mut state = Counter::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(matches!(effects.as_slice(), [Effect::Emit(1)]));
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The commands this reducer processes
    /// - `Event`: The outcomes this reducer reports back through [`Effect::Emit`]
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The event type carried by emitted effects
        type Event;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place (or leaves it untouched on rejection)
        /// 3. Returns effect descriptions for the shell
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Event>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe what the runtime should do after a reduction.
/// They are values (not execution).
pub mod effect {
    /// Effect type - describes work for the shell
    ///
    /// # Type Parameters
    ///
    /// - `Event`: The outcome type a reducer can report
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Event> {
        /// Report an outcome to whoever dispatched the action
        Emit(Event),
    }

    impl<Event> Effect<Event> {
        /// Returns the carried event
        #[must_use]
        pub fn into_event(self) -> Event {
            match self {
                Self::Emit(event) => event,
            }
        }

        /// Borrows the carried event
        #[must_use]
        pub const fn event(&self) -> &Event {
            match self {
                Self::Emit(event) => event,
            }
        }
    }
}
