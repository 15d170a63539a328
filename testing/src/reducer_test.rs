//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use session_lists_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<Ev> = Box<dyn FnOnce(&[Effect<Ev>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use session_lists_testing::ReducerTest;
///
/// ReducerTest::new(ListsReducer::new())
///     .with_env(())
///     .given_state(ListStore::new())
///     .when_action(ListsCommand::CreateList { name: "Work".into() })
///     .then_state(|state| {
///         assert_eq!(state.len(), 1);
///     })
///     .then_effects(|effects| {
///         assert_eq!(effects.len(), 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    environment: Option<R::Environment>,
    initial_state: Option<R::State>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    effect_assertions: Vec<EffectAssertion<R::Event>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: R::Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<R::Event>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        let effects = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use session_lists_core::effect::Effect;
    use std::fmt::Debug;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if any effect is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<Ev: Debug>(effects: &[Effect<Ev>]) {
        assert!(
            effects.is_empty(),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<Ev>(effects: &[Effect<Ev>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that the emitted events are exactly `expected`, in order
    ///
    /// # Panics
    ///
    /// Panics if the emitted events differ from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_emitted<Ev: Debug + PartialEq>(effects: &[Effect<Ev>], expected: &[Ev]) {
        let emitted: Vec<&Ev> = effects.iter().map(Effect::event).collect();
        let expected: Vec<&Ev> = expected.iter().collect();
        assert_eq!(emitted, expected, "Emitted events differ");
    }

    /// Assert that exactly one event was emitted and that it satisfies `predicate`
    ///
    /// # Panics
    ///
    /// Panics if zero or several events were emitted, or the predicate fails.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_single_event<Ev, F>(effects: &[Effect<Ev>], predicate: F)
    where
        Ev: Debug,
        F: FnOnce(&Ev) -> bool,
    {
        let emitted: Vec<&Ev> = effects.iter().map(Effect::event).collect();
        match emitted.as_slice() {
            [event] => assert!(predicate(event), "Event did not match: {event:?}"),
            other => panic!("Expected exactly one event, but found {}: {other:?}", other.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_lists_core::effect::Effect;
    use session_lists_core::reducer::Reducer;
    use session_lists_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Reset,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Event = i32;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Event>; 4]> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::Emit(state.count)]
                }
                TestAction::Reset => {
                    state.count = 0;
                    SmallVec::new()
                }
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(())
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_emitted(effects, &[1]);
                assertions::assert_single_event(effects, |event| *event == 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_reset() {
        ReducerTest::new(TestReducer)
            .with_env(())
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Reset)
            .then_state(|state| {
                assert_eq!(state.count, 0);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::Emit(3)], 1);
        assertions::assert_effects_count::<i32>(&[], 0);
    }

    #[test]
    #[should_panic(expected = "Expected exactly one event")]
    fn test_single_event_rejects_empty() {
        assertions::assert_single_event::<i32, _>(&[], |_| true);
    }
}
