//! # Session Lists Testing
//!
//! Testing utilities for reducers built on `session-lists-core`.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given/When/Then harness for a single reduction
//! - [`assertions`]: checks over the effects a reducer returned
//! - [`properties`]: proptest strategies for names and completion flags
//!
//! ## Example
//!
//! ```ignore
//! use session_lists_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(ListsReducer::new())
//!     .with_env(())
//!     .given_state(ListStore::new())
//!     .when_action(ListsCommand::CreateList { name: "Work".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(|effects| assertions::assert_effects_count(effects, 1))
//!     .run();
//! ```

pub mod reducer_test;

/// Property-based testing utilities using proptest.
///
/// Lengths are counted in Unicode scalar values, matching how names are
/// validated.
pub mod properties {
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Any string whose scalar count lies in `min..=max`.
    pub fn name_with_len(min: usize, max: usize) -> impl Strategy<Value = String> {
        vec(any::<char>(), min..=max).prop_map(|chars| chars.into_iter().collect())
    }

    /// Names accepted by the 1..=100 length rule.
    pub fn valid_name() -> impl Strategy<Value = String> {
        name_with_len(1, 100)
    }

    /// Names longer than 100 scalars.
    pub fn overlong_name() -> impl Strategy<Value = String> {
        name_with_len(101, 300)
    }

    /// Completion flags for a collection of up to `max_len` entities.
    pub fn completion_flags(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
        vec(any::<bool>(), 0..=max_len)
    }
}

// Re-export commonly used items
pub use reducer_test::{assertions, ReducerTest};
