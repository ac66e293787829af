//! State - computation that threads a state value.
//!
//! A `State<S, T>` wraps a function `S -> StateResult<S, T>`. The result
//! always carries the state reached so far; its value is absent when the
//! computation went bottom. Bottom keeps the state at the point where the
//! computation stopped and skips every later step.
//!
//! # Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Put Get: `State::put(s).then(State::get())` yields `s`
//!
//! # Examples
//!
//! ```rust
//! use chronicle::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.eval(0), Some(3));
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use super::error::BottomError;
use super::instrument;
use super::status::Status;

const EFFECT_NAME: &str = "State";

/// The outcome of running a [`State`]: an optional value and the final state.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::StateResult;
///
/// let result = StateResult::new("done", 3);
/// assert_eq!(result.value(), Some(&"done"));
/// assert_eq!(result.state(), &3);
///
/// let stopped: StateResult<i32, &str> = StateResult::bottom(2);
/// assert!(stopped.is_bottom());
/// assert_eq!(stopped.state(), &2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateResult<S, T> {
    value: Option<T>,
    state: S,
}

impl<S, T> StateResult<S, T> {
    /// Creates an active result.
    pub const fn new(value: T, state: S) -> Self {
        Self {
            value: Some(value),
            state,
        }
    }

    /// Creates a bottom result that keeps `state`.
    pub const fn bottom(state: S) -> Self {
        Self { value: None, state }
    }

    /// Returns the value, or `None` when the result is bottom.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the final state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Returns `true` if the computation short-circuited.
    pub const fn is_bottom(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the [`Status`] of this result.
    pub const fn status(&self) -> Status {
        Status::of(&self.value)
    }

    /// Splits the result into its optional value and its final state.
    pub fn into_parts(self) -> (Option<T>, S) {
        (self.value, self.state)
    }

    /// Returns the value, or [`BottomError`] when the result is bottom.
    ///
    /// # Errors
    ///
    /// Returns [`BottomError`] if the computation short-circuited.
    pub fn into_value(self) -> Result<T, BottomError> {
        self.value.ok_or(BottomError::STATE)
    }

    /// Turns an active result bottom when `predicate` rejects its value.
    /// The state is kept either way.
    pub(crate) fn guard<P>(self, combinator: &'static str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: Status::guard_value(self.value, EFFECT_NAME, combinator, predicate),
            state: self.state,
        }
    }

    pub(crate) fn map_value<R, F>(self, combinator: &'static str, function: F) -> StateResult<S, R>
    where
        F: FnOnce(T) -> R,
    {
        if self.value.is_none() {
            instrument::skipped(EFFECT_NAME, combinator);
        }
        StateResult {
            value: self.value.map(function),
            state: self.state,
        }
    }
}

type StateFunction<S, T> = dyn Fn(S) -> StateResult<S, T> + Send + Sync;

/// A computation that reads and updates a state of type `S`.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::State;
///
/// let state: State<i32, i32> = State::new(|current: i32| (current * 2, current + 1));
/// let (value, final_state) = state.run(10).into_parts();
/// assert_eq!(value, Some(20));
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, T> {
    run_function: Arc<StateFunction<S, T>>,
}

static_assertions::assert_impl_all!(State<i32, String>: Send, Sync, Clone);

impl<S, T> State<S, T>
where
    S: 'static,
    T: Send + Sync + 'static,
{
    /// Creates a State from a transition function. It is never bottom.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (T, S) + Send + Sync + 'static,
    {
        Self::from_fn(move |state| {
            let (value, next_state) = function(state);
            StateResult::new(value, next_state)
        })
    }

    /// Creates a State from a function that may itself short-circuit.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(S) -> StateResult<S, T> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Runs the State with an initial state.
    pub fn run(&self, initial_state: S) -> StateResult<S, T> {
        (self.run_function)(initial_state)
    }

    /// Runs the State and returns only the value.
    pub fn eval(&self, initial_state: S) -> Option<T> {
        self.run(initial_state).value
    }

    /// Runs the State and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).state
    }

    /// Creates a State that returns `value` and leaves the state unchanged.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move |state| StateResult::new(value.clone(), state))
    }

    /// Creates a State that is always bottom and leaves the state unchanged.
    pub fn bottom() -> Self {
        Self::from_fn(StateResult::bottom)
    }

    /// Creates a State that projects a value out of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        Self::from_fn(move |state| StateResult::new(projection(&state), state))
    }

    /// Maps a function over the result of this State.
    pub fn fmap<R, F>(self, function: F) -> State<S, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let original_function = self.run_function;
        State::from_fn(move |state| (original_function)(state).map_value("fmap", &function))
    }

    /// Chains this State with a function that produces another State.
    ///
    /// The second step starts from the state the first one left. A bottom
    /// first step short-circuits without calling `function`.
    pub fn flat_map<R, F>(self, function: F) -> State<S, R>
    where
        F: Fn(T) -> State<S, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let original_function = self.run_function;
        State::from_fn(move |state| match (original_function)(state).into_parts() {
            (Some(value), next_state) => function(value).run(next_state),
            (None, stopped_state) => {
                instrument::skipped(EFFECT_NAME, "flat_map");
                StateResult::bottom(stopped_state)
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<R, F>(self, function: F) -> State<S, R>
    where
        F: Fn(T) -> State<S, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two States, keeping the second value.
    pub fn then<R>(self, next: State<S, R>) -> State<S, R>
    where
        R: Send + Sync + 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Turns the State bottom when `predicate` rejects the value.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Self::from_fn(move |state| (original_function)(state).guard("filter", &predicate))
    }

    /// Applies `folder` once to `seed` and the value.
    pub fn fold<V, F>(self, seed: V, folder: F) -> State<S, V>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, T) -> V + Send + Sync + 'static,
    {
        let original_function = self.run_function;
        State::from_fn(move |state| {
            (original_function)(state).map_value("fold", |value| folder(seed.clone(), value))
        })
    }
}

impl<S> State<S, S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates a State that returns the current state.
    pub fn get() -> Self {
        Self::from_fn(|state: S| StateResult::new(state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::from_fn(move |_| StateResult::new((), new_state.clone()))
    }

    /// Creates a State that transforms the current state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::from_fn(move |state| StateResult::new((), modifier(state)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, T> Clone for State<S, T> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<S, T> std::fmt::Display for State<S, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
