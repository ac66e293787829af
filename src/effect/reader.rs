//! Reader - computation over a read-only environment.
//!
//! A `Reader<E, T>` wraps a function `E -> ReaderResult<T>`. Like
//! [`Writer`](super::Writer) it can short-circuit: a [`ReaderResult`]
//! without a value is bottom, and bottom propagates through every
//! combinator without invoking its closure.
//!
//! # Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use chronicle::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let address: Reader<Config, String> = Reader::asks(|config: Config| config.host)
//!     .flat_map(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config).into_value().unwrap(), "localhost:8080");
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use super::error::BottomError;
use super::instrument;
use super::status::Status;

const EFFECT_NAME: &str = "Reader";

/// The outcome of running a [`Reader`]: a value, or bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderResult<T> {
    value: Option<T>,
}

impl<T> ReaderResult<T> {
    /// Creates an active result.
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a bottom result.
    pub const fn bottom() -> Self {
        Self { value: None }
    }

    /// Returns the value, or `None` when the result is bottom.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns `true` if the computation short-circuited.
    pub const fn is_bottom(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the [`Status`] of this result.
    pub const fn status(&self) -> Status {
        Status::of(&self.value)
    }

    /// Converts the result into an `Option`.
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Returns the value, or [`BottomError`] when the result is bottom.
    ///
    /// # Errors
    ///
    /// Returns [`BottomError`] if the computation short-circuited.
    pub fn into_value(self) -> Result<T, BottomError> {
        self.value.ok_or(BottomError::READER)
    }

    /// Returns the value, or `default` when the result is bottom.
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub(crate) fn map_value<R, F>(self, combinator: &'static str, function: F) -> ReaderResult<R>
    where
        F: FnOnce(T) -> R,
    {
        if self.value.is_none() {
            instrument::skipped(EFFECT_NAME, combinator);
        }
        ReaderResult {
            value: self.value.map(function),
        }
    }

    /// Turns an active result bottom when `predicate` rejects its value.
    pub(crate) fn guard<P>(self, combinator: &'static str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: Status::guard_value(self.value, EFFECT_NAME, combinator, predicate),
        }
    }
}

type ReaderFunction<E, T> = dyn Fn(E) -> ReaderResult<T> + Send + Sync;

/// A computation that reads from an environment of type `E`.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|environment| Reader::pure(environment * 2));
///
/// assert_eq!(computation.run(21).into_value(), Ok(42));
/// ```
pub struct Reader<E, T> {
    run_function: Arc<ReaderFunction<E, T>>,
}

static_assertions::assert_impl_all!(Reader<String, i32>: Send, Sync, Clone);

impl<E, T> Reader<E, T>
where
    E: 'static,
    T: Send + Sync + 'static,
{
    /// Creates a Reader from a plain function. It is never bottom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21).into_value(), Ok(42));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        Self::from_fn(move |environment| ReaderResult::new(function(environment)))
    }

    /// Creates a Reader from a function that may itself short-circuit.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(E) -> ReaderResult<T> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Runs the Reader with the given environment.
    pub fn run(&self, environment: E) -> ReaderResult<T> {
        (self.run_function)(environment)
    }

    /// Creates a Reader that ignores the environment and returns `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move |_| ReaderResult::new(value.clone()))
    }

    /// Creates a Reader that is always bottom.
    pub fn bottom() -> Self {
        Self::from_fn(|_| ReaderResult::bottom())
    }

    /// Creates a Reader that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        Self::new(projection)
    }

    /// Maps a function over the result of this Reader.
    pub fn fmap<R, F>(self, function: F) -> Reader<E, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Reader::from_fn(move |environment| {
            (original_function)(environment).map_value("fmap", &function)
        })
    }

    /// Chains this Reader with a function that produces another Reader.
    ///
    /// Both steps see the same environment. A bottom first step
    /// short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let chained = reader.flat_map(|value| Reader::new(move |environment| value + environment));
    /// assert_eq!(chained.run(10).into_value(), Ok(20));
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Reader<E, R>
    where
        E: Clone,
        F: Fn(T) -> Reader<E, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Reader::from_fn(move |environment: E| {
            match (original_function)(environment.clone()).into_option() {
                Some(value) => function(value).run(environment),
                None => {
                    instrument::skipped(EFFECT_NAME, "flat_map");
                    ReaderResult::bottom()
                }
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<R, F>(self, function: F) -> Reader<E, R>
    where
        E: Clone,
        F: Fn(T) -> Reader<E, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.flat_map(function)
    }

    /// Turns the Reader bottom when `predicate` rejects the value.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Self::from_fn(move |environment| {
            (original_function)(environment).guard("filter", &predicate)
        })
    }

    /// Applies `folder` once to `seed` and the value.
    pub fn fold<V, F>(self, seed: V, folder: F) -> Reader<E, V>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, T) -> V + Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Reader::from_fn(move |environment| {
            (original_function)(environment).map_value("fold", |value| folder(seed.clone(), value))
        })
    }

    /// Runs this Reader with an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.local(|environment| environment * 2).run(21).into_value(), Ok(42));
    /// ```
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(E) -> E + Send + Sync + 'static,
    {
        let original_function = self.run_function;
        Self::from_fn(move |environment| (original_function)(modifier(environment)))
    }
}

impl<E> Reader<E, E>
where
    E: Send + Sync + 'static,
{
    /// Creates a Reader that returns the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<E, T> Clone for Reader<E, T> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E, T> std::fmt::Display for Reader<E, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
