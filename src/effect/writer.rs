//! Writer - deferred computation with an accumulated log.
//!
//! A `Writer<O, T>` is a zero-argument computation that, when evaluated,
//! yields a [`WriterResult`]: an optional value of type `T` and an ordered
//! log of entries of type `O`. A result without a value is *bottom*: the
//! computation short-circuited, typically because a [`filter`](Writer::filter)
//! predicate rejected the value.
//!
//! # Overview
//!
//! The computation is stored behind an `Arc<dyn Fn>` so a Writer can be
//! cloned cheaply, evaluated any number of times, and shared between
//! threads. Evaluation never mutates the Writer itself.
//!
//! Logs are concatenated in evaluation order with the
//! [`Semigroup`] instance of `Vec`: the entries of an upstream step always
//! precede the entries of the steps bound after it.
//!
//! # Bottom
//!
//! Bottom is absorbing. Once a step is bottom, every later combinator
//! returns bottom, keeps the log gathered so far, and never invokes its
//! closure. The only exceptions are [`for_each`](Writer::for_each), which
//! always yields an active unit computation with an empty log, and
//! [`censor`](Writer::censor), which rewrites the log whatever the status.
//!
//! # Laws
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Equality here is equality of the evaluated [`WriterResult`]s, bottom
//! included.
//!
//! # Examples
//!
//! ```rust
//! use chronicle::effect::Writer;
//!
//! fn log(message: &str) -> Writer<String, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .then(log("step 2"))
//!     .then(Writer::pure(42));
//!
//! let (result, logs) = computation.run();
//! assert_eq!(result, Some(42));
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```
//!
//! Short-circuiting:
//!
//! ```rust
//! use chronicle::effect::Writer;
//!
//! let rejected: Writer<String, i32> = Writer::pure(7)
//!     .filter(|value| *value > 10)
//!     .fmap(|value| value + 1);
//!
//! assert!(rejected.evaluate().is_bottom());
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use super::error::BottomError;
use super::instrument;
use super::nested::Nested;
use super::status::Status;
use crate::typeclass::Semigroup;

const EFFECT_NAME: &str = "Writer";

// =============================================================================
// WriterResult
// =============================================================================

/// The outcome of evaluating a [`Writer`]: an optional value and an ordered log.
///
/// A result is bottom exactly when it carries no value, so a bottom result
/// can never hand out an unspecified value. Reading the value is always
/// explicit: [`value`](Self::value), [`unwrap_or`](Self::unwrap_or),
/// [`into_value`](Self::into_value) and friends.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::{Status, WriterResult};
///
/// let result: WriterResult<&str, i32> = WriterResult::new(4, vec!["logged-3"]);
/// assert_eq!(result.value(), Some(&4));
/// assert_eq!(result.log(), &["logged-3"]);
/// assert_eq!(result.status(), Status::Active);
///
/// let bottom: WriterResult<&str, i32> = WriterResult::bottom(vec!["kept"]);
/// assert!(bottom.is_bottom());
/// assert_eq!(bottom.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterResult<O, T> {
    value: Option<T>,
    log: Vec<O>,
}

impl<O, T> WriterResult<O, T> {
    /// Creates an active result with the given value and log.
    pub const fn new(value: T, log: Vec<O>) -> Self {
        Self {
            value: Some(value),
            log,
        }
    }

    /// Creates an active result with an empty log.
    pub const fn pure(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Creates a bottom result that keeps the log gathered so far.
    pub const fn bottom(log: Vec<O>) -> Self {
        Self { value: None, log }
    }

    /// Returns the value, or `None` when the result is bottom.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the log entries in the order they were written.
    pub fn log(&self) -> &[O] {
        &self.log
    }

    /// Returns `true` if the computation short-circuited.
    pub const fn is_bottom(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the [`Status`] of this result.
    pub const fn status(&self) -> Status {
        Status::of(&self.value)
    }

    /// Splits the result into its optional value and its log.
    pub fn into_parts(self) -> (Option<T>, Vec<O>) {
        (self.value, self.log)
    }

    /// Discards the value and returns the log.
    pub fn into_log(self) -> Vec<O> {
        self.log
    }

    /// Returns the value, or [`BottomError`] when the result is bottom.
    ///
    /// # Errors
    ///
    /// Returns [`BottomError`] if the computation short-circuited.
    pub fn into_value(self) -> Result<T, BottomError> {
        self.value.ok_or(BottomError::WRITER)
    }

    /// Returns the value, or `default` when the result is bottom.
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value, or computes one when the result is bottom.
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(function)
    }

    /// Returns the value, or `T::default()` when the result is bottom.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Iterates over the value: no element when bottom, exactly one otherwise.
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }

    /// Transforms the value, leaving the log and a bottom status untouched.
    pub(crate) fn map_value<R, F>(self, combinator: &'static str, function: F) -> WriterResult<O, R>
    where
        F: FnOnce(T) -> R,
    {
        if self.value.is_none() {
            instrument::skipped(EFFECT_NAME, combinator);
        }
        WriterResult {
            value: self.value.map(function),
            log: self.log,
        }
    }

    /// Turns an active result bottom when `predicate` rejects its value.
    pub(crate) fn guard<P>(self, combinator: &'static str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: Status::guard_value(self.value, EFFECT_NAME, combinator, predicate),
            log: self.log,
        }
    }

    /// Puts `earlier` in front of this result's log.
    pub(crate) fn prepend_log(self, earlier: Vec<O>) -> Self {
        Self {
            value: self.value,
            log: earlier.combine(self.log),
        }
    }

    fn map_log<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<O>) -> Vec<O>,
    {
        Self {
            value: self.value,
            log: function(self.log),
        }
    }
}

impl<O, T> IntoIterator for WriterResult<O, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, O, T> IntoIterator for &'a WriterResult<O, T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

// =============================================================================
// Writer
// =============================================================================

type Computation<O, T> = dyn Fn() -> WriterResult<O, T> + Send + Sync;

/// A deferred computation producing a value together with an ordered log.
///
/// # Type Parameters
///
/// - `O`: The log entry type
/// - `T`: The value type
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::Writer;
///
/// let computation: Writer<String, i32> = Writer::pure(3)
///     .flat_map(|value| Writer::new(value + 1, vec![format!("logged-{value}")]));
///
/// let result = computation.evaluate();
/// assert_eq!(result.value(), Some(&4));
/// assert_eq!(result.log(), &["logged-3".to_string()]);
/// ```
pub struct Writer<O, T> {
    computation: Arc<Computation<O, T>>,
}

static_assertions::assert_impl_all!(Writer<String, i32>: Send, Sync, Clone);

impl<O, T> Writer<O, T>
where
    O: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Wraps a deferred computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::{Writer, WriterResult};
    ///
    /// let writer: Writer<&str, i32> =
    ///     Writer::from_fn(|| WriterResult::new(42, vec!["computed"]));
    /// assert_eq!(writer.eval(), Some(42));
    /// ```
    pub fn from_fn<F>(computation: F) -> Self
    where
        F: Fn() -> WriterResult<O, T> + Send + Sync + 'static,
    {
        Self {
            computation: Arc::new(computation),
        }
    }

    /// Runs the computation.
    ///
    /// Closures supplied to the combinators run here. A panic inside one of
    /// them propagates to the caller unchanged.
    pub fn evaluate(&self) -> WriterResult<O, T> {
        (self.computation)()
    }

    /// Runs the computation, returning the optional value and the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<&str, i32> = Writer::new(42, vec!["log"]);
    /// assert_eq!(writer.run(), (Some(42), vec!["log"]));
    /// ```
    pub fn run(&self) -> (Option<T>, Vec<O>) {
        self.evaluate().into_parts()
    }

    /// Runs the computation and returns only the value.
    pub fn eval(&self) -> Option<T> {
        self.evaluate().value
    }

    /// Runs the computation and returns only the log.
    pub fn exec(&self) -> Vec<O> {
        self.evaluate().log
    }

    /// Runs the computation and iterates over its value: no element when
    /// bottom, exactly one otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let kept: Writer<(), i32> = Writer::pure(5);
    /// assert_eq!(kept.values().collect::<Vec<_>>(), vec![5]);
    ///
    /// let dropped = kept.filter(|value| *value > 5);
    /// assert_eq!(dropped.values().count(), 0);
    /// ```
    pub fn values(&self) -> std::option::IntoIter<T> {
        self.evaluate().into_iter()
    }

    /// Creates an active computation with an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::pure(5);
    /// let (value, log) = writer.run();
    /// assert_eq!(value, Some(5));
    /// assert!(log.is_empty());
    /// ```
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move || WriterResult::pure(value.clone()))
    }

    /// Alias for [`pure`](Self::pure).
    pub fn lift(value: T) -> Self
    where
        T: Clone,
    {
        Self::pure(value)
    }

    /// Creates an active computation with an initial log.
    pub fn new(value: T, log: Vec<O>) -> Self
    where
        T: Clone,
        O: Clone,
    {
        Self::from_fn(move || WriterResult::new(value.clone(), log.clone()))
    }

    /// Creates a computation that is already bottom, with an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::bottom();
    /// assert!(writer.evaluate().is_bottom());
    /// ```
    pub fn bottom() -> Self {
        Self::from_fn(|| WriterResult::bottom(Vec::new()))
    }

    pub(crate) fn map_result<R, F>(self, combinator: &'static str, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let source = self.computation;
        Writer::from_fn(move || source().map_value(combinator, &function))
    }

    /// Transforms the produced value. The log is unchanged and a bottom
    /// source stays bottom without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::pure(5).fmap(|value| value * 2);
    /// assert_eq!(writer.eval(), Some(10));
    /// ```
    pub fn fmap<R, F>(self, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.map_result("fmap", function)
    }

    /// Alias for [`fmap`](Self::fmap).
    pub fn map<R, F>(self, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.fmap(function)
    }

    /// Chains this computation with one produced from its value.
    ///
    /// A bottom source short-circuits: `function` is not called and the
    /// source's log is kept. Otherwise the result carries the second step's
    /// value and status, and the source's log followed by the second log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<&str, i32> = Writer::new(10, vec!["first"]);
    /// let chained = writer.flat_map(|value| Writer::new(value * 2, vec!["second"]));
    /// assert_eq!(chained.run(), (Some(20), vec!["first", "second"]));
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> Writer<O, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        let source = self.computation;
        Writer::from_fn(move || {
            let (value, log) = source().into_parts();
            match value {
                Some(value) => function(value).evaluate().prepend_log(log),
                None => {
                    instrument::skipped(EFFECT_NAME, "flat_map");
                    WriterResult::bottom(log)
                }
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn bind<R, F>(self, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> Writer<O, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.flat_map(function)
    }

    /// Alias for [`flat_map`](Self::flat_map) matching Rust's naming conventions.
    pub fn and_then<R, F>(self, function: F) -> Writer<O, R>
    where
        F: Fn(T) -> Writer<O, R> + Send + Sync + 'static,
        R: Send + Sync + 'static,
    {
        self.flat_map(function)
    }

    /// Turns the computation bottom when `predicate` rejects the value.
    ///
    /// The log is kept either way. A source that is already bottom is not
    /// tested again.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = self.computation;
        Self::from_fn(move || source().guard("filter", &predicate))
    }

    /// Calls `action` once with the value when the source is active.
    ///
    /// The returned computation is always active, yields `()`, and has an
    /// empty log: the source's log is dropped, so route through other
    /// combinators when the log matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    ///
    /// let seen = Arc::new(AtomicI32::new(0));
    /// let recorder = Arc::clone(&seen);
    /// let writer: Writer<&str, i32> = Writer::new(7, vec!["dropped"]);
    ///
    /// let result = writer
    ///     .for_each(move |value| recorder.store(value, Ordering::SeqCst))
    ///     .evaluate();
    ///
    /// assert_eq!(seen.load(Ordering::SeqCst), 7);
    /// assert!(result.log().is_empty());
    /// ```
    pub fn for_each<F>(self, action: F) -> Writer<O, ()>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let source = self.computation;
        Writer::from_fn(move || {
            match source().value {
                Some(value) => action(value),
                None => instrument::skipped(EFFECT_NAME, "for_each"),
            }
            WriterResult::pure(())
        })
    }

    /// Applies `folder` once to `seed` and the value, keeping the log.
    pub fn fold<S, F>(self, seed: S, folder: F) -> Writer<O, S>
    where
        S: Clone + Send + Sync + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        self.map_result("fold", move |value| folder(seed.clone(), value))
    }

    /// Counts the produced values: `1` when active.
    pub fn count(self) -> Writer<O, usize> {
        self.map_result("count", |_| 1)
    }

    /// Sums the produced values. A Writer yields at most one value, so an
    /// active sum equals that value.
    pub fn sum(self) -> Writer<O, T>
    where
        T: std::iter::Sum<T>,
    {
        self.map_result("sum", |value| std::iter::once(value).sum())
    }

    /// Tests whether every produced value satisfies `predicate`.
    pub fn for_all<P>(self, predicate: P) -> Writer<O, bool>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.map_result("for_all", move |value| predicate(&value))
    }

    /// Tests whether any produced value satisfies `predicate`.
    pub fn exists<P>(self, predicate: P) -> Writer<O, bool>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.map_result("exists", move |value| predicate(&value))
    }

    /// Sequences two computations, keeping the second value.
    pub fn then<R>(self, next: Writer<O, R>) -> Writer<O, R>
    where
        R: Send + Sync + 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines the values of two computations with `function`.
    ///
    /// Both logs are kept in order. If either side is bottom the result is
    /// bottom; when `self` is bottom, `other` is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let first: Writer<&str, i32> = Writer::new(10, vec!["first"]);
    /// let second: Writer<&str, i32> = Writer::new(20, vec!["second"]);
    /// let combined = first.map2(second, |a, b| a + b);
    /// assert_eq!(combined.run(), (Some(30), vec!["first", "second"]));
    /// ```
    pub fn map2<B, C, F>(self, other: Writer<O, B>, function: F) -> Writer<O, C>
    where
        B: Send + Sync + 'static,
        C: Send + Sync + 'static,
        F: Fn(T, B) -> C + Send + Sync + 'static,
    {
        let source = self.computation;
        Writer::from_fn(move || {
            let (first, log) = source().into_parts();
            let Some(first) = first else {
                instrument::skipped(EFFECT_NAME, "map2");
                return WriterResult::bottom(log);
            };
            other
                .evaluate()
                .prepend_log(log)
                .map_value("map2", |second| function(first, second))
        })
    }

    /// Pairs the values of two computations.
    pub fn product<B>(self, other: Writer<O, B>) -> Writer<O, (T, B)>
    where
        B: Send + Sync + 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Pairs the value with the log written while producing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<&str, i32> = Writer::new(42, vec!["log"]);
    /// let (listened, log) = writer.listen().run();
    /// assert_eq!(listened, Some((42, vec!["log"])));
    /// assert_eq!(log, vec!["log"]);
    /// ```
    pub fn listen(self) -> Writer<O, (T, Vec<O>)>
    where
        O: Clone,
    {
        let source = self.computation;
        Writer::from_fn(move || {
            let (value, log) = source().into_parts();
            match value {
                Some(value) => WriterResult::new((value, log.clone()), log),
                None => {
                    instrument::skipped(EFFECT_NAME, "listen");
                    WriterResult::bottom(log)
                }
            }
        })
    }

    /// Rewrites the log, whether or not the computation is bottom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(42, vec!["hello".to_string()]);
    /// let censored = writer.censor(|log| log.into_iter().map(|entry| entry.to_uppercase()).collect());
    /// assert_eq!(censored.exec(), vec!["HELLO"]);
    /// ```
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: Fn(Vec<O>) -> Vec<O> + Send + Sync + 'static,
    {
        let source = self.computation;
        Self::from_fn(move || source().map_log(&modifier))
    }

    /// Combines this computation with a Writer, Reader or State produced
    /// from its value, then projects both values into one.
    ///
    /// - With a `Writer<O, U>` the result is a flat `Writer<O, V>` whose log
    ///   is this log followed by the inner one.
    /// - With a `Reader<E, U>` or `State<S, U>` the result is a
    ///   `Writer<O, Reader<E, V>>` / `Writer<O, State<S, V>>`. The inner
    ///   effect runs `bind` when it is run, and stays bottom if the inner
    ///   step is bottom.
    ///
    /// When this computation is bottom, `bind` and `project` are never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::{Reader, Writer};
    ///
    /// let writer: Writer<&str, i32> = Writer::new(2, vec!["outer"]);
    /// let composed = writer.select_many(
    ///     |factor| Reader::asks(move |environment: i32| environment * factor),
    ///     |factor, scaled| format!("{factor} -> {scaled}"),
    /// );
    ///
    /// let (reader, log) = composed.run();
    /// assert_eq!(log, vec!["outer"]);
    /// assert_eq!(reader.unwrap().run(21).into_value().unwrap(), "2 -> 42");
    /// ```
    pub fn select_many<M, V, B, P>(self, bind: B, project: P) -> Writer<O, M::Lifted<V>>
    where
        T: Clone,
        M: Nested<O>,
        V: Send + Sync + 'static,
        B: Fn(T) -> M + Send + Sync + 'static,
        P: Fn(T, M::Item) -> V + Send + Sync + 'static,
    {
        M::select_nested(self, bind, project)
    }

    /// Evaluates the computation inside `span`.
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Self {
        let source = self.computation;
        Self::from_fn(move || span.in_scope(|| source()))
    }
}

impl<O> Writer<O, ()>
where
    O: Clone + Send + Sync + 'static,
{
    /// Creates a computation that only writes `log`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let writer: Writer<&str, ()> = Writer::tell(vec!["message"]);
    /// assert_eq!(writer.run(), (Some(()), vec!["message"]));
    /// ```
    pub fn tell(log: Vec<O>) -> Self {
        Self::new((), log)
    }
}

impl<O, M> Writer<O, M>
where
    O: Send + Sync + 'static,
    M: Nested<O>,
{
    /// Folds inside the nested effect without collapsing the outer log.
    ///
    /// A bottom outer computation stays bottom. Otherwise the fold happens
    /// inside the inner effect: a nested Reader or State is re-wrapped, and a
    /// nested Writer is flattened with its log appended to the outer one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::effect::Writer;
    ///
    /// let nested: Writer<&str, Writer<&str, i32>> =
    ///     Writer::new(Writer::new(5, vec!["inner"]), vec!["outer"]);
    /// let folded = nested.fold_t(10, |seed, value| seed + value);
    /// assert_eq!(folded.run(), (Some(15), vec!["outer", "inner"]));
    /// ```
    pub fn fold_t<V, F>(self, seed: V, folder: F) -> Writer<O, M::Lifted<V>>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, M::Item) -> V + Send + Sync + 'static,
    {
        M::fold_nested(self, seed, folder)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<O, T> Clone for Writer<O, T> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<O, T> std::fmt::Display for Writer<O, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Writer>")
    }
}

impl<O, T> std::fmt::Debug for Writer<O, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Writer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn logged(message: &'static str, value: i32) -> Writer<&'static str, i32> {
        Writer::new(value, vec![message])
    }

    #[rstest]
    fn test_display_writer() {
        let writer: Writer<String, i32> = Writer::pure(1);
        assert_eq!(format!("{writer}"), "<Writer>");
        assert_eq!(format!("{writer:?}"), "Writer { .. }");
    }

    #[rstest]
    fn writer_result_accessors() {
        let result: WriterResult<&str, i32> = WriterResult::new(3, vec!["a"]);
        assert_eq!(result.value(), Some(&3));
        assert_eq!(result.log(), &["a"]);
        assert!(!result.is_bottom());
        assert_eq!(result.iter().count(), 1);
        assert_eq!(result.clone().into_value(), Ok(3));
        assert_eq!(result.into_log(), vec!["a"]);
    }

    #[rstest]
    fn writer_result_bottom_has_no_value() {
        let result: WriterResult<&str, i32> = WriterResult::bottom(vec!["kept"]);
        assert_eq!(result.value(), None);
        assert_eq!(result.status(), Status::Bottom);
        assert_eq!((&result).into_iter().count(), 0);
        assert_eq!(result.clone().unwrap_or_else(|| -1), -1);
        assert_eq!(result.clone().unwrap_or_default(), 0);
        assert_eq!(result.into_value(), Err(BottomError::WRITER));
    }

    #[rstest]
    fn guard_keeps_log_on_rejection() {
        let result: WriterResult<&str, i32> = WriterResult::new(1, vec!["a"]);
        let guarded = result.guard("filter", |value| *value > 1);
        assert_eq!(guarded, WriterResult::bottom(vec!["a"]));
    }

    #[rstest]
    fn prepend_log_keeps_order() {
        let result: WriterResult<&str, i32> = WriterResult::new(1, vec!["c", "d"]);
        assert_eq!(result.prepend_log(vec!["a", "b"]).log(), &["a", "b", "c", "d"]);
    }

    #[rstest]
    fn writer_can_be_evaluated_repeatedly() {
        let writer = logged("once", 1).fmap(|value| value + 1);
        assert_eq!(writer.evaluate(), writer.evaluate());
    }

    #[rstest]
    fn writer_clone_shares_computation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let writer: Writer<&str, i32> = Writer::from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            WriterResult::pure(1)
        });
        let cloned = writer.clone();
        let _ = writer.evaluate();
        let _ = cloned.evaluate();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn flat_map_propagates_second_step_bottom() {
        let writer = logged("first", 1).flat_map(|_| logged("second", 2).filter(|_| false));
        assert_eq!(writer.evaluate(), WriterResult::bottom(vec!["first", "second"]));
    }

    #[rstest]
    fn map2_skips_other_when_bottom() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let other: Writer<&str, i32> = Writer::from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            WriterResult::pure(1)
        });
        let source: Writer<&str, i32> = Writer::bottom();
        let combined = source.map2(other, |a, b| a + b);
        assert!(combined.evaluate().is_bottom());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn listen_captures_log() {
        let (listened, log) = logged("log", 42).listen().run();
        assert_eq!(listened, Some((42, vec!["log"])));
        assert_eq!(log, vec!["log"]);
    }

    #[rstest]
    fn censor_applies_to_bottom() {
        let writer = logged("secret", 1)
            .filter(|_| false)
            .censor(|log| log.into_iter().map(|_| "redacted").collect());
        assert_eq!(writer.evaluate(), WriterResult::bottom(vec!["redacted"]));
    }
}
