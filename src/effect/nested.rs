//! Composition of a Writer with a nested Writer, Reader or State.
//!
//! [`Writer::fold_t`] and [`Writer::select_many`] dispatch on the kind of
//! inner effect through the [`Nested`] trait:
//!
//! | inner         | `Lifted<V>`    | outer log                       |
//! |---------------|----------------|---------------------------------|
//! | `Writer<O, U>`| `V`            | outer entries, then inner ones  |
//! | `Reader<E, U>`| `Reader<E, V>` | outer entries only              |
//! | `State<S, U>` | `State<S, V>`  | outer entries only              |
//!
//! A nested Writer is flattened into the outer one. A nested Reader or State
//! is re-wrapped, so its bottom status surfaces only when it is run.

use std::sync::Arc;

use super::reader::{Reader, ReaderResult};
use super::state::{State, StateResult};
use super::writer::Writer;

/// An effect that can sit inside a `Writer<O, _>`.
pub trait Nested<O>: Sized + Send + Sync + 'static {
    /// The value the inner effect produces.
    type Item;

    /// What a `V` computed inside this effect looks like from the outer Writer.
    type Lifted<V>: Send + Sync + 'static
    where
        V: Send + Sync + 'static;

    /// Folds the inner value with `seed`, keeping the inner effect's shape.
    fn fold_nested<V, F>(outer: Writer<O, Self>, seed: V, folder: F) -> Writer<O, Self::Lifted<V>>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, Self::Item) -> V + Send + Sync + 'static;

    /// Binds the outer value into this effect and projects both values.
    fn select_nested<T, V, B, P>(
        outer: Writer<O, T>,
        bind: B,
        project: P,
    ) -> Writer<O, Self::Lifted<V>>
    where
        T: Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
        B: Fn(T) -> Self + Send + Sync + 'static,
        P: Fn(T, Self::Item) -> V + Send + Sync + 'static;
}

impl<O, U> Nested<O> for Writer<O, U>
where
    O: Send + Sync + 'static,
    U: Send + Sync + 'static,
{
    type Item = U;
    type Lifted<V>
        = V
    where
        V: Send + Sync + 'static;

    fn fold_nested<V, F>(outer: Writer<O, Self>, seed: V, folder: F) -> Writer<O, V>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, U) -> V + Send + Sync + 'static,
    {
        let folder = Arc::new(folder);
        outer.flat_map(move |inner| {
            let folder = Arc::clone(&folder);
            inner.fold(seed.clone(), move |accumulator, value| folder(accumulator, value))
        })
    }

    fn select_nested<T, V, B, P>(outer: Writer<O, T>, bind: B, project: P) -> Writer<O, V>
    where
        T: Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
        B: Fn(T) -> Self + Send + Sync + 'static,
        P: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let project = Arc::new(project);
        outer.flat_map(move |value: T| {
            let project = Arc::clone(&project);
            bind(value.clone()).map_result("select_many", move |inner| project(value.clone(), inner))
        })
    }
}

impl<O, E, U> Nested<O> for Reader<E, U>
where
    O: Send + Sync + 'static,
    E: 'static,
    U: Send + Sync + 'static,
{
    type Item = U;
    type Lifted<V>
        = Reader<E, V>
    where
        V: Send + Sync + 'static;

    fn fold_nested<V, F>(outer: Writer<O, Self>, seed: V, folder: F) -> Writer<O, Reader<E, V>>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, U) -> V + Send + Sync + 'static,
    {
        let folder = Arc::new(folder);
        outer.map_result("fold_t", move |reader| {
            let folder = Arc::clone(&folder);
            reader.fold(seed.clone(), move |accumulator, value| folder(accumulator, value))
        })
    }

    fn select_nested<T, V, B, P>(
        outer: Writer<O, T>,
        bind: B,
        project: P,
    ) -> Writer<O, Reader<E, V>>
    where
        T: Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
        B: Fn(T) -> Self + Send + Sync + 'static,
        P: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let bind = Arc::new(bind);
        let project = Arc::new(project);
        outer.map_result("select_many", move |value: T| {
            let bind = Arc::clone(&bind);
            let project = Arc::clone(&project);
            Reader::from_fn(move |environment: E| -> ReaderResult<V> {
                bind(value.clone())
                    .run(environment)
                    .map_value("select_many", |inner| project(value.clone(), inner))
            })
        })
    }
}

impl<O, S, U> Nested<O> for State<S, U>
where
    O: Send + Sync + 'static,
    S: 'static,
    U: Send + Sync + 'static,
{
    type Item = U;
    type Lifted<V>
        = State<S, V>
    where
        V: Send + Sync + 'static;

    fn fold_nested<V, F>(outer: Writer<O, Self>, seed: V, folder: F) -> Writer<O, State<S, V>>
    where
        V: Clone + Send + Sync + 'static,
        F: Fn(V, U) -> V + Send + Sync + 'static,
    {
        let folder = Arc::new(folder);
        outer.map_result("fold_t", move |state| {
            let folder = Arc::clone(&folder);
            state.fold(seed.clone(), move |accumulator, value| folder(accumulator, value))
        })
    }

    fn select_nested<T, V, B, P>(
        outer: Writer<O, T>,
        bind: B,
        project: P,
    ) -> Writer<O, State<S, V>>
    where
        T: Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
        B: Fn(T) -> Self + Send + Sync + 'static,
        P: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let bind = Arc::new(bind);
        let project = Arc::new(project);
        outer.map_result("select_many", move |value: T| {
            let bind = Arc::clone(&bind);
            let project = Arc::clone(&project);
            State::from_fn(move |initial_state: S| -> StateResult<S, V> {
                bind(value.clone())
                    .run(initial_state)
                    .map_value("select_many", |inner| project(value.clone(), inner))
            })
        })
    }
}

/// Folds inside the effect nested in `writer`.
///
/// Free-function form of [`Writer::fold_t`].
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::{fold_t, State, Writer};
///
/// let nested: Writer<&str, State<i32, i32>> =
///     Writer::new(State::get(), vec!["outer"]);
/// let (state, log) = fold_t(nested, 100, |seed, value| seed + value).run();
///
/// assert_eq!(log, vec!["outer"]);
/// assert_eq!(state.unwrap().eval(5), Some(105));
/// ```
pub fn fold_t<O, M, V, F>(writer: Writer<O, M>, seed: V, folder: F) -> Writer<O, M::Lifted<V>>
where
    O: Send + Sync + 'static,
    M: Nested<O>,
    V: Clone + Send + Sync + 'static,
    F: Fn(V, M::Item) -> V + Send + Sync + 'static,
{
    M::fold_nested(writer, seed, folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nested_writer_select_concatenates_logs() {
        let outer: Writer<&str, i32> = Writer::new(2, vec!["outer"]);
        let flattened = outer.select_many(
            |value| Writer::new(value * 10, vec!["inner"]),
            |value, inner| value + inner,
        );
        assert_eq!(flattened.run(), (Some(22), vec!["outer", "inner"]));
    }

    #[rstest]
    fn nested_reader_fold_stays_deferred() {
        let nested: Writer<&str, Reader<i32, i32>> = Writer::new(Reader::ask(), vec!["outer"]);
        let (reader, log) = nested.fold_t(1, |seed, value| seed + value).run();
        assert_eq!(log, vec!["outer"]);
        assert_eq!(reader.map(|reader| reader.run(41).into_value()), Some(Ok(42)));
    }

    #[rstest]
    fn nested_state_select_keeps_inner_bottom() {
        let outer: Writer<&str, i32> = Writer::new(3, vec!["outer"]);
        let composed = outer.select_many(
            |_| State::<i32, i32>::get().filter(|current| *current > 100),
            |value, current| value + current,
        );
        let (state, log) = composed.run();
        assert_eq!(log, vec!["outer"]);
        let result = state.map(|state| state.run(7));
        assert_eq!(result, Some(StateResult::bottom(7)));
    }
}
