//! `writer!` macro for comprehension-style Writer code.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the value of a Writer (`flat_map`)
//! - `let pattern = expression;` is a pure binding
//! - `where condition;` turns the rest of the block bottom unless `condition` holds
//! - `expression` is the final Writer
//!
//! `<-` is not a single token in `macro_rules!`, so binds use `<=`.
//!
//! # Examples
//!
//! ```rust
//! use chronicle::writer;
//! use chronicle::effect::Writer;
//!
//! let computation: Writer<String, i32> = writer! {
//!     x <= Writer::new(3, vec!["got x".to_string()]);
//!     where x > 1;
//!     y <= Writer::new(x * 2, vec![format!("doubled {x}")]);
//!     let total = x + y;
//!     Writer::pure(total)
//! };
//!
//! assert_eq!(computation.eval(), Some(9));
//! assert_eq!(computation.exec(), vec!["got x", "doubled 3"]);
//! ```
//!
//! The macro expands `pattern <= expression; rest` into
//! `expression.flat_map(move |pattern| rest)`, so every rule of
//! [`Writer::flat_map`](crate::effect::Writer::flat_map) applies: a bottom
//! step stops the block and keeps the log written before it.

#![forbid(unsafe_code)]

/// Comprehension syntax over [`Writer`](crate::effect::Writer).
///
/// ```text
/// writer! {
///     pattern <= writer_expression;   // bind (flat_map)
///     let pattern = expression;       // pure let binding
///     where condition;                // guard (bottom when false)
///     writer_expression               // final Writer
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use chronicle::writer;
/// use chronicle::effect::Writer;
///
/// let rejected: Writer<&str, i32> = writer! {
///     x <= Writer::new(1, vec!["start"]);
///     where x > 5;
///     Writer::new(x, vec!["unreachable"])
/// };
///
/// let (value, log) = rejected.run();
/// assert_eq!(value, None);
/// assert_eq!(log, vec!["start"]);
/// ```
#[macro_export]
macro_rules! writer {
    // Guard: where condition; rest
    (where $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::writer!($($rest)+)
        } else {
            $crate::effect::Writer::bottom()
        }
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expression:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expression;
            $crate::writer!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expression;
            $crate::writer!($($rest)+)
        }
    };

    // Bind with identifier pattern
    ($pattern:ident <= $writer:expr ; $($rest:tt)+) => {
        $writer.flat_map(move |$pattern| {
            $crate::writer!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $writer:expr ; $($rest:tt)+) => {
        $writer.flat_map(move |($($pattern)*)| {
            $crate::writer!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $writer:expr ; $($rest:tt)+) => {
        $writer.flat_map(move |_| {
            $crate::writer!($($rest)+)
        })
    };

    // Final expression
    ($result:expr) => {
        $result
    };
}
