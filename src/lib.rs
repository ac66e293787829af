//! # chronicle
//!
//! Deferred, log-accumulating computations for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid), the append capability behind Writer logs
//! - **Effects**: [`Writer`](effect::Writer), [`Reader`](effect::Reader) and
//!   [`State`](effect::State), each able to short-circuit to bottom
//! - **Comprehensions**: the [`writer!`] macro
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and the numeric wrappers
//! - `effect`: Writer, Reader, State (enables `typeclass`)
//! - `tracing`: trace events when a computation goes bottom
//! - `serde`: Serialize/Deserialize for result types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chronicle::prelude::*;
//!
//! let audited: Writer<String, i32> = Writer::pure(3)
//!     .flat_map(|value| Writer::new(value + 1, vec![format!("logged-{value}")]))
//!     .filter(|value| *value > 0);
//!
//! let (value, log) = audited.run();
//! assert_eq!(value, Some(4));
//! assert_eq!(log, vec!["logged-3"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use chronicle::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
