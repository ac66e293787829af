//! Deferred effects with short-circuiting.
//!
//! # Effects
//!
//! - [`Writer`]: a value together with an ordered log
//! - [`Reader`]: a value computed from a read-only environment
//! - [`State`]: a value computed while threading a state
//!
//! Each effect is a description of work; nothing runs until it is evaluated
//! (`evaluate`/`run`). Any step can go *bottom*, meaning it produced no
//! value. Bottom is absorbing: every later step is skipped and reports
//! bottom too. See [`Status`] for the transitions.
//!
//! # Composition
//!
//! A Writer can carry another effect as its value. [`Writer::fold_t`] and
//! [`Writer::select_many`] work through the [`Nested`] trait so the inner
//! effect keeps its shape (Reader, State) or is flattened (Writer).
//!
//! # Comprehension Syntax
//!
//! ```rust
//! use chronicle::writer;
//! use chronicle::effect::Writer;
//!
//! let computation: Writer<&str, i32> = writer! {
//!     x <= Writer::new(5, vec!["five"]);
//!     y <= Writer::new(10, vec!["ten"]);
//!     Writer::pure(x + y)
//! };
//! assert_eq!(computation.run(), (Some(15), vec!["five", "ten"]));
//! ```

// =============================================================================
// Bottom Tracking
// =============================================================================

mod error;
mod instrument;
mod status;

pub use error::BottomError;
pub use status::Status;

// =============================================================================
// Base Effects
// =============================================================================

mod reader;
mod state;
mod writer;

pub use reader::{Reader, ReaderResult};
pub use state::{State, StateResult};
pub use writer::{Writer, WriterResult};

// =============================================================================
// Nested Composition
// =============================================================================

mod nested;

pub use nested::{Nested, fold_t};

// =============================================================================
// Comprehension Macro
// =============================================================================

mod writer_macro;
