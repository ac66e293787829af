//! Type class traits for appending values.
//!
//! - [`Semigroup`]: Associative binary operation (`combine`)
//! - [`Monoid`]: Semigroup with an identity element (`empty`)
//! - [`Sum`], [`Product`]: Numeric wrappers choosing the operation
//!
//! Writer logs are `Vec`s and are concatenated with `Vec`'s semigroup
//! instance. The same instances give optional values, lists and sets their
//! "append" behaviour.
//!
//! # Examples
//!
//! ```rust
//! use chronicle::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//!
//! assert_eq!(Some(Sum::new(10)).combine(Some(Sum::new(20))), Some(Sum::new(30)));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
