//! Numeric wrapper types selecting how numbers are appended.
//!
//! A number has more than one lawful way to combine with another, so the
//! choice is made explicit by wrapping it. This is how numeric values take
//! part in [`Semigroup`](super::Semigroup) based appending, for example when
//! two optional numbers are added together:
//!
//! ```rust
//! use chronicle::typeclass::{Semigroup, Sum};
//!
//! let total = Some(Sum::new(10)).combine(Some(Sum::new(20)));
//! assert_eq!(total, Some(Sum::new(30)));
//! ```

// =============================================================================
// Sum Wrapper
// =============================================================================

/// Additive wrapper: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use chronicle::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronicle::typeclass::Sum;
    ///
    /// assert_eq!(Sum::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// Multiplicative wrapper: `Product(a).combine(Product(b)) == Product(a * b)`,
/// identity `Product(1)`.
///
/// `Default` is deliberately not derived: the numeric default is `0`, which is
/// not the multiplicative identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
