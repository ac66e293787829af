//! The short-circuit state machine shared by every effect in this crate.
//!
//! ```text
//!            map / bind / fold
//!          +-------------------+
//!          v                   |
//!      [ Active ] -------------+
//!          |
//!          | filter rejects, or a bound step is itself bottom
//!          v
//!      [ Bottom ] <--- every combinator (absorbing)
//! ```
//!
//! Results never store a status next to a value. The status is derived from
//! whether a value is present, so a bottom result cannot expose one.
//! Every `filter` in the crate goes through [`Status::guard`] by way of
//! `Status::guard_value`.

use super::instrument;

/// Whether a computation produced a value or short-circuited.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::Status;
///
/// assert_eq!(Status::Active.guard(true), Status::Active);
/// assert_eq!(Status::Active.guard(false), Status::Bottom);
/// assert_eq!(Status::Bottom.guard(true), Status::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A value was produced.
    #[default]
    Active,
    /// The computation short-circuited; there is no value to trust.
    Bottom,
}

impl Status {
    /// Derives the status of an optional value.
    #[inline]
    pub const fn of<T>(value: &Option<T>) -> Self {
        if value.is_some() {
            Self::Active
        } else {
            Self::Bottom
        }
    }

    /// Returns `true` for [`Status::Bottom`].
    #[inline]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::Bottom)
    }

    /// Returns `true` for [`Status::Active`].
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Transition taken by a predicate test: an active computation stays
    /// active only if the predicate accepted its value.
    #[must_use]
    #[inline]
    pub const fn guard(self, accepted: bool) -> Self {
        match self {
            Self::Active if accepted => Self::Active,
            _ => Self::Bottom,
        }
    }

    /// Runs the predicate transition on an optional value.
    ///
    /// The predicate is only called on an active value. The value survives
    /// only if the resulting status is still active.
    pub(crate) fn guard_value<T, P>(
        value: Option<T>,
        effect_name: &'static str,
        combinator: &'static str,
        predicate: P,
    ) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let before = Self::of(&value);
        let after = before.guard(value.as_ref().is_some_and(predicate));
        if before.is_active() && after.is_bottom() {
            instrument::rejected(effect_name, combinator);
        }
        if after.is_active() { value } else { None }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(formatter, "active"),
            Self::Bottom => write!(formatter, "bottom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn initial_status_is_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    #[rstest]
    #[case(Status::Active, true, Status::Active)]
    #[case(Status::Active, false, Status::Bottom)]
    #[case(Status::Bottom, true, Status::Bottom)]
    #[case(Status::Bottom, false, Status::Bottom)]
    fn guard_transitions(#[case] from: Status, #[case] accepted: bool, #[case] to: Status) {
        assert_eq!(from.guard(accepted), to);
    }

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(Some(-4), None)]
    #[case(None, None)]
    fn guard_value_follows_guard_transition(
        #[case] value: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        let guarded = Status::guard_value(value, "Writer", "filter", |number| *number > 0);
        assert_eq!(guarded, expected);
        assert_eq!(
            Status::of(&guarded),
            Status::of(&value).guard(value.is_some_and(|number| number > 0))
        );
    }

    #[rstest]
    fn guard_value_skips_predicate_on_bottom() {
        let guarded = Status::guard_value(None::<i32>, "Writer", "filter", |_| {
            panic!("predicate must not run on bottom")
        });
        assert_eq!(guarded, None);
    }

    #[rstest]
    fn of_derives_from_presence() {
        assert_eq!(Status::of(&Some(1)), Status::Active);
        assert_eq!(Status::of(&None::<i32>), Status::Bottom);
    }

    #[rstest]
    fn display_is_lowercase() {
        assert_eq!(format!("{}", Status::Active), "active");
        assert_eq!(format!("{}", Status::Bottom), "bottom");
    }
}
