//! Error types for the effect system.
//!
//! Bottom is ordinary data inside every effect in this crate. It only becomes
//! an error when a caller explicitly asks for the value of a bottom result
//! through an unwrap-or-fail accessor such as
//! [`WriterResult::into_value`](super::WriterResult::into_value).

/// Returned when the value of a bottom (short-circuited) result is requested.
///
/// # Examples
///
/// ```rust
/// use chronicle::effect::{BottomError, Writer};
///
/// let rejected: Writer<String, i32> = Writer::pure(7).filter(|value| *value > 10);
/// let error = rejected.evaluate().into_value().unwrap_err();
/// assert_eq!(error, BottomError { effect_name: "Writer" });
/// assert_eq!(
///     format!("{error}"),
///     "Writer: computation is bottom and produced no value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BottomError {
    /// The effect whose result was bottom (`"Writer"`, `"Reader"` or `"State"`).
    pub effect_name: &'static str,
}

impl BottomError {
    pub(crate) const WRITER: Self = Self {
        effect_name: "Writer",
    };
    pub(crate) const READER: Self = Self {
        effect_name: "Reader",
    };
    pub(crate) const STATE: Self = Self {
        effect_name: "State",
    };
}

impl std::fmt::Display for BottomError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: computation is bottom and produced no value",
            self.effect_name
        )
    }
}

impl std::error::Error for BottomError {}
