//! Tracing hooks for bottom transitions.
//!
//! With the `tracing` feature enabled, every combinator that turns an active
//! computation into bottom emits a `trace` event, and every combinator that
//! skips its closure because its input was already bottom emits another.
//! Without the feature these hooks compile to nothing.

/// Called when `combinator` moves a computation from active to bottom.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn rejected(effect_name: &'static str, combinator: &'static str) {
    tracing::trace!(
        effect = effect_name,
        combinator,
        "predicate rejected value, computation is now bottom"
    );
}

/// Called when `combinator` skips its closure because its input was bottom.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn skipped(effect_name: &'static str, combinator: &'static str) {
    tracing::trace!(
        effect = effect_name,
        combinator,
        "input is bottom, closure not invoked"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) const fn rejected(_effect_name: &'static str, _combinator: &'static str) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) const fn skipped(_effect_name: &'static str, _combinator: &'static str) {}
