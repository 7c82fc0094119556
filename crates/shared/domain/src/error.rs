//! Helpers shared by the workspace's error enums.

use std::borrow::Cow;

/// Renders an optional error context as ` (context)`, or nothing when absent.
///
/// Used inside `#[error(...)]` attributes:
/// `#[error("Config error{}: {source}", format_context(.context))]`.
#[must_use]
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
