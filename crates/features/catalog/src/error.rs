use iet_domain::error::format_context;
use std::borrow::Cow;

/// Defects in the static registry data.
///
/// These are configuration bugs caught by tests over the data, never raised on the
/// request path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Section has no tools{}: {section}", format_context(.context))]
    EmptySection { section: &'static str, context: Option<Cow<'static, str>> },

    #[error("Route is not an absolute path{}: {url}", format_context(.context))]
    InvalidUrl { url: &'static str, context: Option<Cow<'static, str>> },

    #[error("Route is registered more than once{}: {url}", format_context(.context))]
    DuplicateUrl { url: &'static str, context: Option<Cow<'static, str>> },

    #[error("Route nests deeper than one level{}: {url}", format_context(.context))]
    NestedTooDeep { url: &'static str, context: Option<Cow<'static, str>> },
}
