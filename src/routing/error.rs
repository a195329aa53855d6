//! Route construction errors.

use thiserror::Error;

/// Errors raised while turning flat route text into a route tree.
///
/// Matching itself never fails; an unmatched request resolves to the
/// fallback endpoint instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Method text is not one of the nine recognized methods.
    #[error("unknown HTTP method: {0:?}")]
    UnknownMethod(String),

    /// Route paths are absolute.
    #[error("path {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    /// A `{}` placeholder without a name.
    #[error("path {0:?} contains a parameter with an empty name")]
    EmptyParamName(String),

    /// Braces that do not wrap a whole segment.
    #[error("segment {segment:?} of path {path:?} has unbalanced braces")]
    MalformedSegment { path: String, segment: String },

    /// Request line text that is not `<METHOD> <PATH>`.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}
