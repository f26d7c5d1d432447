// Error handling for pathtemplate

use thiserror::Error;

/// Errors raised while finishing a parsed template.
///
/// Every variant is an authoring mistake in the template itself, so none of
/// them are worth retrying. Callers should reject the whole template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A second `**` terminal was found. `index` is its position in the sequence.
    #[error("cannot contain more than one path wildcard")]
    TooManyPathWildcards { index: usize },

    /// An integer tag from the grammar did not name a segment kind.
    #[error("unknown segment kind tag: {0}")]
    UnknownSegmentKind(u8),
}
