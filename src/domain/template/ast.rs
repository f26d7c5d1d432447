// Segment types shared between the template grammar and the finishing step

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Terminal literal that matches the rest of a path.
pub const PATH_WILDCARD: &str = "**";

/// Prefix of binding names synthesized for unnamed captures.
pub const BINDING_NAME_PREFIX: &str = "$";

/// The three kinds of segment the grammar produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SegmentKind {
    /// Opens a capture, e.g. `{name=`
    Binding = 1,
    /// Closes the capture opened by the last `Binding`
    EndBinding = 2,
    /// A literal path component or a wildcard (`*`, `**`)
    Terminal = 3,
}

impl SegmentKind {
    /// Integer tag used by the grammar stage
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SegmentKind {
    type Error = TemplateError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(SegmentKind::Binding),
            2 => Ok(SegmentKind::EndBinding),
            3 => Ok(SegmentKind::Terminal),
            other => Err(TemplateError::UnknownSegmentKind(other)),
        }
    }
}

/// One unit of a parsed path template.
///
/// For terminals `literal` is the component text. For bindings it is the
/// capture name, which may be missing until the template is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl Segment {
    pub fn new(kind: SegmentKind, literal: Option<String>) -> Self {
        Self { kind, literal }
    }

    pub fn binding(name: impl Into<String>) -> Self {
        Self::new(SegmentKind::Binding, Some(name.into()))
    }

    pub fn unnamed_binding() -> Self {
        Self::new(SegmentKind::Binding, None)
    }

    pub fn end_binding() -> Self {
        Self::new(SegmentKind::EndBinding, None)
    }

    pub fn terminal(literal: impl Into<String>) -> Self {
        Self::new(SegmentKind::Terminal, Some(literal.into()))
    }

    /// True when the literal is present and non-empty
    pub fn has_literal(&self) -> bool {
        self.literal.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn literal_str(&self) -> &str {
        self.literal.as_deref().unwrap_or("")
    }

    /// True for a `**` terminal
    pub fn is_path_wildcard(&self) -> bool {
        self.kind == SegmentKind::Terminal && self.literal.as_deref() == Some(PATH_WILDCARD)
    }
}
