// Result of finishing a template: the named segments plus their size

use serde::Serialize;
use std::fmt;

use super::ast::{Segment, SegmentKind};

/// Finished segments handed to the template object.
///
/// `size` is the number of terminal segments and is only ever computed by
/// [`finish_parse`](super::finish_parse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    segments: Vec<Segment>,
    size: usize,
}

impl ParseResult {
    pub(crate) fn new(segments: Vec<Segment>, size: usize) -> Self {
        Self { segments, size }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Capture names in template order
    pub fn binding_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Binding)
            .map(|s| s.literal_str())
            .collect()
    }
}

/// Canonical template text, e.g. `{$0=shelf}/books/{$1=book}`
impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_slash = false;

        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Binding => {
                    if needs_slash {
                        f.write_str("/")?;
                    }
                    write!(f, "{{{}=", segment.literal_str())?;
                    needs_slash = false;
                }
                SegmentKind::Terminal => {
                    if needs_slash {
                        f.write_str("/")?;
                    }
                    f.write_str(segment.literal_str())?;
                    needs_slash = true;
                }
                SegmentKind::EndBinding => {
                    f.write_str("}")?;
                    needs_slash = true;
                }
            }
        }

        Ok(())
    }
}
