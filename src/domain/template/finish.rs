// Finishing pass over the segments produced by the template grammar

use super::ast::{Segment, SegmentKind, BINDING_NAME_PREFIX};
use super::parse_result::ParseResult;
use crate::error::TemplateError;

/// Turn a freshly parsed segment sequence into a [`ParseResult`].
///
/// Validation runs first so a rejected template never has its bindings
/// renamed.
pub fn finish_parse(mut segments: Vec<Segment>) -> Result<ParseResult, TemplateError> {
    tracing::debug!(segments = segments.len(), "finishing template");

    allow_one_path_wildcard(&segments)?;
    update_binding_literals(&mut segments);
    let size = count_terminals(&segments);

    tracing::debug!(size, "template finished");
    Ok(ParseResult::new(segments, size))
}

/// Fail on the second `**` terminal
pub fn allow_one_path_wildcard(segments: &[Segment]) -> Result<(), TemplateError> {
    let mut has_path_wildcard = false;

    for (index, segment) in segments.iter().enumerate() {
        if !segment.is_path_wildcard() {
            continue;
        }
        if has_path_wildcard {
            tracing::debug!(index, "rejecting second path wildcard");
            return Err(TemplateError::TooManyPathWildcards { index });
        }
        has_path_wildcard = true;
    }

    Ok(())
}

/// Give every unnamed binding a positional name: `$0`, `$1`, ...
///
/// The counter only advances when a name is assigned, so named bindings
/// leave no gaps.
pub fn update_binding_literals(segments: &mut [Segment]) {
    let mut binding_index = 0usize;

    for segment in segments
        .iter_mut()
        .filter(|s| s.kind == SegmentKind::Binding && !s.has_literal())
    {
        let name = format!("{}{}", BINDING_NAME_PREFIX, binding_index);
        tracing::trace!(name = %name, "synthesized binding name");
        segment.literal = Some(name);
        binding_index += 1;
    }
}

pub fn count_terminals(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Terminal)
        .count()
}
