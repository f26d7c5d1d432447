// Domain model for path templates

pub mod template;

pub use template::{finish_parse, ParseResult, Segment, SegmentKind};
