// Template module for resource path templates
//
// The grammar turns template text such as `shelves/{shelf}/books/{book=*}`
// into a flat list of segments. This module finishes that list before the
// template object takes it over.

mod ast;
mod finish;
mod parse_result;

pub use ast::{Segment, SegmentKind, BINDING_NAME_PREFIX, PATH_WILDCARD};
pub use finish::{allow_one_path_wildcard, count_terminals, finish_parse, update_binding_literals};
pub use parse_result::ParseResult;
