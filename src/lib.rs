//! Finishing step for parsed resource path templates.
//!
//! A template grammar turns text like `shelves/{shelf}/books/{book=*}` into
//! a flat list of [`Segment`]s. [`finish_parse`] rejects lists with more than
//! one `**` wildcard and gives unnamed captures the names `$0`, `$1`, ...

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;

pub use domain::template::{
    allow_one_path_wildcard, count_terminals, finish_parse, update_binding_literals, ParseResult,
    Segment, SegmentKind, BINDING_NAME_PREFIX, PATH_WILDCARD,
};
pub use error::TemplateError;
