// Common test utilities shared across test files

use pathtemplate::Segment;
use std::fs;
use std::path::PathBuf;

/// `shelves/{shelf}/books/{book}` with both captures unnamed
#[allow(dead_code)]
pub fn book_segments() -> Vec<Segment> {
    vec![
        Segment::unnamed_binding(),
        Segment::terminal("shelf"),
        Segment::end_binding(),
        Segment::terminal("books"),
        Segment::unnamed_binding(),
        Segment::terminal("book"),
        Segment::end_binding(),
    ]
}

/// A sequence of terminals, one per literal
#[allow(dead_code)]
pub fn terminals(literals: &[&str]) -> Vec<Segment> {
    literals.iter().map(|l| Segment::terminal(*l)).collect()
}

/// Write `contents` to `name` inside a fresh temp dir
#[allow(dead_code)]
pub fn write_document(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write template document");
    (dir, path)
}
