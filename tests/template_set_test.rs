// Integration tests for loading and finishing template documents

use pathtemplate::config::{load_template_set, parse_template_set, DocumentFormat};
use pathtemplate::report::{OutputFormat, Report};

mod common;

const LIBRARY_YAML: &str = r#"
templates:
  - name: book
    description: shelves/{shelf}/books/{book}
    segments:
      - kind: terminal
        literal: shelves
      - kind: binding
      - kind: terminal
        literal: "*"
      - kind: end_binding
      - kind: terminal
        literal: books
      - kind: binding
        literal: book
      - kind: terminal
        literal: "*"
      - kind: end_binding
  - name: everything
    segments:
      - kind: terminal
        literal: "**"
  - name: broken
    segments:
      - kind: terminal
        literal: "**"
      - kind: terminal
        literal: foo
      - kind: terminal
        literal: "**"
"#;

#[test]
fn test_load_yaml_document() {
    let (_dir, path) = common::write_document("templates.yml", LIBRARY_YAML);
    let set = load_template_set(Some(&path)).unwrap();

    assert_eq!(set.templates.len(), 3);
    assert_eq!(set.templates[0].name, "book");
    assert_eq!(
        set.templates[0].description.as_deref(),
        Some("shelves/{shelf}/books/{book}")
    );
}

#[test]
fn test_load_json_document() {
    let json = r#"{"templates":[{"name":"root","segments":[{"kind":"binding"},{"kind":"terminal","literal":"**"},{"kind":"end_binding"}]}]}"#;
    let (_dir, path) = common::write_document("templates.json", json);

    let results = load_template_set(Some(&path)).unwrap().finish_all();
    let parsed = results[0].1.as_ref().unwrap();
    assert_eq!(parsed.to_string(), "{$0=**}");
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yml");

    let err = load_template_set(Some(&path)).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.yml"));
}

#[test]
fn test_malformed_document_names_path() {
    let (_dir, path) = common::write_document("bad.yml", "templates: [ {name: ");
    let err = load_template_set(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("bad.yml"));
}

#[test]
fn test_finish_all_reports_each_template() {
    let set = parse_template_set(LIBRARY_YAML, DocumentFormat::Yaml).unwrap();
    let report = Report::from_results(set.finish_all());
    let entries = report.entries();

    assert_eq!(entries.len(), 3);
    assert!(entries[0].ok);
    assert_eq!(entries[0].size, Some(4));
    assert_eq!(
        entries[0].template.as_deref(),
        Some("shelves/{$0=*}/books/{book=*}")
    );
    assert_eq!(
        entries[0].bindings,
        Some(vec!["$0".to_string(), "book".to_string()])
    );
    assert!(entries[1].ok);
    assert_eq!(entries[1].size, Some(1));
    assert!(!entries[2].ok);
    assert!(!report.is_success());
}

#[test]
fn test_yaml_report_round_trips_through_serde_yaml() {
    let set = parse_template_set(LIBRARY_YAML, DocumentFormat::Yaml).unwrap();
    let out = Report::from_results(set.finish_all())
        .render(OutputFormat::Yaml)
        .unwrap();

    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    let entries = value.as_sequence().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[2]["error"].as_str(),
        Some("cannot contain more than one path wildcard")
    );
}
