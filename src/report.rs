// Report rendering for the `pathtemplate` command

use anyhow::{bail, Result};
use serde::Serialize;
use std::str::FromStr;

use crate::domain::template::ParseResult;
use crate::error::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => bail!("Unknown output format: {}", other),
        }
    }
}

/// Outcome for one template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportEntry {
    fn new(name: String, result: &Result<ParseResult, TemplateError>) -> Self {
        match result {
            Ok(parsed) => Self {
                name,
                ok: true,
                size: Some(parsed.size()),
                template: Some(parsed.to_string()),
                bindings: Some(
                    parsed
                        .binding_names()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                ),
                error: None,
            },
            Err(e) => Self {
                name,
                ok: false,
                size: None,
                template: None,
                bindings: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn from_results(results: Vec<(String, Result<ParseResult, TemplateError>)>) -> Self {
        let entries = results
            .into_iter()
            .map(|(name, result)| ReportEntry::new(name, &result))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// True when every template finished cleanly
    pub fn is_success(&self) -> bool {
        self.entries.iter().all(|e| e.ok)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| match (&e.error, e.size, &e.template) {
                (Some(err), _, _) => format!("err  {} {}", e.name, err),
                (None, Some(size), Some(template)) => {
                    format!("ok   {} size={} {}", e.name, size, template)
                }
                _ => format!("ok   {}", e.name),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
