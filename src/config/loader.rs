use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::template_set::TemplateSet;

const DEFAULT_CONFIG_FILE: &str = "templates.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are read as JSON, anything else as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Load a template document, defaulting to `templates.yml` in the working directory.
pub fn load_template_set(path: Option<&Path>) -> Result<TemplateSet> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    tracing::debug!(path = %path.display(), "loading template document");

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read template document {}", path.display()))?;

    parse_template_set(&contents, DocumentFormat::from_path(path))
        .with_context(|| format!("invalid template document {}", path.display()))
}

pub fn parse_template_set(contents: &str, format: DocumentFormat) -> Result<TemplateSet> {
    let set: TemplateSet = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(contents)?,
        DocumentFormat::Json => serde_json::from_str(contents)?,
    };
    check_names(&set)?;
    Ok(set)
}

fn check_names(set: &TemplateSet) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in &set.templates {
        if entry.name.trim().is_empty() {
            bail!("Template name cannot be empty");
        }
        if !seen.insert(entry.name.as_str()) {
            bail!("Duplicate template name: {}", entry.name);
        }
    }
    Ok(())
}
