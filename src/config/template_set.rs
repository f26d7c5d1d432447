use serde::{Deserialize, Serialize};

use crate::domain::template::{finish_parse, ParseResult, Segment};
use crate::error::TemplateError;

/// A document of named segment sequences, as emitted by the grammar stage
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TemplateSet {
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl TemplateSet {
    /// Finish every template in document order.
    ///
    /// A failing template is reported in place and does not stop the rest.
    pub fn finish_all(self) -> Vec<(String, Result<ParseResult, TemplateError>)> {
        self.templates
            .into_iter()
            .map(|entry| {
                let result = finish_parse(entry.segments);
                if let Err(e) = &result {
                    tracing::info!(template = %entry.name, error = %e, "template rejected");
                }
                (entry.name, result)
            })
            .collect()
    }
}
