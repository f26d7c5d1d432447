// Template documents: named segment sequences loaded from YAML or JSON

pub mod loader;
pub mod template_set;

pub use loader::{load_template_set, parse_template_set, DocumentFormat};
pub use template_set::{TemplateEntry, TemplateSet};
