//! Template loading traits for the infrastructure layer

use async_trait::async_trait;
use std::path::Path;

use crate::infrastructure::templates::{TemplateError, TemplateSet};

/// Loads a template set from a path
#[async_trait]
pub trait TemplateLoader: Send + Sync {
    /// Load the template set rooted at `path`
    async fn load_template(&self, path: &Path) -> Result<TemplateSet, TemplateError>;
}
