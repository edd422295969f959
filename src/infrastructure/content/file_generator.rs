//! Content read from a JSON or YAML file prepared ahead of time

use async_trait::async_trait;
use std::path::PathBuf;

use crate::generation::{ContentError, ContentGenerator, DataContext, DemoProfile};

/// Loads content from a data file, ignoring the profile
pub struct FileContentGenerator {
    path: PathBuf,
}

impl FileContentGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentGenerator for FileContentGenerator {
    async fn generate(&self, _profile: &DemoProfile) -> Result<DataContext, ContentError> {
        Ok(DataContext::from_file(&self.path).await?)
    }
}
