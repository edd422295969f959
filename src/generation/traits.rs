//! Port interfaces for the generation domain

use async_trait::async_trait;

use crate::generation::{ContentError, DataContext, DemoProfile};

/// Supplies the generated part of the data context (taglines, product
/// catalogue, copy) for a demo profile
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce content to merge over the profile's base context
    async fn generate(&self, profile: &DemoProfile) -> Result<DataContext, ContentError>;
}
