//! Built-in content that needs no external service

use async_trait::async_trait;
use serde_json::json;

use crate::generation::{ContentError, ContentGenerator, DataContext, DemoProfile};

/// Produces deterministic placeholder content from the profile alone
pub struct StaticContentGenerator;

impl StaticContentGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for StaticContentGenerator {
    async fn generate(&self, profile: &DemoProfile) -> Result<DataContext, ContentError> {
        let company = &profile.company_name;
        let industry = &profile.industry;

        let content = json!({
            "tagline": format!("{company}: {industry} made simple"),
            "hero": {
                "title": format!("Welcome to {company}"),
                "subtitle": format!("The modern way to do {}", industry.to_lowercase()),
                "cta": "Get started"
            },
            "features": [
                "Fast onboarding",
                "Real-time insights",
                "Friendly support"
            ],
            "products": [
                {
                    "name": format!("{company} Starter"),
                    "price": "$19",
                    "description": format!("Everything you need to try {company}."),
                    "badges": ["Popular"]
                },
                {
                    "name": format!("{company} Pro"),
                    "price": "$49",
                    "description": "For growing teams.",
                    "badges": ["New"]
                },
                {
                    "name": format!("{company} Enterprise"),
                    "price": "Contact us",
                    "description": "Custom plans and dedicated support.",
                    "badges": []
                }
            ]
        });

        Ok(DataContext::from_value(content)?)
    }
}
