//! Content from an HTTP text-generation service

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

use crate::generation::{ContentError, ContentGenerator, DataContext, DemoProfile};

/// Connection settings for the content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Endpoint receiving a POST with the demo profile
    pub endpoint: Url,
    /// Sent as a bearer token when present. Only ever set from the
    /// environment, never from a config file.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Model name forwarded to the service
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl GeneratorConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_key: None,
            model: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Serialize)]
struct ContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(flatten)]
    profile: &'a DemoProfile,
}

/// Asks a remote service for demo content.
///
/// The service answers with a JSON mapping, either bare or wrapped as
/// `{"content": {...}}`.
pub struct HttpContentGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl HttpContentGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn generate(&self, profile: &DemoProfile) -> Result<DataContext, ContentError> {
        let body = ContentRequest {
            model: self.config.model.as_deref(),
            profile,
        };

        tracing::info!(
            endpoint = %self.config.endpoint,
            company = %profile.company_name,
            "Requesting generated content"
        );

        let mut request = self.client.post(self.config.endpoint.clone()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: JsonValue = response
            .json()
            .await
            .map_err(|e| ContentError::InvalidResponse(format!("body is not JSON: {e}")))?;

        let content = match value {
            JsonValue::Object(mut map) if map.len() == 1 && map.contains_key("content") => {
                map.remove("content").unwrap_or(JsonValue::Null)
            }
            other => other,
        };

        DataContext::from_value(content).map_err(|e| ContentError::InvalidResponse(e.to_string()))
    }
}
