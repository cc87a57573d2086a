use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{Result, WordGameError};
use crate::generation::{GenerationRequest, TextGenerator};

/// Generation requests wait this long before the round goes on without them.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for an external text-generation service.
pub struct RemoteGenerator {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

impl RemoteGenerator {
    /// Connect to the service at `base_url` and verify it answers.
    pub async fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let generator = Self { client, base_url };
        generator.health_check().await?;

        Ok(generator)
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WordGameError::Generator(format!("Health check failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(WordGameError::Generator(format!(
                "Health check returned HTTP {}",
                response.status()
            )))
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for RemoteGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = format!("{}/v1/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| WordGameError::Generator(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(WordGameError::Generator(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| WordGameError::Generator(format!("Invalid JSON: {}", e)))?;

        let text = body.text.trim().to_string();
        if text.is_empty() {
            return Err(WordGameError::Generator("Empty response text".to_string()));
        }

        // A hint that contains the answer is worse than no hint
        if let GenerationRequest::Hint { word, .. } = request {
            if text.to_lowercase().contains(&word.to_lowercase()) {
                return Err(WordGameError::Generator(
                    "Generated hint reveals the word".to_string(),
                ));
            }
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "remote"
    }

    async fn is_available(&self) -> bool {
        self.health_check().await.is_ok()
    }
}
