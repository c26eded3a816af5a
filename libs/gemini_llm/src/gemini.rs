use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::TextGenerationService;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiService {
    client: Client,
    api_key: String,
}

impl GeminiService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

fn extract_text(result: &Value) -> Option<&str> {
    result["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .and_then(|parts| parts.first())
        .and_then(|part| part["text"].as_str())
}

#[async_trait]
impl TextGenerationService for GeminiService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", API_BASE_URL, model);

        tracing::debug!("Requesting completion from {}", model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }]
            }))
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: Value = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = extract_text(&result).context("Invalid response format from Gemini API")?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let result = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Hello from Gemini" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });

        assert_eq!(extract_text(&result), Some("Hello from Gemini"));
    }

    #[test]
    fn rejects_responses_without_candidates() {
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&json!({})), None);
    }
}
