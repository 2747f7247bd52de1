// src/intent/openai.rs
//! Intent source backed by an OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{IntentContext, IntentError, IntentSource};
use crate::model::ChartIntent;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const SYSTEM_PROMPT: &str = r#"You are a data visualization assistant. Convert natural language requests into JSON chart specifications.

Respond with valid JSON only:
{
  "dataset": string,
  "metrics": [{"field": string, "aggregation": "sum"|"avg"|"min"|"max"|"count", "label": string (optional)}],
  "dimensions": [{"field": string, "granularity": "day"|"week"|"month"|"quarter"|"year" (optional)}],
  "filters": [{"field": string, "operator": "eq"|"neq"|"gt"|"gte"|"lt"|"lte"|"in", "value": any}],
  "chartType": "bar"|"line"|"pie"|"doughnut"|"area"|"scatter",
  "title": string,
  "sortBy": "label"|"value" (optional),
  "sortOrder": "asc"|"desc" (optional),
  "limit": integer between 1 and 100 (optional)
}

Use only metrics/dimensions from the chosen dataset. Choose appropriate chart types."#;

/// Connection settings for [`OpenAiIntentSource`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiIntentSource {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiIntentSource {
    pub fn new(config: OpenAiConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("No API key configured; prompt resolution will fail");
        }
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, prompt: &str, context: &IntentContext) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!("{}\n\nRequest: {}", context.describe(), prompt)}
            ],
            "max_tokens": self.config.max_tokens,
            "response_format": {"type": "json_object"}
        })
    }
}

/// Pull the intent out of a chat completion response body.
pub fn parse_completion(body: &str) -> Result<ChartIntent, IntentError> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(IntentError::EmptyResponse)?;

    Ok(serde_json::from_str(&content)?)
}

#[async_trait]
impl IntentSource for OpenAiIntentSource {
    async fn generate_intent(
        &self,
        prompt: &str,
        context: &IntentContext,
    ) -> Result<ChartIntent, IntentError> {
        if self.config.api_key.is_empty() {
            return Err(IntentError::MissingApiKey);
        }

        debug!(model = %self.config.model, "requesting intent");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt, context))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(IntentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}
