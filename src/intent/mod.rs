//! Intent sources: turning a free-text prompt into a [`ChartIntent`].
//!
//! The remote model call is the only I/O on the resolution path. It is made
//! once per request; failures surface immediately without retries.

pub mod normalize;
pub mod openai;
pub mod validate;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::{DatasetCatalog, DatasetSummary};
use crate::model::{ChartIntent, AVAILABLE_CHART_TYPES};

pub use normalize::{normalize_granularity, normalize_intent, sanitize_prompt, MAX_PROMPT_CHARS};
pub use openai::{OpenAiConfig, OpenAiIntentSource};
pub use validate::{validate_intent, MAX_LIMIT};

/// Error type for intent generation.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("No API key configured for the intent source")]
    MissingApiKey,

    #[error("Intent source request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Intent source returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Intent source returned no choices")]
    EmptyResponse,

    #[error("Intent source returned malformed intent: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// What the intent source is told about the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentContext {
    pub datasets: Vec<DatasetSummary>,
    pub chart_types: Vec<String>,
}

impl IntentContext {
    /// Describe every dataset in `catalog`, plus the supported chart types.
    pub fn from_catalog(catalog: &dyn DatasetCatalog) -> Self {
        Self {
            datasets: catalog.summaries(),
            chart_types: AVAILABLE_CHART_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Plain-text rendering used in model prompts.
    pub fn describe(&self) -> String {
        let lines: Vec<String> = self
            .datasets
            .iter()
            .map(|d| {
                format!(
                    "  {}: metrics=[{}], dimensions=[{}]",
                    d.name,
                    d.metrics.join(", "),
                    d.dimensions.join(", ")
                )
            })
            .collect();

        format!(
            "Available datasets:\n{}\nChart types: {}",
            lines.join("\n"),
            self.chart_types.join(", ")
        )
    }
}

/// Produces a structured intent from a prompt.
#[async_trait]
pub trait IntentSource: Send + Sync {
    async fn generate_intent(
        &self,
        prompt: &str,
        context: &IntentContext,
    ) -> Result<ChartIntent, IntentError>;
}

#[async_trait]
impl<T: IntentSource + ?Sized> IntentSource for Arc<T> {
    async fn generate_intent(
        &self,
        prompt: &str,
        context: &IntentContext,
    ) -> Result<ChartIntent, IntentError> {
        (**self).generate_intent(prompt, context).await
    }
}

/// Intent source that always answers with the same intent.
#[derive(Debug, Clone)]
pub struct StaticIntentSource {
    intent: ChartIntent,
}

impl StaticIntentSource {
    pub fn new(intent: ChartIntent) -> Self {
        Self { intent }
    }
}

#[async_trait]
impl IntentSource for StaticIntentSource {
    async fn generate_intent(
        &self,
        _prompt: &str,
        _context: &IntentContext,
    ) -> Result<ChartIntent, IntentError> {
        Ok(self.intent.clone())
    }
}
