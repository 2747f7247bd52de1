//! Resolution orchestrator.
//!
//! Sequences the resolution phases for one request:
//!
//! 1. **Sanitize** the prompt and describe the catalog
//! 2. **Generate** an intent through the [`IntentSource`]
//! 3. **Normalize** and **validate** the intent
//! 4. **Execute** grouping/aggregation, then sort and limit
//! 5. **Describe** the chart (title, axes, legend) and stamp metadata
//!
//! Phases 3-5 are synchronous and available on their own through
//! [`IntentResolver::resolve_intent`].

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{error, info, info_span};

use crate::catalog::DatasetCatalog;
use crate::engine::{apply_sort_and_limit, build_chart_spec, QueryExecutor};
use crate::intent::{
    normalize_intent, sanitize_prompt, validate_intent, IntentContext, IntentError, IntentSource,
};
use crate::model::{ChartIntent, ChartResponse, ResponseMetadata};

/// Error type for resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid or empty prompt")]
    EmptyPrompt,

    #[error(transparent)]
    IntentSource(#[from] IntentError),

    #[error("Invalid intent: {}", .0.join(", "))]
    InvalidIntent(Vec<String>),
}

impl ResolveError {
    /// True when the caller supplied bad input, as opposed to an upstream failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ResolveError::EmptyPrompt | ResolveError::InvalidIntent(_))
    }
}

/// Resolves prompts and intents against a shared catalog.
pub struct IntentResolver<S> {
    source: S,
    catalog: Arc<dyn DatasetCatalog>,
    executor: QueryExecutor,
}

impl<S: IntentSource> IntentResolver<S> {
    pub fn new(source: S, catalog: Arc<dyn DatasetCatalog>) -> Self {
        Self {
            source,
            catalog,
            executor: QueryExecutor::new(),
        }
    }

    pub fn catalog(&self) -> &dyn DatasetCatalog {
        self.catalog.as_ref()
    }

    /// Resolve a free-text prompt into chart data.
    pub async fn resolve(&self, prompt: &str) -> Result<ChartResponse, ResolveError> {
        let prompt = sanitize_prompt(prompt);
        if prompt.is_empty() {
            return Err(ResolveError::EmptyPrompt);
        }

        let context = IntentContext::from_catalog(self.catalog.as_ref());
        let intent = self
            .source
            .generate_intent(&prompt, &context)
            .await
            .inspect_err(|e| error!("intent generation failed: {}", e))?;

        self.resolve_intent(intent)
    }

    /// Resolve an already structured intent into chart data.
    pub fn resolve_intent(&self, mut intent: ChartIntent) -> Result<ChartResponse, ResolveError> {
        let span = info_span!("resolve", dataset = %intent.dataset, chart_type = %intent.chart_type);
        let _guard = span.enter();

        normalize_intent(&mut intent);

        let errors = validate_intent(&intent);
        if !errors.is_empty() {
            return Err(ResolveError::InvalidIntent(errors));
        }

        let records = self.catalog.records(&intent.dataset);
        let mut data = self.executor.execute(records, &intent);
        apply_sort_and_limit(&mut data, &intent);

        let chart_spec = build_chart_spec(&intent);

        info!(
            records = records.len(),
            labels = data.labels.len(),
            series = data.datasets.len(),
            "resolved chart"
        );

        Ok(ChartResponse {
            chart_spec,
            metadata: ResponseMetadata {
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                dataset: intent.dataset,
                record_count: data.labels.len(),
            },
            data,
        })
    }
}
