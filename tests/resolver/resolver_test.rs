use async_trait::async_trait;
use promptchart::catalog::{DatasetCatalog, InMemoryCatalog};
use promptchart::intent::{IntentContext, IntentError, IntentSource, StaticIntentSource};
use promptchart::model::{ChartIntent, ColorField, Dimension, Metric};
use promptchart::resolver::{IntentResolver, ResolveError};
use std::sync::{Arc, Mutex};

fn catalog() -> Arc<dyn DatasetCatalog> {
    Arc::new(InMemoryCatalog::sample().unwrap())
}

fn revenue_by_region() -> ChartIntent {
    ChartIntent::new("sales", "bar")
        .with_metric(Metric::new("amount", "sum").with_label("Revenue"))
        .with_dimension(Dimension::new("region"))
}

/// Records the prompt and context it was called with.
struct RecordingSource {
    intent: ChartIntent,
    seen: Mutex<Vec<(String, IntentContext)>>,
}

#[async_trait]
impl IntentSource for RecordingSource {
    async fn generate_intent(
        &self,
        prompt: &str,
        context: &IntentContext,
    ) -> Result<ChartIntent, IntentError> {
        self.seen
            .lock()
            .unwrap()
            .push((prompt.to_string(), context.clone()));
        Ok(self.intent.clone())
    }
}

struct FailingSource;

#[async_trait]
impl IntentSource for FailingSource {
    async fn generate_intent(
        &self,
        _prompt: &str,
        _context: &IntentContext,
    ) -> Result<ChartIntent, IntentError> {
        Err(IntentError::Status {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

#[tokio::test]
async fn test_resolve_end_to_end() {
    let resolver = IntentResolver::new(StaticIntentSource::new(revenue_by_region()), catalog());

    let response = resolver.resolve("revenue by region").await.unwrap();

    assert_eq!(response.chart_spec.chart_type, "bar");
    assert_eq!(response.chart_spec.title, "Revenue by region");
    assert_eq!(response.data.labels, vec!["North", "South"]);
    assert_eq!(response.data.datasets[0].data, vec![145000.0, 123000.0]);
    assert_eq!(response.metadata.dataset, "sales");
    assert_eq!(response.metadata.record_count, 2);
    assert!(response.metadata.generated_at.ends_with('Z'));
}

#[tokio::test]
async fn test_source_sees_sanitized_prompt_and_catalog() {
    let source = Arc::new(RecordingSource {
        intent: revenue_by_region(),
        seen: Mutex::new(Vec::new()),
    });
    let resolver = IntentResolver::new(source.clone(), catalog());

    resolver.resolve("  <i>revenue</i> by {region} ").await.unwrap();

    let seen = source.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "revenue by region");
    assert_eq!(seen[0].1.datasets.len(), 5);
    assert!(seen[0].1.chart_types.contains(&"doughnut".to_string()));
}

#[tokio::test]
async fn test_empty_prompt_never_reaches_source() {
    let source = Arc::new(RecordingSource {
        intent: revenue_by_region(),
        seen: Mutex::new(Vec::new()),
    });
    let resolver = IntentResolver::new(source.clone(), catalog());

    let result = resolver.resolve("<br/>{}   ").await;

    assert!(matches!(result, Err(ResolveError::EmptyPrompt)));
    assert!(source.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_source_failure_propagates() {
    let resolver = IntentResolver::new(FailingSource, catalog());

    let err = resolver.resolve("revenue by region").await.unwrap_err();

    assert!(matches!(
        err,
        ResolveError::IntentSource(IntentError::Status { status: 503, .. })
    ));
    assert!(!err.is_client_error());
}

#[test]
fn test_invalid_intent_rejected() {
    let resolver = IntentResolver::new(FailingSource, catalog());
    let mut intent = revenue_by_region();
    intent.metrics.clear();
    intent.limit = Some(500);

    let err = resolver.resolve_intent(intent).unwrap_err();

    match &err {
        ResolveError::InvalidIntent(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected InvalidIntent, got {:?}", other),
    }
    assert!(err.is_client_error());
}

#[test]
fn test_unknown_dataset_resolves_empty() {
    let resolver = IntentResolver::new(FailingSource, catalog());
    let mut intent = revenue_by_region();
    intent.dataset = "weather".into();

    let response = resolver.resolve_intent(intent).unwrap();

    assert!(response.data.labels.is_empty());
    assert_eq!(response.metadata.record_count, 0);
    assert_eq!(response.metadata.dataset, "weather");
}

#[test]
fn test_sort_and_limit_applied() {
    let resolver = IntentResolver::new(FailingSource, catalog());
    let mut intent = ChartIntent::new("inventory", "pie")
        .with_metric(Metric::new("quantity", "sum"))
        .with_dimension(Dimension::new("product"));
    intent.sort_by = Some("value".into());
    intent.limit = Some(2);

    let response = resolver.resolve_intent(intent).unwrap();

    assert_eq!(response.data.labels, vec!["Wireless Mouse", "Laptop Pro"]);
    assert_eq!(response.data.datasets[0].data, vec![580.0, 125.0]);
    assert_eq!(response.metadata.record_count, 2);
    assert!(matches!(
        &response.data.datasets[0].background_color,
        ColorField::Sequence(colors) if colors.len() == 2
    ));
}

#[test]
fn test_response_serializes_with_wire_names() {
    let resolver = IntentResolver::new(FailingSource, catalog());

    let response = resolver.resolve_intent(revenue_by_region()).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["chartSpec"]["type"], "bar");
    assert_eq!(json["chartSpec"]["xAxis"]["type"], "category");
    assert_eq!(json["data"]["datasets"][0]["borderWidth"], 1);
    assert_eq!(json["metadata"]["recordCount"], 2);
    assert!(json["metadata"]["generatedAt"].is_string());
}
