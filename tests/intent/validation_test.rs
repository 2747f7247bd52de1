use promptchart::catalog::InMemoryCatalog;
use promptchart::intent::{
    normalize_intent, sanitize_prompt, validate_intent, IntentContext, IntentSource,
    StaticIntentSource, MAX_LIMIT,
};
use promptchart::model::{ChartIntent, Dimension, Metric};

fn valid_intent() -> ChartIntent {
    ChartIntent::new("sales", "bar")
        .with_metric(Metric::new("amount", "sum"))
        .with_dimension(Dimension::new("region"))
}

#[test]
fn test_valid_intent_has_no_errors() {
    assert!(validate_intent(&valid_intent()).is_empty());
}

#[test]
fn test_unknown_dataset_is_not_a_validation_error() {
    let mut intent = valid_intent();
    intent.dataset = "does_not_exist".into();
    assert!(validate_intent(&intent).is_empty());
}

#[test]
fn test_collects_every_error() {
    let mut intent = ChartIntent::new("", "");
    intent.dimensions.push(Dimension::new(""));

    let errors = validate_intent(&intent);

    assert_eq!(
        errors,
        vec![
            "dataset: must not be empty",
            "metrics: must contain at least one metric",
            "dimensions[0].field: must not be empty",
            "chartType: must not be empty",
        ]
    );
}

#[test]
fn test_limit_bounds() {
    let mut intent = valid_intent();

    intent.limit = Some(1);
    assert!(validate_intent(&intent).is_empty());

    intent.limit = Some(MAX_LIMIT);
    assert!(validate_intent(&intent).is_empty());

    intent.limit = Some(0);
    assert_eq!(validate_intent(&intent), vec!["limit: must be between 1 and 100"]);

    intent.limit = Some(MAX_LIMIT + 1);
    assert_eq!(validate_intent(&intent).len(), 1);
}

#[test]
fn test_sort_order_must_be_known() {
    let mut intent = valid_intent();
    intent.sort_order = Some("sideways".into());

    let errors = validate_intent(&intent);

    assert_eq!(errors, vec!["sortOrder: must be 'asc' or 'desc', got 'sideways'"]);
}

#[test]
fn test_intent_from_model_json() {
    let json = r#"{
        "dataset": "sales",
        "metrics": [{"field": "amount", "aggregation": "sum", "label": "Revenue"}],
        "dimensions": [{"field": "month", "granularity": "Monthly"}],
        "filters": [{"field": "region", "operator": "eq", "value": "North"}],
        "chartType": "line",
        "title": "Monthly revenue",
        "sortBy": "label",
        "sortOrder": "asc",
        "limit": 12
    }"#;

    let mut intent: ChartIntent = serde_json::from_str(json).unwrap();
    normalize_intent(&mut intent);

    assert_eq!(intent.dimensions[0].granularity.as_deref(), Some("month"));
    assert_eq!(intent.filters.len(), 1);
    assert_eq!(intent.limit, Some(12));
    assert!(validate_intent(&intent).is_empty());
}

#[test]
fn test_unknown_granularity_is_dropped() {
    let mut intent = ChartIntent::new("sales", "line")
        .with_metric(Metric::new("amount", "sum"))
        .with_dimension(Dimension::new("month").with_granularity("fortnight"));

    normalize_intent(&mut intent);

    assert_eq!(intent.dimensions[0].granularity, None);
}

#[test]
fn test_sanitize_prompt_removes_markup() {
    assert_eq!(
        sanitize_prompt("<script>alert(1)</script> show {sales}"),
        "alert(1) show sales"
    );
    assert_eq!(sanitize_prompt("   "), "");
}

#[tokio::test]
async fn test_static_source_returns_its_intent() {
    let catalog = InMemoryCatalog::sample().unwrap();
    let context = IntentContext::from_catalog(&catalog);
    let source = StaticIntentSource::new(valid_intent());

    let intent = source.generate_intent("anything", &context).await.unwrap();

    assert_eq!(intent, valid_intent());
    assert_eq!(context.datasets.len(), 5);
}
