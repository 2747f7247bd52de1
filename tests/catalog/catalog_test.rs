use promptchart::catalog::{CatalogError, Dataset, DatasetCatalog, InMemoryCatalog};
use promptchart::model::{FieldValue, Record};
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG_JSON: &str = r#"{
    "datasets": [
        {
            "name": "tickets",
            "metrics": ["opened", "closed"],
            "dimensions": ["team", "week"],
            "records": [
                {"team": "Core", "week": 1, "opened": 12, "closed": 9},
                {"team": "Web", "week": 1, "opened": 7, "closed": 7}
            ]
        },
        {
            "name": "deploys",
            "metrics": ["count"],
            "dimensions": ["service"]
        }
    ]
}"#;

#[test]
fn test_sample_catalog_describes_all_datasets() {
    let catalog = InMemoryCatalog::sample().unwrap();
    let summaries = catalog.summaries();

    assert_eq!(summaries.len(), 5);
    assert_eq!(summaries[0].name, "sales");
    assert_eq!(summaries[0].metrics, vec!["amount", "quantity", "revenue"]);
    assert_eq!(
        summaries[0].dimensions,
        vec!["month", "quarter", "year", "region", "category"]
    );
    assert_eq!(summaries[4].name, "inventory");
}

#[test]
fn test_sample_records_match_declared_fields() {
    let catalog = InMemoryCatalog::sample().unwrap();

    for name in catalog.list_datasets() {
        for record in catalog.records(&name) {
            for metric in catalog.list_metrics(&name) {
                assert!(
                    record.number(metric).is_some(),
                    "{}.{} should be numeric",
                    name,
                    metric
                );
            }
        }
    }
}

#[test]
fn test_from_json() {
    let catalog = InMemoryCatalog::from_json(CATALOG_JSON).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.list_datasets(), vec!["tickets", "deploys"]);
    assert_eq!(catalog.list_dimensions("tickets"), &["team", "week"]);

    let records = catalog.records("tickets");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("team"), Some(&FieldValue::Text("Core".into())));
    assert_eq!(records[1].number("closed"), Some(7.0));

    assert!(catalog.records("deploys").is_empty());
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = InMemoryCatalog::from_file(file.path()).unwrap();

    assert!(catalog.dataset("tickets").is_some());
    assert!(catalog.dataset("sales").is_none());
}

#[test]
fn test_from_file_missing() {
    let result = InMemoryCatalog::from_file("/no/such/catalog.json");
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}

#[test]
fn test_from_json_rejects_nested_values() {
    let json = r#"{"datasets": [{"name": "x", "records": [{"a": {"b": 1}}]}]}"#;
    assert!(matches!(
        InMemoryCatalog::from_json(json),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_duplicate_names_rejected() {
    let json = r#"{"datasets": [{"name": "x"}, {"name": "x"}]}"#;
    assert!(matches!(
        InMemoryCatalog::from_json(json),
        Err(CatalogError::DuplicateDataset(name)) if name == "x"
    ));
}

#[test]
fn test_catalog_is_shareable() {
    let dataset = Dataset::new("t")
        .with_metrics(&["v"])
        .with_dimensions(&["k"])
        .with_records(vec![Record::new().with("k", "a").with("v", 1.0)]);
    let catalog: std::sync::Arc<dyn DatasetCatalog> =
        std::sync::Arc::new(InMemoryCatalog::new(vec![dataset]).unwrap());

    let handle = {
        let catalog = catalog.clone();
        std::thread::spawn(move || catalog.records("t").len())
    };

    assert_eq!(handle.join().unwrap(), 1);
    assert_eq!(catalog.list_metrics("t"), &["v"]);
}
