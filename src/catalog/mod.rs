//! Dataset catalog.
//!
//! The catalog maps dataset names to their records and to the fields usable
//! as metrics or dimensions. It is built once at start-up and never mutated,
//! so it can be shared across concurrent requests without locking.
//!
//! Lookups are total: an unknown dataset name yields empty results rather
//! than an error, because downstream aggregation is defined over empty input.

mod sample;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Record;

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate dataset: {0}")]
    DuplicateDataset(String),
}

/// A named set of records plus the fields that can be measured or grouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            metrics: Vec::new(),
            dimensions: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: &[&str]) -> Self {
        self.metrics = metrics.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_dimensions(mut self, dimensions: &[&str]) -> Self {
        self.dimensions = dimensions.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }
}

/// Name and field lists of a dataset, without its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub name: String,
    pub metrics: Vec<String>,
    pub dimensions: Vec<String>,
}

/// Read-only access to datasets.
pub trait DatasetCatalog: Send + Sync {
    /// Dataset names in declaration order.
    fn list_datasets(&self) -> Vec<String>;

    /// Metric fields of `dataset`; empty if unknown.
    fn list_metrics(&self, dataset: &str) -> &[String];

    /// Dimension fields of `dataset`; empty if unknown.
    fn list_dimensions(&self, dataset: &str) -> &[String];

    /// Records of `dataset`; empty if unknown.
    fn records(&self, dataset: &str) -> &[Record];

    /// Summaries of every dataset, in declaration order.
    fn summaries(&self) -> Vec<DatasetSummary> {
        self.list_datasets()
            .into_iter()
            .map(|name| DatasetSummary {
                metrics: self.list_metrics(&name).to_vec(),
                dimensions: self.list_dimensions(&name).to_vec(),
                name,
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    datasets: Vec<Dataset>,
}

/// Catalog backed by datasets held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    datasets: Vec<Dataset>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from datasets. Names must be unique.
    pub fn new(datasets: Vec<Dataset>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(datasets.len());
        for (position, dataset) in datasets.iter().enumerate() {
            if index.insert(dataset.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateDataset(dataset.name.clone()));
            }
        }
        Ok(Self { datasets, index })
    }

    /// The built-in demo catalog (sales, users, products, orders, inventory).
    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample::datasets())
    }

    /// Parse a catalog from JSON: `{"datasets": [{name, metrics, dimensions, records}]}`.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.datasets)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.index.get(name).map(|&position| &self.datasets[position])
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl DatasetCatalog for InMemoryCatalog {
    fn list_datasets(&self) -> Vec<String> {
        self.datasets.iter().map(|d| d.name.clone()).collect()
    }

    fn list_metrics(&self, dataset: &str) -> &[String] {
        self.dataset(dataset)
            .map(|d| d.metrics.as_slice())
            .unwrap_or(&[])
    }

    fn list_dimensions(&self, dataset: &str) -> &[String] {
        self.dataset(dataset)
            .map(|d| d.dimensions.as_slice())
            .unwrap_or(&[])
    }

    fn records(&self, dataset: &str) -> &[Record] {
        self.dataset(dataset)
            .map(|d| d.records.as_slice())
            .unwrap_or(&[])
    }
}
