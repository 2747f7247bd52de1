//! # promptchart
//!
//! Turns natural-language chart requests into chart-ready data.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Prompt (free text)                      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [intent source]
//! ┌─────────────────────────────────────────────────────────┐
//! │                    ChartIntent                           │
//! │  (dataset, metrics, dimensions, chart type, title)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [normalize + validate]
//! ┌─────────────────────────────────────────────────────────┐
//! │            Query Executor (group + aggregate)            │
//! │            over records from the Dataset Catalog         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sort/limit, chart spec builder]
//! ┌─────────────────────────────────────────────────────────┐
//! │     ChartResponse (chartSpec + data + metadata)          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod intent;
pub mod logging;
pub mod model;
pub mod resolver;

#[cfg(feature = "server")]
pub mod web;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{Dataset, DatasetCatalog, InMemoryCatalog};
    pub use crate::engine::{apply_sort_and_limit, build_chart_spec, QueryExecutor};
    pub use crate::intent::{IntentSource, OpenAiIntentSource, StaticIntentSource};
    pub use crate::model::{
        ChartData, ChartIntent, ChartResponse, ChartSpec, ColorField, Dimension, FieldValue,
        Metric, Record, Series,
    };
    pub use crate::resolver::{IntentResolver, ResolveError};
}

// Also export at crate root for convenience
pub use catalog::{DatasetCatalog, InMemoryCatalog};
pub use model::{ChartData, ChartIntent, ChartResponse, ChartSpec};
pub use resolver::{IntentResolver, ResolveError};
