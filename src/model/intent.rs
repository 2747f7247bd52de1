// src/model/intent.rs
//! Chart intent types - the structured query a prompt is resolved into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart types offered to the intent source.
pub const AVAILABLE_CHART_TYPES: &[&str] = &["bar", "line", "pie", "doughnut", "area", "scatter"];

/// How a metric's values are reduced within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl Aggregation {
    /// Parse an aggregation kind. Unrecognized kinds reduce as `Sum`.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "avg" => Aggregation::Avg,
            "min" => Aggregation::Min,
            "max" => Aggregation::Max,
            "count" => Aggregation::Count,
            _ => Aggregation::Sum,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Count => "count",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric field plus the aggregation that reduces it.
///
/// The aggregation is kept exactly as supplied so that derived labels
/// reflect what was asked for, even when the kind is unrecognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub field: String,
    pub aggregation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Metric {
    pub fn new(field: &str, aggregation: &str) -> Self {
        Self {
            field: field.into(),
            aggregation: aggregation.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> Aggregation {
        Aggregation::parse(&self.aggregation)
    }

    /// Explicit label, else `"{aggregation}({field})"`.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}({})", self.aggregation, self.field),
        }
    }
}

/// A field used to partition records into groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

impl Dimension {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.into(),
            granularity: None,
        }
    }

    pub fn with_granularity(mut self, granularity: &str) -> Self {
        self.granularity = Some(granularity.into());
        self
    }
}

/// A filter condition. Carried on the intent but not applied by the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Direction for post-aggregation sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The structured query description driving aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartIntent {
    pub dataset: String,
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    pub chart_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Kept as text so an unknown direction surfaces as a validation error
    /// instead of a deserialization failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl ChartIntent {
    pub fn new(dataset: &str, chart_type: &str) -> Self {
        Self {
            dataset: dataset.into(),
            metrics: Vec::new(),
            dimensions: Vec::new(),
            filters: Vec::new(),
            chart_type: chart_type.into(),
            title: None,
            sort_by: None,
            sort_order: None,
            limit: None,
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimensions.push(dimension);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The grouping dimension. Only the first dimension is honored.
    pub fn grouping(&self) -> Option<&Dimension> {
        self.dimensions.first()
    }

    /// Pie and doughnut charts color per slice rather than per series.
    pub fn is_radial(&self) -> bool {
        matches!(self.chart_type.as_str(), "pie" | "doughnut")
    }

    /// Parsed sort direction; defaults to descending.
    pub fn sort_direction(&self) -> SortOrder {
        match self.sort_order.as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}
