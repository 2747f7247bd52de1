// src/model/chart.rs
//! Chart output types. Field names follow Chart.js so the data can be handed
//! to a renderer unchanged.

use serde::{Deserialize, Serialize};

/// Color assignment for a series: one color for the whole series, or one
/// color per data point (slice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorField {
    Single(String),
    Sequence(Vec<String>),
}

impl ColorField {
    pub fn len(&self) -> usize {
        match self {
            ColorField::Single(_) => 1,
            ColorField::Sequence(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, ColorField::Sequence(_))
    }
}

/// One labeled sequence of aggregated values plus its presentation colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorField,
    pub border_color: ColorField,
    pub border_width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub position: String,
    pub display: bool,
}

/// Rendering hints derived from the intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisSpec>,
    pub y_axis: AxisSpec,
    pub legend: LegendSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    pub dataset: String,
    /// Number of labels in the returned data.
    pub record_count: usize,
}

/// What the resolver hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub chart_spec: ChartSpec,
    pub data: ChartData,
    pub metadata: ResponseMetadata,
}
