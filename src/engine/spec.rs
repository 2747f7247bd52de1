// src/engine/spec.rs
//! Derives title, axes and legend for a chart from its intent.

use crate::model::{AxisSpec, ChartIntent, ChartSpec, LegendSpec};

/// Stand-in label when an intent arrives with no metrics.
const FALLBACK_METRIC_LABEL: &str = "value";

/// Build the rendering hints for `intent`.
pub fn build_chart_spec(intent: &ChartIntent) -> ChartSpec {
    let metric_label = intent
        .metrics
        .first()
        .map(|m| m.display_label())
        .unwrap_or_else(|| FALLBACK_METRIC_LABEL.to_string());

    let dimension = intent.grouping();

    let title = match (&intent.title, dimension) {
        (Some(title), _) => title.clone(),
        (None, Some(dim)) => format!("{} by {}", metric_label, dim.field),
        (None, None) => metric_label.clone(),
    };

    ChartSpec {
        chart_type: intent.chart_type.clone(),
        title,
        x_axis: dimension.map(|dim| AxisSpec {
            label: dim.field.clone(),
            kind: "category".to_string(),
        }),
        y_axis: AxisSpec {
            label: metric_label,
            kind: "linear".to_string(),
        },
        legend: LegendSpec {
            position: "top".to_string(),
            display: intent.metrics.len() > 1 || intent.is_radial(),
        },
    }
}
