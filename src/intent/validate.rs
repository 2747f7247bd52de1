// src/intent/validate.rs
//! Structural checks on an intent before it reaches the executor.
//!
//! Unknown datasets and fields are not errors here; the executor degrades
//! them to empty results. This only rejects intents that are malformed.

use crate::model::ChartIntent;

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Collect every structural problem with `intent`. Empty means valid.
pub fn validate_intent(intent: &ChartIntent) -> Vec<String> {
    let mut errors = Vec::new();

    if intent.dataset.trim().is_empty() {
        errors.push("dataset: must not be empty".to_string());
    }

    if intent.metrics.is_empty() {
        errors.push("metrics: must contain at least one metric".to_string());
    }
    for (i, metric) in intent.metrics.iter().enumerate() {
        if metric.field.trim().is_empty() {
            errors.push(format!("metrics[{}].field: must not be empty", i));
        }
    }

    for (i, dimension) in intent.dimensions.iter().enumerate() {
        if dimension.field.trim().is_empty() {
            errors.push(format!("dimensions[{}].field: must not be empty", i));
        }
    }

    if intent.chart_type.trim().is_empty() {
        errors.push("chartType: must not be empty".to_string());
    }

    if let Some(limit) = intent.limit {
        if !(1..=MAX_LIMIT).contains(&limit) {
            errors.push(format!("limit: must be between 1 and {}", MAX_LIMIT));
        }
    }

    if let Some(order) = intent.sort_order.as_deref() {
        if order != "asc" && order != "desc" {
            errors.push(format!("sortOrder: must be 'asc' or 'desc', got '{}'", order));
        }
    }

    errors
}
