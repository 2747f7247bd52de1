// src/engine/ordering.rs
//! Post-aggregation sorting and truncation.
//!
//! Runs after the executor so group order out of the executor is always
//! first-appearance order; callers opt in through `sortBy` and `limit`.

use std::cmp::Ordering;

use crate::model::{ChartData, ChartIntent, ColorField, SortOrder};

/// Sort key accepted in `sortBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on the labels.
    Label,
    /// Numeric on the first series' values.
    Value,
}

impl SortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "label" => Some(SortKey::Label),
            "value" => Some(SortKey::Value),
            _ => None,
        }
    }
}

/// Apply the intent's `sortBy`/`sortOrder` and `limit` to `data`.
///
/// Labels, every series' values and per-point color sequences are permuted
/// together. An unrecognized sort key leaves the order unchanged. A limit
/// below 1 is ignored.
pub fn apply_sort_and_limit(data: &mut ChartData, intent: &ChartIntent) {
    if let Some(key) = intent.sort_by.as_deref().and_then(SortKey::parse) {
        let order = sort_permutation(data, key, intent.sort_direction());
        permute(data, &order);
    }

    if let Some(limit) = intent.limit.filter(|&l| l >= 1) {
        truncate(data, limit as usize);
    }
}

fn sort_permutation(data: &ChartData, key: SortKey, direction: SortOrder) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.labels.len()).collect();
    let first_series = data.datasets.first().map(|s| s.data.as_slice());

    order.sort_by(|&a, &b| {
        let ordering = match key {
            SortKey::Label => data.labels[a].cmp(&data.labels[b]),
            SortKey::Value => match first_series {
                Some(values) => values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal),
                None => Ordering::Equal,
            },
        };
        match direction {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    order
}

fn permute(data: &mut ChartData, order: &[usize]) {
    data.labels = order.iter().map(|&i| data.labels[i].clone()).collect();

    for series in &mut data.datasets {
        series.data = order.iter().map(|&i| series.data[i]).collect();
        permute_colors(&mut series.background_color, order);
        permute_colors(&mut series.border_color, order);
    }
}

/// Colors stay with their points. The sequence ends at the first point
/// that has no color, so no color lands on another point's position.
fn permute_colors(colors: &mut ColorField, order: &[usize]) {
    if let ColorField::Sequence(sequence) = colors {
        let permuted: Vec<String> = order
            .iter()
            .map_while(|&i| sequence.get(i).cloned())
            .collect();
        *sequence = permuted;
    }
}

fn truncate(data: &mut ChartData, limit: usize) {
    data.labels.truncate(limit);
    for series in &mut data.datasets {
        series.data.truncate(limit);
        if let ColorField::Sequence(colors) = &mut series.background_color {
            colors.truncate(limit);
        }
        if let ColorField::Sequence(colors) = &mut series.border_color {
            colors.truncate(limit);
        }
    }
}
