// src/engine/executor.rs
//! Groups records by the intent's dimension and aggregates each metric.

use std::collections::HashMap;
use tracing::debug;

use super::palette::{self, BORDER_WIDTH};
use crate::model::{Aggregation, ChartData, ChartIntent, Record, Series};

/// Label given to records that lack the grouping field.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Label of the single series produced when there is no dimension.
pub const UNGROUPED_SERIES_LABEL: &str = "Value";

/// Records partitioned by a dimension, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Groups<'a> {
    pub labels: Vec<String>,
    pub members: Vec<Vec<&'a Record>>,
}

impl<'a> Groups<'a> {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Partition `records` by the stringified value of `field`.
///
/// Records without the field land in the [`UNKNOWN_GROUP`] group. Group order
/// is the order in which each key first appears.
pub fn group_records<'a>(records: &'a [Record], field: &str) -> Groups<'a> {
    let mut labels: Vec<String> = Vec::new();
    let mut members: Vec<Vec<&'a Record>> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record
            .get(field)
            .map(|value| value.to_string())
            .unwrap_or_else(|| UNKNOWN_GROUP.to_string());

        match slots.get(&key) {
            Some(&slot) => members[slot].push(record),
            None => {
                slots.insert(key.clone(), labels.len());
                labels.push(key);
                members.push(vec![record]);
            }
        }
    }

    Groups { labels, members }
}

/// Reduce the numeric values of `field` across `records`.
///
/// Missing and non-numeric values are excluded. Every kind yields 0 when no
/// numeric value is present.
pub fn aggregate<'a, I>(records: I, field: &str, kind: Aggregation) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    let values: Vec<f64> = records
        .into_iter()
        .filter_map(|record| record.number(field))
        .collect();

    if values.is_empty() {
        return 0.0;
    }

    match kind {
        Aggregation::Sum => values.iter().sum(),
        Aggregation::Avg => values.iter().sum::<f64>() / values.len() as f64,
        Aggregation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Aggregation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Aggregation::Count => values.len() as f64,
    }
}

/// Stateless executor turning (records, intent) into chart data.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExecutor;

impl QueryExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Group and aggregate `records` as described by `intent`.
    ///
    /// Filters on the intent are not applied. Only the first dimension is
    /// used for grouping.
    pub fn execute(&self, records: &[Record], intent: &ChartIntent) -> ChartData {
        if !intent.filters.is_empty() {
            debug!(
                dataset = %intent.dataset,
                filters = intent.filters.len(),
                "filters are not applied by the executor"
            );
        }
        if intent.dimensions.len() > 1 {
            debug!(
                dataset = %intent.dataset,
                ignored = intent.dimensions.len() - 1,
                "only the first dimension is used for grouping"
            );
        }

        match intent.grouping() {
            None => self.execute_ungrouped(records, intent),
            Some(dimension) => self.execute_grouped(records, intent, &dimension.field),
        }
    }

    fn execute_ungrouped(&self, records: &[Record], intent: &ChartIntent) -> ChartData {
        let labels: Vec<String> = intent.metrics.iter().map(|m| m.display_label()).collect();
        let values: Vec<f64> = intent
            .metrics
            .iter()
            .map(|m| aggregate(records, &m.field, m.kind()))
            .collect();

        let colors = palette::sequence(values.len());

        ChartData {
            labels,
            datasets: vec![Series {
                label: UNGROUPED_SERIES_LABEL.to_string(),
                data: values,
                background_color: colors.fill,
                border_color: colors.border,
                border_width: BORDER_WIDTH,
            }],
        }
    }

    fn execute_grouped(&self, records: &[Record], intent: &ChartIntent, field: &str) -> ChartData {
        let groups = group_records(records, field);
        debug!(dimension = field, groups = groups.len(), "grouped records");

        let radial = intent.is_radial();

        let datasets = intent
            .metrics
            .iter()
            .enumerate()
            .map(|(index, metric)| {
                let kind = metric.kind();
                let data = groups
                    .members
                    .iter()
                    .map(|group| aggregate(group.iter().copied(), &metric.field, kind))
                    .collect();

                let colors = if radial {
                    palette::sequence(groups.len())
                } else {
                    palette::cycled(index)
                };

                Series {
                    label: metric.display_label(),
                    data,
                    background_color: colors.fill,
                    border_color: colors.border,
                    border_width: BORDER_WIDTH,
                }
            })
            .collect();

        ChartData {
            labels: groups.labels,
            datasets,
        }
    }
}
