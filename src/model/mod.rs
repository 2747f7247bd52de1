//! Data model: records, chart intents, and chart output types.

pub mod chart;
pub mod intent;
pub mod record;

pub use chart::{
    AxisSpec, ChartData, ChartResponse, ChartSpec, ColorField, LegendSpec, ResponseMetadata,
    Series,
};
pub use intent::{
    Aggregation, ChartIntent, Dimension, Filter, Metric, SortOrder, AVAILABLE_CHART_TYPES,
};
pub use record::{FieldValue, Record};
