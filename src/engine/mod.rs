//! The resolution engine: grouping, aggregation, ordering and chart spec.
//!
//! Everything in here is synchronous and pure. Given the same records and
//! intent, every function returns identical output.

pub mod executor;
pub mod ordering;
pub mod palette;
pub mod spec;

pub use executor::{aggregate, group_records, Groups, QueryExecutor, UNKNOWN_GROUP};
pub use ordering::{apply_sort_and_limit, SortKey};
pub use palette::{ColorPair, BORDER_COLORS, BORDER_WIDTH, FILL_COLORS, PALETTE_SIZE};
pub use spec::build_chart_spec;
