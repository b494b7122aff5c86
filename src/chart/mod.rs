//! Chart Data
//!
//! Pure chart-side data model: series transforms and the per-widget entry
//! model. Canvas drawing lives with the widget components.

pub mod model;
pub mod series;

pub use model::ChartModel;
pub use series::{daily_entries, day_offset, line_entries, DataPoint, Entry, DAILY_BUCKETS};
