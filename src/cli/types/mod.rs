//! Type-safe wrappers and enums for season data.

pub mod metric;
pub mod year;

pub use metric::Metric;
pub use year::Year;
