//! Statistics rollups for downstream presentation.

pub mod aggregate;

pub use aggregate::{GroupStats, Rollups, StatsConfig, Totals, aggregate, is_delayed, is_warning};
