//! Data model and derived views for sensor time-series.
//!
//! This module holds the entities the reader mutates and the pure
//! computations the UI consumes.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "2s", "5m")
//! - [`sensors`]: Core data model ([`Sensor`], [`Reading`], [`SensorInfo`])
//! - [`stats`]: Summary statistics, threshold classification, trend direction
//! - [`units`]: Unit grouping for chart axes and deterministic colors
//!
//! ## Data Flow
//!
//! ```text
//! log rows (reader)
//!        │
//!        ▼
//! Sensor::push() ──▶ retained readings (window-pruned)
//!        │
//!        ├──▶ StatsCalculator::compute() ──▶ SensorStats
//!        │
//!        └──▶ units::create_sensor_groups() ──▶ SensorGroup per unit
//! ```

pub mod duration;
pub mod sensors;
pub mod stats;
pub mod units;

pub use sensors::{Reading, Sensor, SensorGroup, SensorInfo};
pub use stats::{
    Classification, SensorStats, StatsCalculator, ThresholdConfig, ThresholdLevels, Trend,
};
pub use units::{
    assign_colors, create_sensor_groups, select_for_dual_axis, Rgb, DEFAULT_PALETTE,
    MAX_AXIS_GROUPS,
};
