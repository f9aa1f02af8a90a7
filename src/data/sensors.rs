//! Core sensor data model: identities, readings, and the retained series.
//!
//! Log column headers follow the `"Label [Unit]"` convention. The bracketed
//! suffix, when present, is the authoritative unit; the unit `"Yes/No"`
//! marks a boolean-valued sensor encoded as 1.0/0.0.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

/// One timestamped sample for a sensor. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// A sensor identity parsed from a log column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorInfo {
    /// Full identity as written in the header, e.g. `"CPU Package [°C]"`.
    pub name: String,
    /// Human label with any unit suffix removed.
    pub label: String,
    /// Declared unit, if the header carried a bracketed suffix.
    pub unit: Option<String>,
}

impl SensorInfo {
    /// Parse a header column name into its label/unit parts.
    ///
    /// Only a trailing `[...]` counts as a unit; brackets elsewhere in the
    /// name are part of the label.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.ends_with(']') {
            if let Some(open) = name.rfind('[') {
                let label = name[..open].trim_end();
                let unit = &name[open + 1..name.len() - 1];
                if !label.is_empty() && !unit.is_empty() {
                    return Self {
                        name: name.to_string(),
                        label: label.to_string(),
                        unit: Some(unit.to_string()),
                    };
                }
            }
        }
        Self {
            name: name.to_string(),
            label: name.to_string(),
            unit: None,
        }
    }

    /// Whether cells in this column hold the literal `Yes`/`No` tokens.
    pub fn is_boolean(&self) -> bool {
        self.unit.as_deref() == Some("Yes/No")
    }
}

/// A subscribed sensor and its retained time-series.
///
/// Readings are ordered by arrival. Timestamps are monotonic non-decreasing
/// under normal operation, but out-of-order or duplicate timestamps are
/// tolerated and kept as independent points. Mutated only by the reader
/// (append) and by retention pruning; cleared only on an explicit reset.
#[derive(Debug, Clone)]
pub struct Sensor {
    pub info: SensorInfo,
    readings: VecDeque<Reading>,
}

impl Sensor {
    pub fn new(info: SensorInfo) -> Self {
        Self {
            info,
            readings: VecDeque::new(),
        }
    }

    /// Append one reading in arrival order.
    pub fn push(&mut self, reading: Reading) {
        self.readings.push_back(reading);
    }

    /// Drop every reading with a timestamp before `cutoff`.
    pub fn prune_before(&mut self, cutoff: NaiveDateTime) {
        self.readings.retain(|r| r.timestamp >= cutoff);
    }

    /// Readings in arrival order.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Values in arrival order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|r| r.value)
    }

    /// The most recently appended reading.
    pub fn last_reading(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Newest timestamp held by this sensor (max, not last, so a late
    /// out-of-order append cannot move time backwards).
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.readings.iter().map(|r| r.timestamp).max()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Remove all readings. Identity and unit are untouched.
    pub fn clear(&mut self) {
        self.readings.clear();
    }
}

/// Sensors sharing one unit, selected together for a chart axis.
///
/// Derived on demand by the grouping functions in [`super::units`]; never
/// stored independently of the sensor set it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorGroup {
    pub unit: Option<String>,
    /// Member identities in lexicographic order.
    pub sensors: Vec<String>,
}
