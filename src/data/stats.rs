//! Summary statistics, threshold classification, and trend direction.
//!
//! Everything here is a pure function of the sensor readings and the
//! immutable threshold configuration: identical inputs always produce
//! identical outputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::sensors::Sensor;

/// Warning/critical bounds for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThresholdLevels {
    pub warning: f64,
    pub critical: f64,
}

/// Classification thresholds keyed by unit string.
///
/// Loaded from the optional thresholds file; units without an entry always
/// classify as [`Classification::Normal`].
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub thresholds: BTreeMap<String, ThresholdLevels>,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let mut thresholds = BTreeMap::new();
        thresholds.insert(
            "°C".to_string(),
            ThresholdLevels {
                warning: 75.0,
                critical: 90.0,
            },
        );
        thresholds.insert(
            "%".to_string(),
            ThresholdLevels {
                warning: 85.0,
                critical: 95.0,
            },
        );
        Self { thresholds }
    }
}

impl ThresholdConfig {
    fn levels_for(&self, unit: Option<&str>) -> Option<&ThresholdLevels> {
        unit.and_then(|u| self.thresholds.get(u))
    }
}

/// Classification of a value against its unit's thresholds.
///
/// Ordered so that `max()` aggregates a set of classifications into the
/// most severe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    Unknown,
    Normal,
    Warning,
    Critical,
}

impl Classification {
    /// Short label for status summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Unknown => "no data",
            Classification::Normal => "normal",
            Classification::Warning => "warning",
            Classification::Critical => "critical",
        }
    }
}

/// Short-term direction of a sensor's most recent readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl Trend {
    /// Arrow glyph for table display.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Rising => "↗",
            Trend::Falling => "↘",
            Trend::Stable => "→",
        }
    }
}

/// Point-in-time summary of one sensor's retained readings.
///
/// Derived on demand, never stored. All numeric fields are `None` when the
/// sensor has no readings; `None` renders as "no data", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorStats {
    pub sensor: String,
    pub last: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub p95: Option<f64>,
    pub sample_count: usize,
    pub unit: Option<String>,
}

/// Computes summaries, classifications, and trends over sensor readings.
#[derive(Debug, Clone, Default)]
pub struct StatsCalculator {
    config: ThresholdConfig,
}

impl StatsCalculator {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Summarize one sensor's retained readings.
    pub fn compute(&self, sensor: &Sensor) -> SensorStats {
        let values: Vec<f64> = sensor.values().collect();

        let mut stats = SensorStats {
            sensor: sensor.info.name.clone(),
            last: None,
            min: None,
            max: None,
            avg: None,
            p95: None,
            sample_count: values.len(),
            unit: sensor.info.unit.clone(),
        };
        if values.is_empty() {
            return stats;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in &values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        stats.last = sensor.last_reading().map(|r| r.value);
        stats.min = Some(min);
        stats.max = Some(max);
        stats.avg = Some(sum / values.len() as f64);
        stats.p95 = percentile(&values, 95);
        stats
    }

    /// Summarize every sensor in the store. The result is keyed, so
    /// iteration order of the input does not matter.
    pub fn compute_all(&self, sensors: &BTreeMap<String, Sensor>) -> BTreeMap<String, SensorStats> {
        sensors
            .iter()
            .map(|(name, sensor)| (name.clone(), self.compute(sensor)))
            .collect()
    }

    /// Classify a value against the thresholds configured for the unit.
    pub fn classify(&self, stats: &SensorStats, value: Option<f64>) -> Classification {
        let Some(value) = value else {
            return Classification::Unknown;
        };
        let Some(levels) = self.config.levels_for(stats.unit.as_deref()) else {
            return Classification::Normal;
        };

        if value >= levels.critical {
            Classification::Critical
        } else if value >= levels.warning {
            Classification::Warning
        } else {
            Classification::Normal
        }
    }

    /// Direction of the most recent readings.
    ///
    /// Looks at the last five values, split into an earlier and a later
    /// half; a change of more than ±5% between the half averages counts as
    /// rising or falling. Fewer than two values, or an earlier average of
    /// zero, reads as stable.
    pub fn trend(&self, sensor: &Sensor) -> Trend {
        const TAIL: usize = 5;

        let values: Vec<f64> = sensor.values().collect();
        if values.len() < 2 {
            return Trend::Stable;
        }

        let tail = &values[values.len().saturating_sub(TAIL)..];
        let (earlier, later) = tail.split_at(tail.len() / 2);
        let earlier_avg = earlier.iter().sum::<f64>() / earlier.len() as f64;
        let later_avg = later.iter().sum::<f64>() / later.len() as f64;

        if earlier_avg == 0.0 {
            return Trend::Stable;
        }
        let change_pct = (later_avg - earlier_avg) / earlier_avg * 100.0;
        if change_pct > 5.0 {
            Trend::Rising
        } else if change_pct < -5.0 {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

/// Nearest-rank percentile over the given samples.
fn percentile(values: &[f64], pct: usize) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (sorted.len() * pct).div_ceil(100).max(1);
    Some(sorted[rank - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sensors::{Reading, SensorInfo};
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 13)
            .unwrap()
            .and_hms_opt(10, 0, secs)
            .unwrap()
    }

    fn sensor_with(name: &str, values: &[f64]) -> Sensor {
        let mut sensor = Sensor::new(SensorInfo::parse(name));
        for (i, &value) in values.iter().enumerate() {
            sensor.push(Reading {
                timestamp: ts(i as u32),
                value,
            });
        }
        sensor
    }

    #[test]
    fn test_empty_sensor_has_no_stats() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("CPU [°C]", &[]));

        assert_eq!(stats.last, None);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.avg, None);
        assert_eq!(stats.p95, None);
        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.unit.as_deref(), Some("°C"));
    }

    #[test]
    fn test_last_is_most_recent_value() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("CPU [°C]", &[40.0, 45.0, 42.5]));
        assert_eq!(stats.last, Some(42.5));
        assert_eq!(stats.sample_count, 3);
    }

    #[test]
    fn test_stats_ordering_invariants() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("CPU [%]", &[10.0, 90.0, 30.0, 70.0, 50.0]));

        let (min, max) = (stats.min.unwrap(), stats.max.unwrap());
        assert!(min <= stats.avg.unwrap() && stats.avg.unwrap() <= max);
        assert!(min <= stats.p95.unwrap() && stats.p95.unwrap() <= max);
        assert_eq!(min, 10.0);
        assert_eq!(max, 90.0);
        assert_eq!(stats.avg, Some(50.0));
    }

    #[test]
    fn test_p95_nearest_rank() {
        let one_to_twenty: Vec<f64> = (1..=20).map(f64::from).collect();
        assert_eq!(percentile(&one_to_twenty, 95), Some(19.0));

        let one_to_hundred: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(percentile(&one_to_hundred, 95), Some(95.0));

        // Small sets fall back to the only sensible ranks.
        assert_eq!(percentile(&[7.5], 95), Some(7.5));
        assert_eq!(percentile(&[1.0, 2.0], 95), Some(2.0));
        assert_eq!(percentile(&[], 95), None);
    }

    #[test]
    fn test_single_reading_collapses_stats() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("VRAM [MB]", &[512.0]));
        assert_eq!(stats.last, Some(512.0));
        assert_eq!(stats.min, Some(512.0));
        assert_eq!(stats.max, Some(512.0));
        assert_eq!(stats.avg, Some(512.0));
        assert_eq!(stats.p95, Some(512.0));
    }

    #[test]
    fn test_classify_against_default_thresholds() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("CPU [°C]", &[50.0]));

        assert_eq!(calc.classify(&stats, Some(50.0)), Classification::Normal);
        assert_eq!(calc.classify(&stats, Some(80.0)), Classification::Warning);
        assert_eq!(calc.classify(&stats, Some(95.0)), Classification::Critical);
        assert_eq!(calc.classify(&stats, None), Classification::Unknown);
    }

    #[test]
    fn test_classify_unknown_unit_is_normal() {
        let calc = StatsCalculator::default();
        let stats = calc.compute(&sensor_with("Fan [RPM]", &[9000.0]));
        assert_eq!(calc.classify(&stats, Some(9000.0)), Classification::Normal);
    }

    #[test]
    fn test_classification_severity_ordering() {
        assert!(Classification::Critical > Classification::Warning);
        assert!(Classification::Warning > Classification::Normal);
        assert!(Classification::Normal > Classification::Unknown);
        assert_eq!(
            Classification::Normal.max(Classification::Critical),
            Classification::Critical
        );
    }

    #[test]
    fn test_trend_directions() {
        let calc = StatsCalculator::default();

        let rising = sensor_with("A [%]", &[10.0, 10.0, 50.0, 55.0, 60.0]);
        assert_eq!(calc.trend(&rising), Trend::Rising);

        let falling = sensor_with("B [%]", &[60.0, 55.0, 50.0, 10.0, 10.0]);
        assert_eq!(calc.trend(&falling), Trend::Falling);

        let flat = sensor_with("C [%]", &[42.0, 42.0, 42.0, 42.0, 42.0]);
        assert_eq!(calc.trend(&flat), Trend::Stable);
    }

    #[test]
    fn test_trend_edge_cases() {
        let calc = StatsCalculator::default();

        assert_eq!(calc.trend(&sensor_with("A [%]", &[])), Trend::Stable);
        assert_eq!(calc.trend(&sensor_with("B [%]", &[5.0])), Trend::Stable);
        // Earlier half averaging zero cannot express a percentage change.
        assert_eq!(calc.trend(&sensor_with("C [%]", &[0.0, 10.0])), Trend::Stable);
    }

    #[test]
    fn test_determinism_of_compute() {
        let calc = StatsCalculator::default();
        let sensor = sensor_with("GPU [°C]", &[61.0, 63.5, 62.0, 64.0]);
        assert_eq!(calc.compute(&sensor), calc.compute(&sensor));
    }
}
