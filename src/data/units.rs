//! Unit-based grouping and deterministic color assignment.
//!
//! Charts pair at most two unit groups (one per y axis). Grouping and color
//! assignment are pure functions of the current sensor set: no hidden
//! state, no insertion-order dependence, so repeated calls over unchanged
//! sensors always agree.

use std::collections::BTreeMap;

use super::sensors::{Sensor, SensorGroup};

/// An RGB display color.
pub type Rgb = (u8, u8, u8);

/// Fixed display palette; assignment cycles when sensors outnumber colors.
pub const DEFAULT_PALETTE: &[Rgb] = &[
    (255, 100, 100),
    (100, 255, 100),
    (100, 150, 255),
    (255, 255, 100),
    (255, 100, 255),
    (100, 255, 255),
    (255, 180, 100),
    (180, 100, 255),
];

/// Maximum unit groups displayable at once (one per chart axis).
pub const MAX_AXIS_GROUPS: usize = 2;

/// Partition the sensor set into per-unit groups.
///
/// Group order is the order units are first met while scanning identities
/// lexicographically (the map is ordered by key), so equal inputs always
/// yield equal group contents and ordering. Sensors without a unit form
/// one group of their own.
pub fn create_sensor_groups(sensors: &BTreeMap<String, Sensor>) -> Vec<SensorGroup> {
    let mut groups: Vec<SensorGroup> = Vec::new();

    for (name, sensor) in sensors {
        let unit = sensor.info.unit.clone();
        match groups.iter_mut().find(|g| g.unit == unit) {
            Some(group) => group.sensors.push(name.clone()),
            None => groups.push(SensorGroup {
                unit,
                sensors: vec![name.clone()],
            }),
        }
    }

    groups
}

/// Cap the group list for dual-axis display.
///
/// Sensors in excluded units stay in the data model; they are only absent
/// from the axis selection. [`create_sensor_groups`] itself never caps.
pub fn select_for_dual_axis(
    sensors: &BTreeMap<String, Sensor>,
    max_groups: usize,
) -> Vec<SensorGroup> {
    let mut groups = create_sensor_groups(sensors);
    groups.truncate(max_groups);
    groups
}

/// Assign palette colors by lexicographic position, wrapping when the
/// identity set outgrows the palette.
pub fn assign_colors<'a, I>(identities: I, palette: &[Rgb]) -> BTreeMap<String, Rgb>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = identities.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    if palette.is_empty() {
        return BTreeMap::new();
    }
    sorted
        .iter()
        .enumerate()
        .map(|(i, name)| ((*name).to_string(), palette[i % palette.len()]))
        .collect()
}
