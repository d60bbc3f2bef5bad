//! Interpretation of the remote's battery telemetry.

#[allow(unused_imports)]
use micromath::F32Ext;

// Discharge curve of the CR1632 coin cell, mapped linearly to 0..=100 %.
const MIN_VOLTS: f32 = 2.5;
const MAX_VOLTS: f32 = 3.0;

// Below this the cell is assumed to be almost empty.
const LOW_VOLTAGE_MILLIVOLTS: u16 = 2600;

/// Charge state derived from a single voltage sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge within 0..=100 %.
    pub percentage: u8,
    /// The cell is almost empty and should be replaced.
    pub is_low: bool,
}

/// Interpret one battery telemetry sample.
///
/// The lifeline report may arrive without a usable voltage field, such
/// reports produce no state. Each sample is interpreted on its own, the
/// previous one plays no role. Readings outside of the expected voltage
/// range clamp into 0..=100 %.
#[must_use]
pub fn interpret(battery_voltage: Option<u16>) -> Option<BatteryState> {
    let millivolts = battery_voltage?;
    let volts = f32::from(millivolts) / 1000.0;
    let percentage = scale(volts).round().clamp(0.0, 100.0) as u8;
    Some(BatteryState {
        percentage,
        is_low: millivolts < LOW_VOLTAGE_MILLIVOLTS,
    })
}

fn scale(volts: f32) -> f32 {
    (volts - MIN_VOLTS) / (MAX_VOLTS - MIN_VOLTS) * 100.0
}
