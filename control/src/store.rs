//! Per-device session tying the interpreters together.

use crate::battery::{self, BatteryState};
use crate::button::SceneDetector;
use crate::log;
use crate::output::{self, CapabilityStore, GestureEvent, TriggerDispatch};
use crate::report::AttributeReport;

/// The main store of one remote's session.
///
/// One store exists per paired device. It takes decoded attribute reports
/// on its input and interprets them into semantic events for the caller
/// to deliver. Nothing in here is shared between devices and nothing
/// survives the session teardown, a freshly paired device starts from
/// `Store::new()` again.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    detector: SceneDetector,
}

/// Response of the store after processing one attribute report.
///
/// This response should be evaluated by the caller and passed further to
/// the platform collaborators through [`deliver`]. A single report yields
/// at most one of the two events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplyReportResult {
    pub gesture: Option<GestureEvent>,
    pub battery: Option<BatteryState>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: SceneDetector::default(),
        }
    }

    /// Interpret one decoded attribute report.
    pub fn apply_attribute_report(&mut self, report: AttributeReport) -> ApplyReportResult {
        match report {
            AttributeReport::PresentValue(code) => {
                log::info!("Multistate input reported scene={:?}", code);
                ApplyReportResult {
                    gesture: self.detector.report(code),
                    battery: None,
                }
            }
            AttributeReport::Lifeline(lifeline) => {
                log::info!(
                    "Lifeline reported battery_voltage={:?}",
                    lifeline.battery_voltage
                );
                ApplyReportResult {
                    gesture: None,
                    battery: battery::interpret(lifeline.battery_voltage),
                }
            }
        }
    }

    /// One cycle of the 1 kHz control loop.
    pub fn tick(&mut self) {
        self.detector.tick();
    }
}

/// Hand interpreted events over to the platform collaborators.
///
/// Delivery is fire-and-forget. The interpreters committed their state
/// before this runs, rejections only get logged inside the outbound seams.
pub fn deliver<T, C>(result: ApplyReportResult, triggers: &mut T, capabilities: &mut C)
where
    T: TriggerDispatch,
    C: CapabilityStore,
{
    if let Some(gesture) = result.gesture {
        output::dispatch_gesture(triggers, gesture);
    }
    if let Some(state) = result.battery {
        output::publish_battery(capabilities, state);
    }
}
