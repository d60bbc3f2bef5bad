//! Outbound seams towards the hosting automation platform.

use crate::battery::BatteryState;
use crate::log;

/// Id of the trigger matched by the rule engine against its state, with
/// the gesture carried as a state filter value.
pub const SCENE_TRIGGER: &str = "trigger_button1_scene";

/// Id of the trigger carrying the gesture as a token payload.
pub const BUTTON_TRIGGER: &str = "button1_button";

/// A recognized discrete button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureEvent {
    pub gesture: &'static str,
}

/// Gesture payload attached to a flow trigger, as tokens or as state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScenePayload {
    pub scene: &'static str,
}

/// One firing request towards the platform's rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlowTrigger {
    pub id: &'static str,
    pub tokens: Option<ScenePayload>,
    pub state: Option<ScenePayload>,
}

/// Rule engine seam firing flow triggers.
///
/// Delivery and subscriber matching happen behind it. The implementation
/// may reject a firing, the core only observes that for logging.
pub trait TriggerDispatch {
    type Error;

    /// # Errors
    ///
    /// Returns an error when the platform rejects the delivery.
    fn fire(&mut self, trigger: FlowTrigger) -> Result<(), Self::Error>;
}

/// Platform seam persisting typed device capability values.
///
/// The platform owns the storage, the core only writes the latest derived
/// values into it.
pub trait CapabilityStore {
    type Error;

    /// # Errors
    ///
    /// Returns an error when the platform rejects the update.
    fn set_battery_percentage(&mut self, percentage: u8) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error when the platform rejects the update.
    fn set_battery_alarm(&mut self, is_low: bool) -> Result<(), Self::Error>;
}

impl GestureEvent {
    /// Both delivery channels of one gesture, in firing order.
    ///
    /// The two triggers represent the same logical event offered through
    /// two distinct subscription mechanisms and are always fired together.
    #[must_use]
    pub fn flow_triggers(&self) -> [FlowTrigger; 2] {
        let payload = ScenePayload { scene: self.gesture };
        [
            FlowTrigger {
                id: SCENE_TRIGGER,
                tokens: None,
                state: Some(payload),
            },
            FlowTrigger {
                id: BUTTON_TRIGGER,
                tokens: Some(payload),
                state: None,
            },
        ]
    }
}

/// Fire both trigger channels of a gesture.
///
/// The detector state has committed before this runs. A rejected delivery
/// is logged and swallowed, it affects neither the sibling channel nor
/// the caller.
pub fn dispatch_gesture<T: TriggerDispatch>(dispatch: &mut T, event: GestureEvent) {
    for trigger in event.flow_triggers() {
        if dispatch.fire(trigger).is_err() {
            log::warn!("Failed firing trigger={:?}", trigger.id);
        }
    }
}

/// Publish battery charge and alarm as two independent capability updates.
///
/// A rejected update is logged and swallowed, the sibling capability is
/// still written.
pub fn publish_battery<C: CapabilityStore>(capabilities: &mut C, state: BatteryState) {
    if capabilities
        .set_battery_percentage(state.percentage)
        .is_err()
    {
        log::warn!("Failed updating capability=measure_battery");
    }
    if capabilities.set_battery_alarm(state.is_low).is_err() {
        log::warn!("Failed updating capability=alarm_battery");
    }
}
