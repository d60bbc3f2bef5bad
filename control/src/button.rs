//! Detect discrete gestures from repeated scene reports.

use crate::catalog;
use crate::output::GestureEvent;
use crate::report::SceneCode;

/// How long reports of the same scene count as echoes of one gesture.
/// In cycles of the 1 kHz control loop, 3 s.
const SUPPRESSION_WINDOW: u32 = 3000;

/// Identify discrete gestures from a stream of scene reports.
///
/// The remote tends to re-report the same scene several times per physical
/// press. The detector lets the first report of a scene through, swallows
/// its echoes, and re-arms once the suppression window started by the
/// triggering report elapses. A report of a different scene is never an
/// echo and interrupts the window immediately.
///
/// One detector exists per device session. Dropping it is the teardown,
/// no armed window outlives it.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneDetector {
    last_scene: Option<SceneCode>,
    cooldown: Option<u32>,
}

impl SceneDetector {
    /// Process one scene report and detect whether it is a fresh gesture.
    ///
    /// Unrecognized codes carry no gesture but still take part in the
    /// deduplication, their echoes are swallowed the same way.
    pub fn report(&mut self, code: SceneCode) -> Option<GestureEvent> {
        if self.last_scene == Some(code) {
            return None;
        }

        self.last_scene = Some(code);
        // A single deadline re-armed in place. Arming cancels whatever was
        // scheduled before, two pending resets cannot exist.
        self.cooldown = Some(SUPPRESSION_WINDOW);

        catalog::gesture(code).map(|gesture| GestureEvent { gesture })
    }

    /// One cycle of the 1 kHz control loop.
    ///
    /// Once the armed suppression window elapses, the detector forgets the
    /// last scene and accepts its next report as a fresh gesture.
    pub fn tick(&mut self) {
        if let Some(remaining) = self.cooldown {
            if remaining > 1 {
                self.cooldown = Some(remaining - 1);
            } else {
                self.cooldown = None;
                self.last_scene = None;
            }
        }
    }

    /// Forget the last scene and cancel a pending suppression window.
    pub fn reset(&mut self) {
        self.last_scene = None;
        self.cooldown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(detector: &mut SceneDetector, cycles: u32) {
        for _ in 0..cycles {
            detector.tick();
        }
    }

    #[test]
    fn when_two_distinct_scenes_arrive_within_window_both_are_detected() {
        let mut detector = SceneDetector::default();

        let first = detector.report(1).unwrap();
        assert_eq!(first.gesture, "Key Pressed 1 time");

        let second = detector.report(2).unwrap();
        assert_eq!(second.gesture, "Key Pressed 2 times");
    }

    #[test]
    fn when_scene_is_echoed_within_window_it_is_detected_once() {
        let mut detector = SceneDetector::default();

        assert!(detector.report(1).is_some());
        assert!(detector.report(1).is_none());

        tick(&mut detector, SUPPRESSION_WINDOW - 1);
        assert!(detector.report(1).is_none());
    }

    #[test]
    fn when_window_elapses_the_same_scene_is_detected_again() {
        let mut detector = SceneDetector::default();

        assert!(detector.report(1).is_some());
        tick(&mut detector, SUPPRESSION_WINDOW);
        assert!(detector.report(1).is_some());
    }

    #[test]
    fn when_different_scene_interrupts_window_it_restarts_it() {
        let mut detector = SceneDetector::default();

        assert!(detector.report(1).is_some());
        tick(&mut detector, 2000);

        assert!(detector.report(2).is_some());
        tick(&mut detector, SUPPRESSION_WINDOW - 1);
        assert!(detector.report(2).is_none());

        tick(&mut detector, 1);
        assert!(detector.report(2).is_some());
    }

    #[test]
    fn when_unrecognized_scene_arrives_no_gesture_is_detected() {
        let mut detector = SceneDetector::default();

        assert!(detector.report(7).is_none());
        assert!(detector.report(7).is_none());

        // A different code is never an echo, recognized or not.
        assert!(detector.report(1).is_some());
    }

    #[test]
    fn when_unrecognized_scene_arms_the_window_it_clears_after_it() {
        let mut detector = SceneDetector::default();

        detector.report(7);
        assert_eq!(detector.last_scene, Some(7));
        assert!(detector.cooldown.is_some());

        tick(&mut detector, SUPPRESSION_WINDOW);
        assert_eq!(detector.last_scene, None);
        assert_eq!(detector.cooldown, None);
    }

    #[test]
    fn when_idle_ticking_continues_nothing_changes() {
        let mut detector = SceneDetector::default();

        tick(&mut detector, 2 * SUPPRESSION_WINDOW);
        assert!(detector.report(0).is_some());
    }

    #[test]
    fn when_detector_is_reset_pending_window_is_cancelled() {
        let mut detector = SceneDetector::default();

        assert!(detector.report(1).is_some());
        detector.reset();
        assert!(detector.report(1).is_some());
    }
}
