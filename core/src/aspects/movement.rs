//! Applying / Separating / Static classification.

use crate::angle::{arc_separation, normalize_degrees};
use crate::aspects::types::Movement;

/// Forward projection step, in days.
const FORWARD_STEP_DAYS: f64 = 1.0;

/// Orb changes smaller than this over one step count as no motion, degrees.
const STATIC_EPSILON: f64 = 1.0e-4;

/// Classify whether the aspect between two moving points is tightening
/// (`Applying`), loosening (`Separating`), or effectively frozen (`Static`).
///
/// Both longitudes are projected forward one day at their signed daily
/// speeds and the distance from the exact angle is compared before and
/// after. Signed speeds make retrograde motion fall out of the same
/// arithmetic; points with identical speeds never change their separation
/// and always classify as `Static`.
pub fn classify_movement(
    lon1: f64,
    speed1: f64,
    lon2: f64,
    speed2: f64,
    target_angle: f64,
) -> Movement {
    let separation_now = arc_separation(lon1, lon2);
    let future1 = normalize_degrees(lon1 + speed1 * FORWARD_STEP_DAYS);
    let future2 = normalize_degrees(lon2 + speed2 * FORWARD_STEP_DAYS);
    let separation_future = arc_separation(future1, future2);

    let orb_now = (separation_now - target_angle).abs();
    let orb_future = (separation_future - target_angle).abs();

    if (orb_future - orb_now).abs() < STATIC_EPSILON {
        Movement::Static
    } else if orb_future < orb_now {
        Movement::Applying
    } else {
        Movement::Separating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_body_behind_applies_to_conjunction() {
        assert_eq!(classify_movement(10.0, 1.0, 20.0, 0.5, 0.0), Movement::Applying);
        assert_eq!(classify_movement(80.0, 2.0, 90.0, 0.5, 0.0), Movement::Applying);
    }

    #[test]
    fn faster_body_ahead_separates_from_conjunction() {
        assert_eq!(classify_movement(20.0, 1.0, 10.0, 0.5, 0.0), Movement::Separating);
        assert_eq!(classify_movement(100.0, 2.0, 90.0, 0.5, 0.0), Movement::Separating);
        assert_eq!(classify_movement(55.0, 12.5, 50.0, 1.0, 0.0), Movement::Separating);
    }

    #[test]
    fn stationary_pair_is_static() {
        assert_eq!(classify_movement(10.0, 0.0, 20.0, 0.0, 0.0), Movement::Static);
    }

    #[test]
    fn equal_speeds_are_static_at_any_angle() {
        assert_eq!(classify_movement(10.0, 1.0, 40.0, 1.0, 30.0), Movement::Static);
        assert_eq!(classify_movement(5.0, 1.0, 355.0, 1.0, 0.0), Movement::Static);
        assert_eq!(classify_movement(0.0, -0.5, 120.0, -0.5, 120.0), Movement::Static);
    }

    #[test]
    fn sub_epsilon_relative_drift_is_static() {
        // Orb change of 5e-5 degrees over the step sits under the threshold.
        assert_eq!(
            classify_movement(10.0, 1.0, 20.0, 1.00005, 0.0),
            Movement::Static
        );
    }

    #[test]
    fn direct_body_closing_on_retrograde_applies() {
        assert_eq!(classify_movement(10.0, 1.0, 15.0, -1.0, 0.0), Movement::Applying);
    }

    #[test]
    fn retrograde_leaving_direct_separates() {
        assert_eq!(classify_movement(10.0, 1.0, 5.0, -1.0, 0.0), Movement::Separating);
        assert_eq!(classify_movement(5.0, -1.0, 10.0, 1.0, 0.0), Movement::Separating);
    }

    #[test]
    fn both_retrograde_can_still_apply() {
        assert_eq!(classify_movement(10.0, -1.0, 15.0, -2.0, 0.0), Movement::Applying);
    }

    #[test]
    fn faster_retrograde_closing_applies() {
        assert_eq!(classify_movement(110.0, -0.8, 100.0, 0.1, 0.0), Movement::Applying);
    }

    #[test]
    fn wrap_around_zero_keeps_the_classification() {
        // 359 and 355, slow closers across the wrap.
        assert_eq!(classify_movement(359.0, 1.0, 355.0, 2.0, 0.0), Movement::Applying);
        // 359 chased by a fast body at 5: the gap widens from 6 to 18.
        assert_eq!(classify_movement(359.0, 1.0, 5.0, 13.0, 0.0), Movement::Separating);
    }

    #[test]
    fn exact_aspects_separate_as_motion_continues() {
        assert_eq!(classify_movement(10.0, 1.0, 130.0, 13.0, 120.0), Movement::Separating);
        assert_eq!(classify_movement(10.0, 1.0, 190.0, 0.5, 180.0), Movement::Separating);
        assert_eq!(classify_movement(10.0, 1.0, 10.0, -1.0, 0.0), Movement::Separating);
        assert_eq!(classify_movement(10.0, 1.0, 10.0, 2.0, 0.0), Movement::Separating);
    }

    #[test]
    fn near_opposition_distinguishes_the_sides() {
        // 179 apart and widening past 180 counts as applying to opposition.
        assert_eq!(classify_movement(0.0, 1.0, 181.0, 0.5, 180.0), Movement::Applying);
        // 179 apart and narrowing moves away from opposition.
        assert_eq!(classify_movement(0.0, 1.0, 179.0, 0.5, 180.0), Movement::Separating);
        assert_eq!(classify_movement(10.0, 0.5, 185.0, 1.0, 180.0), Movement::Applying);
    }

    #[test]
    fn wide_trine_closes_from_maximal_separation() {
        // Separation 180 against a 120 target shrinks as one body moves.
        assert_eq!(classify_movement(0.0, 0.0, 180.0, 1.0, 120.0), Movement::Applying);
    }

    #[test]
    fn squares_apply_and_separate_symmetrically() {
        assert_eq!(classify_movement(10.0, 0.5, 95.0, 1.0, 90.0), Movement::Applying);
        assert_eq!(classify_movement(10.0, 1.0, 100.0, 0.5, 90.0), Movement::Separating);
    }

    #[test]
    fn very_fast_bodies_classify_by_net_orb_change() {
        assert_eq!(classify_movement(10.0, 50.0, 50.0, 1.0, 0.0), Movement::Applying);
        assert_eq!(classify_movement(50.0, 1.0, 10.0, 50.0, 0.0), Movement::Applying);
    }
}
