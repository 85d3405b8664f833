//! Landing and crash detection.

use super::types::*;

/// Classify a flight that has reached the surface.
///
/// Speed is checked first, so a fast arrival is a crash no matter where it
/// happens. A safe arrival succeeds only if the craft's horizontal center
/// lies inside the landing zone.
pub fn classify(speed: f64, center_x: f64, zone: &LandingZone, params: &FlightParams) -> Outcome {
    if speed >= params.max_landing_speed {
        Outcome::Crashed
    } else if zone.contains(center_x) {
        Outcome::Landed(Landing::Success)
    } else {
        Outcome::Landed(Landing::Missed)
    }
}

/// Returns `None` while the craft is still above the termination height,
/// otherwise the final outcome of the flight.
pub fn evaluate(craft: &CraftState, zone: &LandingZone, params: &FlightParams) -> Option<Outcome> {
    if craft.height_above_surface(params) > params.termination_epsilon {
        return None;
    }
    Some(classify(
        craft.speed(),
        craft.bounds(params).center().x,
        zone,
        params,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FlightParams {
        FlightParams::default()
    }

    fn zone() -> LandingZone {
        LandingZone::new(300.0, 50.0)
    }

    /// Craft whose height above the surface is exactly `height`.
    fn craft_at_height(x: f64, height: f64) -> CraftState {
        let params = params();
        let y = params.world_height - params.surface_offset - height;
        CraftState::new(&params).with_position(x, y).with_velocity(0.0, 0.0)
    }

    #[test]
    fn test_still_flying_above_threshold() {
        let craft = craft_at_height(310.0, params().termination_epsilon + 0.5);
        assert_eq!(evaluate(&craft, &zone(), &params()), None);
    }

    #[test]
    fn test_terminates_at_threshold() {
        let craft = craft_at_height(310.0, params().termination_epsilon);
        assert!(evaluate(&craft, &zone(), &params()).is_some());
    }

    #[test]
    fn test_terminates_below_surface() {
        let craft = craft_at_height(310.0, -15.0);
        assert!(evaluate(&craft, &zone(), &params()).is_some());
    }

    #[test]
    fn test_success_at_rest_inside_zone() {
        let craft = craft_at_height(325.0, 1.0);
        assert_eq!(
            evaluate(&craft, &zone(), &params()),
            Some(Outcome::Landed(Landing::Success))
        );
    }

    #[test]
    fn test_zone_start_is_inside() {
        let craft = craft_at_height(300.0, 1.0);
        assert_eq!(
            evaluate(&craft, &zone(), &params()),
            Some(Outcome::Landed(Landing::Success))
        );
    }

    #[test]
    fn test_zone_end_is_outside() {
        let craft = craft_at_height(350.0, 1.0);
        assert_eq!(
            evaluate(&craft, &zone(), &params()),
            Some(Outcome::Landed(Landing::Missed))
        );
    }

    #[test]
    fn test_missed_outside_zone() {
        for x in [0.0, 299.0, 351.0, 799.0] {
            let craft = craft_at_height(x, 1.0).with_velocity(0.3, 0.4);
            assert_eq!(
                evaluate(&craft, &zone(), &params()),
                Some(Outcome::Landed(Landing::Missed)),
                "x={x}"
            );
        }
    }

    #[test]
    fn test_crash_just_above_max_speed() {
        let params = params();
        let speed = params.max_landing_speed + 1e-6;
        for x in [0.0, 325.0, 799.0] {
            let craft = craft_at_height(x, 1.0).with_velocity(0.0, speed);
            assert_eq!(evaluate(&craft, &zone(), &params), Some(Outcome::Crashed));
        }
    }

    #[test]
    fn test_crash_at_exact_max_speed() {
        let params = params();
        let craft = craft_at_height(325.0, 1.0).with_velocity(0.0, params.max_landing_speed);
        assert_eq!(evaluate(&craft, &zone(), &params), Some(Outcome::Crashed));
    }

    #[test]
    fn test_speed_combines_both_axes() {
        let params = params().with_max_landing_speed(1.0);
        // |(0.8, 0.8)| > 1 even though each component is below the limit.
        assert_eq!(
            classify(0.8_f64.hypot(0.8), 325.0, &zone(), &params),
            Outcome::Crashed
        );
        assert_eq!(
            classify(0.6_f64.hypot(0.6), 325.0, &zone(), &params),
            Outcome::Landed(Landing::Success)
        );
    }
}
