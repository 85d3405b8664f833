//! Flight dynamics: thrust, rotation, gravity, Euler integration and
//! boundary clamping for a single fixed physics step.

use super::types::*;

/// Advance the craft by one physics step of `params.dt`.
///
/// Rotation and thrust held this step affect this step's integration.
/// Gravity always applies, and the world boundary clamp runs last.
pub fn advance(craft: &mut CraftState, controls: FlightControls, params: &FlightParams) {
    let dt = params.dt;
    craft.thrusting = false;

    if craft.fuel > 0.0 {
        if controls.thrust {
            craft.fuel = (craft.fuel - params.fuel_consumption).max(0.0);
            let thrust = Vec2::new(0.0, -params.thrust).rotated(craft.heading);
            craft.velocity += dt * thrust;
            craft.thrusting = true;
        }
        if controls.rotate_left {
            craft.heading += dt * params.rotation_speed;
        }
        if controls.rotate_right {
            craft.heading -= dt * params.rotation_speed;
        }
    }

    craft.velocity.y += dt * params.gravity;

    craft.position += dt * craft.velocity;

    clamp_to_world(craft, params);
}

/// Push the craft's bounding box back inside the left, right and top world
/// edges, zeroing the velocity component on each axis that was clamped.
///
/// The bottom edge is left open: reaching the surface ends the flight.
pub fn clamp_to_world(craft: &mut CraftState, params: &FlightParams) {
    let bounds = craft.bounds(params);
    let half_width = bounds.width / 2.0;
    let half_height = bounds.height / 2.0;

    if bounds.left < 0.0 {
        craft.position.x = half_width;
        craft.velocity.x = 0.0;
    } else if bounds.right() > params.world_width {
        craft.position.x = params.world_width - half_width;
        craft.velocity.x = 0.0;
    }

    if bounds.top < 0.0 {
        craft.position.y = half_height;
        craft.velocity.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_feq(left: f64, right: f64) {
        if (left - right).abs() > 1e-9 {
            panic!("Float equal assertion failed, {left} != {right}");
        }
    }

    fn params() -> FlightParams {
        FlightParams::default()
    }

    /// Upright craft hovering mid-world with no motion.
    fn mid_air_craft() -> CraftState {
        CraftState::new(&params())
            .with_position(400.0, 300.0)
            .with_velocity(0.0, 0.0)
            .with_heading(0.0)
    }

    fn thrust() -> FlightControls {
        FlightControls {
            thrust: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_free_fall_adds_gravity_each_tick() {
        let params = params();
        let mut craft = mid_air_craft().with_velocity(1.5, 0.0);

        for tick in 1..=20 {
            let before = craft.velocity;
            advance(&mut craft, FlightControls::default(), &params);
            assert_feq(craft.velocity.y - before.y, params.dt * params.gravity);
            assert_feq(craft.velocity.x, 1.5);
            assert!(!craft.thrusting, "tick {tick} should not thrust");
        }
    }

    #[test]
    fn test_ten_ticks_of_gravity() {
        let params = params().with_gravity(10.0).with_dt(0.02);
        let mut craft = mid_air_craft();

        for _ in 0..10 {
            advance(&mut craft, FlightControls::default(), &params);
        }

        assert!((craft.velocity.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        let params = params();
        let mut craft = mid_air_craft().with_velocity(2.0, 1.0);

        advance(&mut craft, FlightControls::default(), &params);

        let vy = 1.0 + params.dt * params.gravity;
        assert_feq(craft.position.x, 400.0 + params.dt * 2.0);
        assert_feq(craft.position.y, 300.0 + params.dt * vy);
    }

    #[test]
    fn test_upright_thrust_pushes_up() {
        let params = params();
        let mut craft = mid_air_craft();

        advance(&mut craft, thrust(), &params);

        assert!(craft.thrusting);
        assert_feq(craft.velocity.x, 0.0);
        assert_feq(
            craft.velocity.y,
            params.dt * (params.gravity - params.thrust),
        );
    }

    #[test]
    fn test_tilted_thrust_pushes_sideways() {
        let params = params();
        let mut craft = mid_air_craft().with_heading(90.0);

        advance(&mut craft, thrust(), &params);

        // Heading 90 points the nose left, so thrust brakes a rightward drift.
        assert_feq(craft.velocity.x, -params.dt * params.thrust);
        assert_feq(craft.velocity.y, params.dt * params.gravity);
    }

    #[test]
    fn test_thrust_consumes_fuel() {
        let params = params();
        let mut craft = mid_air_craft();

        advance(&mut craft, thrust(), &params);

        assert_feq(craft.fuel, params.initial_fuel - params.fuel_consumption);
    }

    #[test]
    fn test_fuel_floors_at_zero() {
        let params = params().with_fuel_consumption(3.0);
        let mut craft = mid_air_craft().with_fuel(1.0);

        advance(&mut craft, thrust(), &params);

        assert_feq(craft.fuel, 0.0);
        assert!(craft.thrusting, "the last drop still produces thrust");
    }

    #[test]
    fn test_no_thrust_without_fuel() {
        let params = params();
        let mut craft = mid_air_craft().with_fuel(0.0);

        advance(&mut craft, thrust(), &params);

        assert!(!craft.thrusting);
        assert_feq(craft.fuel, 0.0);
        assert_feq(craft.velocity.x, 0.0);
        assert_feq(craft.velocity.y, params.dt * params.gravity);
    }

    #[test]
    fn test_fuel_is_monotonic() {
        let params = params().with_initial_fuel(5.0);
        let mut craft = CraftState::new(&params)
            .with_position(400.0, 300.0)
            .with_fuel(5.0);

        let mut last = craft.fuel;
        for _ in 0..20 {
            advance(&mut craft, thrust(), &params);
            assert!(craft.fuel <= last);
            assert!(craft.fuel >= 0.0);
            last = craft.fuel;
        }
        assert_feq(craft.fuel, 0.0);
    }

    #[test]
    fn test_rotation() {
        let params = params();
        let mut craft = mid_air_craft();

        advance(
            &mut craft,
            FlightControls {
                rotate_left: true,
                ..Default::default()
            },
            &params,
        );
        assert_feq(craft.heading, params.dt * params.rotation_speed);

        advance(
            &mut craft,
            FlightControls {
                rotate_right: true,
                ..Default::default()
            },
            &params,
        );
        assert_feq(craft.heading, 0.0);
    }

    #[test]
    fn test_rotation_needs_fuel() {
        let params = params();
        let mut craft = mid_air_craft().with_fuel(0.0);

        advance(
            &mut craft,
            FlightControls {
                rotate_left: true,
                ..Default::default()
            },
            &params,
        );

        assert_feq(craft.heading, 0.0);
    }

    #[test]
    fn test_left_wall_clamp() {
        let params = params();
        let mut craft = mid_air_craft().with_position(30.0, 300.0).with_velocity(-50.0, 0.0);

        advance(&mut craft, FlightControls::default(), &params);

        assert_feq(craft.bounds(&params).left, 0.0);
        assert_feq(craft.velocity.x, 0.0);
    }

    #[test]
    fn test_right_wall_clamp() {
        let params = params();
        let mut craft = mid_air_craft()
            .with_position(params.world_width - 30.0, 300.0)
            .with_velocity(50.0, 0.0);

        advance(&mut craft, FlightControls::default(), &params);

        assert_feq(craft.bounds(&params).right(), params.world_width);
        assert_feq(craft.velocity.x, 0.0);
    }

    #[test]
    fn test_ceiling_clamp() {
        let params = params();
        let mut craft = mid_air_craft().with_position(400.0, 30.0).with_velocity(0.0, -50.0);

        advance(&mut craft, FlightControls::default(), &params);

        assert_feq(craft.bounds(&params).top, 0.0);
        assert_feq(craft.velocity.y, 0.0);
    }

    #[test]
    fn test_no_floor_clamp() {
        let params = params();
        let mut craft = mid_air_craft()
            .with_position(400.0, params.world_height - 10.0)
            .with_velocity(0.0, 50.0);

        advance(&mut craft, FlightControls::default(), &params);

        assert!(craft.bounds(&params).bottom() > params.world_height);
        assert!(craft.velocity.y > 0.0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let params = params();
        let cases = [
            (-40.0, -40.0),
            (params.world_width + 40.0, 300.0),
            (400.0, -5.0),
            (400.0, 300.0),
        ];

        for (x, y) in cases {
            let mut once = mid_air_craft().with_position(x, y).with_velocity(3.0, -3.0);
            clamp_to_world(&mut once, &params);
            let mut twice = once.clone();
            clamp_to_world(&mut twice, &params);
            assert_eq!(once.bounds(&params), twice.bounds(&params));
            assert_eq!(once, twice);
        }
    }
}
