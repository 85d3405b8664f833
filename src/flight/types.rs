//! Flight data structures.
//!
//! Coordinates follow the screen convention: origin at the top-left corner of
//! the world, x grows rightward and y grows downward. Headings are degrees,
//! counter-clockwise from upright.

use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate counter-clockwise (as seen on screen) by `degrees`.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        // Screen y points down, so a visual counter-clockwise turn is a
        // clockwise turn in the math frame.
        Self {
            x: self.x * cos + self.y * sin,
            y: -self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.x, self * rhs.y)
    }
}

/// Axis-aligned rectangle occupied by the craft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn centered(center: Vec2, width: f64, height: f64) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Physics tunables for one flight.
///
/// `Default` takes every value from `core::constants`; the `with_*` builders
/// exist so tests and tools can explore other regimes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParams {
    pub gravity: f64,
    pub thrust: f64,
    pub fuel_consumption: f64,
    pub rotation_speed: f64,
    pub dt: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub craft_width: f64,
    pub craft_height: f64,
    pub surface_offset: f64,
    pub zone_width: f64,
    pub max_landing_speed: f64,
    pub termination_epsilon: f64,
    pub initial_fuel: f64,
    pub initial_position: Vec2,
    pub initial_velocity: Vec2,
    pub initial_heading: f64,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            thrust: THRUST,
            fuel_consumption: FUEL_CONSUMPTION,
            rotation_speed: ROTATION_SPEED,
            dt: DT,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            surface_offset: SURFACE_OFFSET,
            zone_width: LANDING_ZONE_WIDTH,
            max_landing_speed: MAX_LANDING_SPEED,
            termination_epsilon: TERMINATION_EPSILON,
            initial_fuel: INIT_FUEL,
            initial_position: Vec2::new(INIT_X, INIT_Y),
            initial_velocity: Vec2::new(INIT_X_SPEED, INIT_Y_SPEED),
            initial_heading: INIT_HEADING,
        }
    }
}

impl FlightParams {
    pub fn with_gravity(self, gravity: f64) -> Self {
        Self { gravity, ..self }
    }

    pub fn with_thrust(self, thrust: f64) -> Self {
        Self { thrust, ..self }
    }

    pub fn with_dt(self, dt: f64) -> Self {
        Self { dt, ..self }
    }

    pub fn with_fuel_consumption(self, fuel_consumption: f64) -> Self {
        Self {
            fuel_consumption,
            ..self
        }
    }

    pub fn with_initial_fuel(self, initial_fuel: f64) -> Self {
        Self {
            initial_fuel,
            ..self
        }
    }

    pub fn with_max_landing_speed(self, max_landing_speed: f64) -> Self {
        assert!(max_landing_speed > 0.);
        Self {
            max_landing_speed,
            ..self
        }
    }

    /// Highest valid start of the landing zone.
    pub fn zone_start_max(&self) -> f64 {
        (self.world_width - self.zone_width).max(0.0)
    }
}

/// Directional inputs held during one physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightControls {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// Kinematic state of the craft. `position` is the craft's center.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees, counter-clockwise from upright.
    pub heading: f64,
    /// Remaining fuel, never negative.
    pub fuel: f64,
    /// True iff thrust was applied during the last step.
    pub thrusting: bool,
}

impl CraftState {
    /// Craft at the configured starting position, speed, heading and fuel.
    pub fn new(params: &FlightParams) -> Self {
        Self {
            position: params.initial_position,
            velocity: params.initial_velocity,
            heading: params.initial_heading,
            fuel: params.initial_fuel,
            thrusting: false,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Physics bounding box. Fixed size, never rotated with the heading.
    pub fn bounds(&self, params: &FlightParams) -> Bounds {
        Bounds::centered(self.position, params.craft_width, params.craft_height)
    }

    /// Height of the craft above the surface (negative once below it).
    pub fn height_above_surface(&self, params: &FlightParams) -> f64 {
        params.world_height - self.position.y - params.surface_offset
    }

    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..self
        }
    }

    pub fn with_velocity(self, vx: f64, vy: f64) -> Self {
        Self {
            velocity: Vec2::new(vx, vy),
            ..self
        }
    }

    pub fn with_heading(self, heading: f64) -> Self {
        Self { heading, ..self }
    }

    pub fn with_fuel(self, fuel: f64) -> Self {
        Self { fuel, ..self }
    }
}

/// Target interval on the surface: `[start, start + width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingZone {
    pub start: f64,
    pub width: f64,
}

impl LandingZone {
    pub fn new(start: f64, width: f64) -> Self {
        Self { start, width }
    }

    /// Place a zone uniformly at random within `[0, world_width - zone_width]`.
    pub fn random<R: Rng>(params: &FlightParams, rng: &mut R) -> Self {
        let start = rng.gen_range(0.0..=params.zone_start_max());
        Self::new(start, params.zone_width)
    }

    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x < self.end()
    }
}

/// How a flight that reached the ground at a safe speed ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    Success,
    Missed,
}

/// Final classification of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed(Landing),
    Crashed,
}

impl Outcome {
    /// Human-readable label used by the results log and the outcome banner.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Landed(Landing::Success) => "Successful landing!",
            Outcome::Landed(Landing::Missed) => "You missed the landing site!",
            Outcome::Crashed => "Crash!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Landed(Landing::Success))
    }
}

/// Snapshot of the craft at the moment a flight terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub outcome: Outcome,
    pub fuel: f64,
    pub speed: f64,
    pub height: f64,
}
