//! Flight lifecycle: reset, fixed-step ticking, freeze on termination.
//!
//! A `FlightSession` owns the craft, the landing zone and the held input
//! signals. It steps physics in fixed `FRAME_MS` increments from wall-clock
//! time fed in by the control loop, evaluates the outcome after every step,
//! and freezes once the flight has ended until an explicit retry.

use super::logic::advance;
use super::outcome::evaluate;
use super::types::*;
use crate::core::constants::{FRAME_MS, INPUT_HOLD_TICKS, MAX_FRAME_DT_MS};
use rand::Rng;

/// UI-agnostic input actions.
///
/// Terminals report key presses (and auto-repeats) but rarely releases, so
/// an "On" action holds its signal for `INPUT_HOLD_TICKS` physics steps. The
/// "Off" actions are sent when the terminal does report a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightInput {
    ThrustOn,
    ThrustOff,
    RotateLeftOn,
    RotateLeftOff,
    RotateRightOn,
    RotateRightOff,
    /// Start a new flight. Only honored once the current one has ended.
    Retry,
}

/// Remaining physics steps each signal stays held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldTimers {
    pub thrust: u32,
    pub rotate_left: u32,
    pub rotate_right: u32,
}

impl HoldTimers {
    pub fn controls(&self) -> FlightControls {
        FlightControls {
            thrust: self.thrust > 0,
            rotate_left: self.rotate_left > 0,
            rotate_right: self.rotate_right > 0,
        }
    }

    fn decay(&mut self) {
        self.thrust = self.thrust.saturating_sub(1);
        self.rotate_left = self.rotate_left.saturating_sub(1);
        self.rotate_right = self.rotate_right.saturating_sub(1);
    }
}

/// What happened during one call to [`FlightSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Physics steps executed.
    pub steps: u32,
    /// Set on the call during which the flight ended.
    pub finished: Option<FlightSummary>,
}

#[derive(Debug, Clone)]
pub struct FlightSession {
    pub params: FlightParams,
    pub craft: CraftState,
    pub zone: LandingZone,
    /// Held from termination until the next reset.
    pub summary: Option<FlightSummary>,
    pub hold: HoldTimers,

    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Physics steps taken in the current flight.
    pub tick_count: u64,

    pub flights_flown: u32,
    pub successful_landings: u32,
}

impl FlightSession {
    /// Create a session with its first flight already under way.
    pub fn new<R: Rng>(params: FlightParams, rng: &mut R) -> Self {
        let zone = LandingZone::random(&params, rng);
        tracing::info!(zone_start = zone.start, "flight started");
        Self {
            craft: CraftState::new(&params),
            zone,
            params,
            summary: None,
            hold: HoldTimers::default(),
            accumulated_time_ms: 0,
            tick_count: 0,
            flights_flown: 0,
            successful_landings: 0,
        }
    }

    /// Start a fresh flight: new craft, new landing zone, outcome cleared.
    /// Lifetime statistics are kept.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.craft = CraftState::new(&self.params);
        self.zone = LandingZone::random(&self.params, rng);
        self.summary = None;
        self.hold = HoldTimers::default();
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
        tracing::info!(zone_start = self.zone.start, "flight started");
    }

    pub fn is_flying(&self) -> bool {
        self.summary.is_none()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.summary.map(|summary| summary.outcome)
    }

    pub fn controls(&self) -> FlightControls {
        self.hold.controls()
    }

    pub fn height(&self) -> f64 {
        self.craft.height_above_surface(&self.params)
    }

    /// Whether the craft's center is currently above the landing zone.
    pub fn over_zone(&self) -> bool {
        self.zone.contains(self.craft.position.x)
    }

    /// Run a single physics step and evaluate the outcome.
    ///
    /// Does nothing once the flight has ended. Returns the summary on the
    /// step that ends the flight.
    pub fn step(&mut self) -> Option<FlightSummary> {
        if !self.is_flying() {
            return None;
        }

        self.tick_count += 1;
        advance(&mut self.craft, self.hold.controls(), &self.params);
        self.hold.decay();

        let outcome = evaluate(&self.craft, &self.zone, &self.params)?;
        let summary = FlightSummary {
            outcome,
            fuel: self.craft.fuel,
            speed: self.craft.speed(),
            height: self.height(),
        };
        self.summary = Some(summary);
        self.flights_flown += 1;
        if outcome.is_success() {
            self.successful_landings += 1;
        }
        tracing::info!(
            outcome = outcome.label(),
            fuel = summary.fuel,
            speed = summary.speed,
            height = summary.height,
            ticks = self.tick_count,
            "flight ended"
        );
        Some(summary)
    }

    /// Advance by `dt_ms` of wall-clock time.
    ///
    /// Time is clamped to `MAX_FRAME_DT_MS` so a stall does not turn into a
    /// burst of steps. Leftover time below one step carries over to the next
    /// call; stepping stops as soon as the flight ends.
    pub fn tick(&mut self, dt_ms: u64) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_flying() {
            return report;
        }

        self.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);

        while self.accumulated_time_ms >= FRAME_MS {
            self.accumulated_time_ms -= FRAME_MS;
            report.steps += 1;
            if let Some(summary) = self.step() {
                report.finished = Some(summary);
                self.accumulated_time_ms = 0;
                break;
            }
        }

        report
    }
}

/// Apply a player input. Returns true if it started a new flight.
pub fn process_input<R: Rng>(session: &mut FlightSession, input: FlightInput, rng: &mut R) -> bool {
    if !session.is_flying() {
        if input == FlightInput::Retry {
            session.reset(rng);
            return true;
        }
        return false;
    }

    let hold = &mut session.hold;
    match input {
        FlightInput::ThrustOn => hold.thrust = INPUT_HOLD_TICKS,
        FlightInput::ThrustOff => hold.thrust = 0,
        FlightInput::RotateLeftOn => hold.rotate_left = INPUT_HOLD_TICKS,
        FlightInput::RotateLeftOff => hold.rotate_left = 0,
        FlightInput::RotateRightOn => hold.rotate_right = INPUT_HOLD_TICKS,
        FlightInput::RotateRightOff => hold.rotate_right = 0,
        FlightInput::Retry => {}
    }
    false
}
