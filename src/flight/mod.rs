//! Lunar descent flight: physics model, landing evaluation and the flight
//! lifecycle that ties them to the frame clock.

pub mod logic;
pub mod outcome;
pub mod session;
pub mod types;

pub use session::{process_input, FlightInput, FlightSession, TickReport};
pub use types::{
    CraftState, FlightControls, FlightParams, FlightSummary, Landing, LandingZone, Outcome, Vec2,
};
