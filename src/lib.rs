//! Lunar Descent - terminal lunar lander.
//!
//! The library exposes the flight model, outcome rules, records and
//! configuration for testing; the binary wires them to the terminal.

pub mod core;
pub mod flight;
pub mod input;
pub mod records;
pub mod utils;

pub use flight::{process_input, FlightInput, FlightParams, FlightSession, Outcome};
pub use records::{ResultsLog, TelemetrySink, TelemetrySnapshot};
pub use utils::Settings;
