//! Compile-time tunables shared by the simulation, sinks and UI.

pub mod constants;

pub use constants::*;
