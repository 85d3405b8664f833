//! Flight records written outside the game: the results log and the live
//! telemetry snapshot. Both are best-effort sinks.

pub mod results;
pub mod telemetry;

pub use results::ResultsLog;
pub use telemetry::{TelemetrySink, TelemetrySnapshot};
