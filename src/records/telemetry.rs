//! Live telemetry snapshot: one JSON document rewritten every frame while a
//! flight is in progress, for consumption by an external process.

use crate::core::constants::{EMPTY_MASS, FUEL_UNIT_MASS};
use crate::flight::FlightSession;
use crate::utils::persistence::write_json_atomic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub timestamp: DateTime<Utc>,
    /// Configured thrust magnitude.
    pub thrust: f64,
    pub gravity: f64,
    pub empty_mass: f64,
    /// Mass of the remaining fuel.
    pub fuel_mass: f64,
    /// Fuel burned per step while thrusting.
    pub fuel_consumption: f64,
    /// Positive is downward.
    pub vertical_speed: f64,
    pub horizontal_speed: f64,
    /// Degrees, counter-clockwise from upright.
    pub heading: f64,
    pub y: f64,
    pub x: f64,
}

impl TelemetrySnapshot {
    pub fn capture(session: &FlightSession, timestamp: DateTime<Utc>) -> Self {
        let craft = &session.craft;
        let params = &session.params;
        Self {
            timestamp,
            thrust: params.thrust,
            gravity: params.gravity,
            empty_mass: EMPTY_MASS,
            fuel_mass: craft.fuel * FUEL_UNIT_MASS,
            fuel_consumption: params.fuel_consumption,
            vertical_speed: craft.velocity.y,
            horizontal_speed: craft.velocity.x,
            heading: craft.heading,
            y: craft.position.y,
            x: craft.position.x,
        }
    }
}

/// Last-write-wins file holding the most recent snapshot.
pub struct TelemetrySink {
    path: PathBuf,
}

impl TelemetrySink {
    /// Create the sink, making sure the parent directory exists.
    pub fn new(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, snapshot: &TelemetrySnapshot) -> io::Result<()> {
        write_json_atomic(&self.path, snapshot)
    }

    pub fn read(&self) -> io::Result<TelemetrySnapshot> {
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::FlightParams;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> FlightSession {
        FlightSession::new(FlightParams::default(), &mut ChaCha8Rng::seed_from_u64(1))
    }

    #[test]
    fn test_capture_reads_session() {
        let mut session = session();
        session.craft = session
            .craft
            .clone()
            .with_position(120.0, 340.0)
            .with_velocity(-1.5, 0.25)
            .with_heading(30.0)
            .with_fuel(200.0);

        let snapshot = TelemetrySnapshot::capture(&session, Utc::now());

        assert_eq!(snapshot.x, 120.0);
        assert_eq!(snapshot.y, 340.0);
        assert_eq!(snapshot.horizontal_speed, -1.5);
        assert_eq!(snapshot.vertical_speed, 0.25);
        assert_eq!(snapshot.heading, 30.0);
        assert_eq!(snapshot.fuel_mass, 200.0 * FUEL_UNIT_MASS);
        assert_eq!(snapshot.empty_mass, EMPTY_MASS);
        assert_eq!(snapshot.thrust, session.params.thrust);
        assert_eq!(snapshot.gravity, session.params.gravity);
        assert_eq!(snapshot.fuel_consumption, session.params.fuel_consumption);
    }

    #[test]
    fn test_json_field_names() {
        let snapshot = TelemetrySnapshot::capture(&session(), Utc::now());
        let value = serde_json::to_value(&snapshot).unwrap();
        for key in [
            "timestamp",
            "thrust",
            "gravity",
            "empty_mass",
            "fuel_mass",
            "fuel_consumption",
            "vertical_speed",
            "horizontal_speed",
            "heading",
            "y",
            "x",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_last_write_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = TelemetrySink::new(tmp.path().join("telemetry.json")).unwrap();
        let mut session = session();

        sink.write(&TelemetrySnapshot::capture(&session, Utc::now()))
            .unwrap();
        session.step();
        let latest = TelemetrySnapshot::capture(&session, Utc::now());
        sink.write(&latest).unwrap();

        let read = sink.read().unwrap();
        assert_eq!(read.timestamp, latest.timestamp);
        assert!((read.x - latest.x).abs() < 1e-9);
        assert!((read.y - latest.y).abs() < 1e-9);
        assert!((read.vertical_speed - latest.vertical_speed).abs() < 1e-9);
    }

    #[test]
    fn test_read_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = TelemetrySink::new(tmp.path().join("telemetry.json")).unwrap();
        assert!(sink.read().is_err());
    }
}
