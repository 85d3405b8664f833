//! Append-only results log: one human-readable line per finished flight.

use crate::flight::FlightSummary;
use chrono::{DateTime, Local, TimeZone};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the line for `summary`, stamped with the current local time.
    pub fn record(&self, summary: &FlightSummary) -> io::Result<()> {
        self.record_at(summary, Local::now())
    }

    pub fn record_at<Tz: TimeZone>(
        &self,
        summary: &FlightSummary,
        time: DateTime<Tz>,
    ) -> io::Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_line(summary, time))
    }
}

/// `Time: 2026-10-19 14:03:11, Fuel: 912.00, Speed: 0.74, Height: 1.93, Successful landing!`
pub fn format_line<Tz: TimeZone>(summary: &FlightSummary, time: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "Time: {}, Fuel: {:.2}, Speed: {:.2}, Height: {:.2}, {}",
        time.format("%Y-%m-%d %H:%M:%S"),
        summary.fuel,
        summary.speed,
        summary.height,
        summary.outcome.label()
    )
}
