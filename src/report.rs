use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use csv::Writer;
use serde_derive::{Deserialize, Serialize};

use crate::error::ContagionError;
use crate::simulation::StateCounts;

/// One row of the daily prevalence report.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct PrevalenceRow {
    pub day: u32,
    pub healthy: usize,
    pub asymptomatic: usize,
    pub symptomatic: usize,
    pub dead: usize,
}

/// CSV report of the population census per simulated day.
#[derive(Debug)]
pub struct PrevalenceReport {
    writer: Writer<File>,
}

impl PrevalenceReport {
    /// Creates the report file, along with any missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` if the path does not end in `.csv` or the
    /// file cannot be created.
    pub fn create(path: &Path) -> Result<PrevalenceReport, ContagionError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("csv") => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        create_dir_all(parent)?;
                    }
                }
                let file = File::create(path)?;
                Ok(PrevalenceReport {
                    writer: Writer::from_writer(file),
                })
            }
            _ => Err(ContagionError::ReportError(
                "report output files must be CSVs".to_string(),
            )),
        }
    }

    /// Writes and flushes one census row.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` if serialization or the write fails.
    pub fn record(&mut self, day: u32, counts: &StateCounts) -> Result<(), ContagionError> {
        self.writer.serialize(PrevalenceRow {
            day,
            healthy: counts.healthy,
            asymptomatic: counts.asymptomatic,
            symptomatic: counts.symptomatic,
            dead: counts.dead,
        })?;
        self.writer.flush()?;
        Ok(())
    }
}
