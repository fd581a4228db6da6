//! CSV step log.
//!
//! One row per executed step: `step,speed,state,events` with speed
//! printed to six fixed decimal places and events `|`-joined.

use sim_core::StepTrace;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to open step log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write step log: {0}")]
    Write(#[from] std::io::Error),
}

/// Buffered CSV sink. Rows are flushed once at the end of the run.
#[derive(Debug)]
pub struct CsvLogger {
    writer: BufWriter<File>,
}

impl CsvLogger {
    /// Create (truncate) the log and write the header row.
    pub fn create(path: &Path) -> Result<Self, RecordError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| RecordError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = File::create(path).map_err(|source| RecordError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "step,speed,state,events")?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, trace: &StepTrace) -> Result<(), RecordError> {
        writeln!(
            self.writer,
            "{},{:.6},{},{}",
            trace.step,
            trace.speed,
            trace.state,
            trace.events_joined()
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RecordError> {
        self.writer.flush()?;
        Ok(())
    }
}
