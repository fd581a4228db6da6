//! Transition audit trail.
//!
//! Appends one JSON line per controller state entry so a run's state
//! history can be replayed independently of the step log.

use serde::Serialize;
use sim_core::{ControllerState, Event};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to open audit log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append audit entry: {0}")]
    Write(#[from] std::io::Error),
}

/// A single audit entry: one state entry and the event that caused it.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionEntry {
    /// Monotonic timestamp in microseconds
    pub timestamp_us: u64,
    /// Wall-clock Unix timestamp in microseconds
    pub unix_us: u64,
    /// Scenario step during which the transition fired
    pub step: usize,
    pub from: ControllerState,
    pub to: ControllerState,
    pub event: Event,
}

/// Audit logger writing to a JSONL file. The driver is single-threaded,
/// so no interior locking is needed.
pub struct TransitionLogger {
    writer: BufWriter<File>,
}

impl TransitionLogger {
    /// Open the audit log in append mode, preserving earlier runs.
    pub fn new(path: &Path) -> Result<Self, AuditError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| AuditError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AuditError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            writer: BufWriter::with_capacity(8192, file),
        })
    }

    /// Append one entry and flush it.
    pub fn log(&mut self, entry: &TransitionEntry) -> Result<(), AuditError> {
        serde_json::to_writer(&mut self.writer, entry).map_err(std::io::Error::from)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
