//! Assembler error types

use chrono::{DateTime, Utc};
use std::fmt;

/// Errors that can occur during query assembly
#[derive(Debug)]
pub enum AssembleError {
    /// Time range end precedes start
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Time range end {} precedes start {}", end, start)
            }
        }
    }
}

impl std::error::Error for AssembleError {}
