//! Destinations for booked meetings.
//!
//! A sink receives each successfully validated [`Meeting`] and records it.
//! Saving has no return value and is assumed to succeed; implementations
//! that can fail internally report the failure through `tracing`.

use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::core::Meeting;

/// Records finished meetings.
pub trait MeetingSink {
    fn save(&self, meeting: &Meeting);
}

/// Logs every saved meeting at `info`, with its summary line and a JSON
/// record in the `record` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl MeetingSink for TracingSink {
    fn save(&self, meeting: &Meeting) {
        let summary = meeting.summary();
        match serde_json::to_string(meeting) {
            Ok(record) => info!(%record, "saving meeting: {summary}"),
            Err(error) => warn!(%error, "saving meeting without record: {summary}"),
        }
    }
}

/// Keeps saved meetings in memory, in save order.
#[derive(Debug, Default)]
pub struct MemorySink {
    meetings: Mutex<Vec<Meeting>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far.
    pub fn saved(&self) -> Vec<Meeting> {
        self.meetings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MeetingSink for MemorySink {
    fn save(&self, meeting: &Meeting) {
        self.meetings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(meeting.clone());
    }
}
