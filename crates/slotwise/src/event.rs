//! Calendar events and meeting requests.
//!
//! Plain caller-owned data. The persistence or transport layer that feeds
//! the engine decodes its records into these types; the engine only reads
//! them.

use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A scheduled event occupying an interval of the day for a set of attendees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the event takes place. Flattened, so the wire shape is
    /// `{"start": .., "end": .., "attendees": [..]}`.
    #[serde(flatten)]
    pub when: Interval,
    /// Attendee ids committed to this event.
    #[serde(default)]
    pub attendees: HashSet<String>,
}

/// A request to schedule a new meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Minimum length of the meeting, in minutes. May exceed the day length,
    /// in which case no interval can ever satisfy the request.
    pub duration_minutes: u32,
    /// Attendees whose availability is required.
    #[serde(default)]
    pub mandatory: HashSet<String>,
    /// Attendees whose availability is preferred but not required. They are
    /// considered in the first resolution pass only.
    #[serde(default)]
    pub optional: HashSet<String>,
}

impl MeetingRequest {
    /// The union of mandatory and optional attendees.
    pub fn all_attendees(&self) -> HashSet<String> {
        self.mandatory.union(&self.optional).cloned().collect()
    }
}
