//! The availability resolver.
//!
//! Runs the free/busy pipeline for the combined attendee set, and falls back
//! to the mandatory-only set when including optional attendees leaves no
//! slot. A two-state decision: the second pass runs only when the first
//! yields nothing and a fallback is meaningful. No further branching.

use crate::error::{Result, SlotError};
use crate::event::{Event, MeetingRequest};
use crate::freebusy::{busy_intervals, complement, filter_by_duration, merge_intervals};
use crate::interval::Interval;
use std::collections::HashSet;

/// Free intervals of at least `min_minutes` for one attendee set.
///
/// A single pipeline pass. The result is sorted ascending by start, pairwise
/// non-overlapping, and every element is at least `min_minutes` long. An
/// empty result means no slot exists; it is not an error.
pub fn open_slots(
    events: &[Event],
    attendees: &HashSet<String>,
    min_minutes: u32,
) -> Vec<Interval> {
    let busy = merge_intervals(busy_intervals(events, attendees));
    filter_by_duration(complement(&busy), min_minutes)
}

/// All intervals of the day where the requested meeting fits.
///
/// Tries the combined mandatory and optional attendee set first. When that
/// pass leaves no slot and at least one mandatory attendee exists, reruns
/// with the mandatory set alone. With no mandatory attendees there is no
/// fallback to attempt, so the first answer stands even when empty.
///
/// # Errors
///
/// Returns `SlotError::InvalidRequest` when `duration_minutes` is zero,
/// before any computation. A duration longer than the day is not an error;
/// it yields an empty result through the duration filter.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Result<Vec<Interval>> {
    if request.duration_minutes == 0 {
        return Err(SlotError::InvalidRequest(
            "meeting duration must be at least one minute".to_string(),
        ));
    }

    let everyone = request.all_attendees();
    let with_optional = open_slots(events, &everyone, request.duration_minutes);
    if !with_optional.is_empty() || request.mandatory.is_empty() {
        return Ok(with_optional);
    }

    Ok(open_slots(
        events,
        &request.mandatory,
        request.duration_minutes,
    ))
}
