//! WASM bindings for slotwise.
//!
//! Exposes the availability resolver and the free/busy pipeline to
//! JavaScript via `wasm-bindgen`. All complex types cross the boundary as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slotwise-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slotwise-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slotwise_wasm.wasm
//! ```

use serde::Serialize;
use slotwise::freebusy::{busy_intervals, merge_intervals};
use slotwise::{Event, Interval, MeetingRequest};
use std::collections::HashSet;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Output shape for a free slot: flat bounds plus the derived length, so
/// JavaScript callers need no minute arithmetic.
#[derive(Serialize)]
struct SlotDto {
    start: u32,
    end: u32,
    duration_minutes: u32,
}

impl From<&Interval> for SlotDto {
    fn from(interval: &Interval) -> Self {
        Self {
            start: interval.start(),
            end: interval.end(),
            duration_minutes: interval.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs, serialize JSON outputs
// ---------------------------------------------------------------------------

/// Parse a JSON array of `{start, end, attendees}` objects into events.
///
/// Interval bounds are re-validated during decoding, so malformed ranges are
/// reported here rather than producing wrong answers downstream.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

/// Parse a JSON array of attendee id strings.
fn parse_attendees_json(json: &str) -> Result<HashSet<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid attendees JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot of the day where the requested meeting fits.
///
/// `events_json` must be a JSON array of `{start, end, attendees}` objects
/// with minute-of-day bounds. `request_json` must be a
/// `{duration_minutes, mandatory, optional}` object; the attendee arrays may
/// be omitted. Returns a JSON array of `{start, end, duration_minutes}`
/// objects, sorted by start.
///
/// When no slot works for the combined attendee set and mandatory attendees
/// exist, the result comes from the mandatory-only fallback pass.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request: MeetingRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    let slots = slotwise::find_meeting_times(&events, &request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Free intervals of at least `min_duration` minutes for one attendee set.
///
/// A single pipeline pass with no fallback policy. `attendees_json` must be
/// a JSON array of attendee id strings. Returns a JSON array of
/// `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "openSlots")]
pub fn open_slots(
    events_json: &str,
    attendees_json: &str,
    min_duration: u32,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let attendees = parse_attendees_json(attendees_json)?;

    let slots = slotwise::open_slots(&events, &attendees, min_duration);

    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Merged busy cover for an attendee set.
///
/// Returns a JSON array of `{start, end}` objects: the sorted disjoint
/// cover of every interval during which at least one of the given attendees
/// is committed to an event.
#[wasm_bindgen(js_name = "mergedBusy")]
pub fn merged_busy(events_json: &str, attendees_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let attendees = parse_attendees_json(attendees_json)?;

    let busy = merge_intervals(busy_intervals(&events, &attendees));
    to_json(&busy)
}
