//! # slotwise
//!
//! Attendee-aware meeting availability engine.
//!
//! Given the events already on a day's calendar and a meeting request (a
//! duration plus mandatory and optional attendees), slotwise computes every
//! interval of the day where the meeting fits. The engine is a pure
//! computation over minute-of-day intervals: it performs no I/O and owns no
//! state across calls, so it is safe to invoke concurrently.
//!
//! When no slot works for the full invite list, the resolver retries with
//! the mandatory attendees alone, so an over-booked optional attendee never
//! sinks the meeting.
//!
//! ## Modules
//!
//! - [`interval`] -- half-open minute-of-day ranges
//! - [`event`] -- calendar events and meeting requests
//! - [`freebusy`] -- busy-interval selection, merging, complementation
//! - [`query`] -- the availability resolver with the mandatory-only fallback
//! - [`error`] -- error types

pub mod error;
pub mod event;
pub mod freebusy;
pub mod interval;
pub mod query;

pub use error::SlotError;
pub use event::{Event, MeetingRequest};
pub use interval::{Interval, DAY_MINUTES};
pub use query::{find_meeting_times, open_slots};
