//! Free/busy pipeline stages.
//!
//! A full availability pass runs four stages: select the busy intervals for
//! an attendee set, merge them into a sorted disjoint cover, complement the
//! cover within the day, then drop gaps too short to hold the meeting. Each
//! stage consumes an immutable input and produces a fresh output sequence;
//! no stage mutates a collection it is iterating over.

use crate::event::Event;
use crate::interval::{Interval, DAY_MINUTES};
use std::collections::HashSet;

/// Intervals of every event that involves at least one of the given attendees.
///
/// No deduplication and no order guarantee; the merge stage handles both.
/// An empty attendee set selects nothing: with no one required, no event
/// blocks availability.
pub fn busy_intervals(events: &[Event], attendees: &HashSet<String>) -> Vec<Interval> {
    events
        .iter()
        .filter(|event| !event.attendees.is_disjoint(attendees))
        .map(|event| event.when)
        .collect()
}

/// Merge intervals into the minimal sorted disjoint cover of their union.
///
/// Sorts by (start, end), then sweeps left to right: while the next interval
/// starts strictly before the accumulated one ends, the two overlap and the
/// accumulator's end is extended; otherwise the accumulator is emitted and
/// the sweep restarts at the next interval. Intervals that merely touch stay
/// separate -- the zero-length free gap this leaves downstream is dropped by
/// [`filter_by_duration`].
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for next in intervals {
        if let Some(last) = merged.last_mut() {
            if next.start() < last.end() {
                if next.end() > last.end() {
                    *last = Interval::new_unchecked(last.start(), next.end());
                }
                continue;
            }
        }
        merged.push(next);
    }
    merged
}

/// Free gaps within the day around a sorted disjoint busy cover.
///
/// Emits the leading gap when the first busy interval starts after minute 0,
/// every gap between consecutive busy intervals -- including zero-length
/// gaps between touching intervals -- and the trailing gap when the last
/// busy interval ends before midnight. An empty cover yields the whole day.
///
/// The input must be sorted and disjoint, i.e. the output of
/// [`merge_intervals`].
pub fn complement(busy: &[Interval]) -> Vec<Interval> {
    let (Some(first), Some(last)) = (busy.first(), busy.last()) else {
        return vec![Interval::WHOLE_DAY];
    };

    let mut free = Vec::with_capacity(busy.len() + 1);
    if first.start() > 0 {
        free.push(Interval::new_unchecked(0, first.start()));
    }
    for pair in busy.windows(2) {
        free.push(Interval::new_unchecked(pair[0].end(), pair[1].start()));
    }
    if last.end() < DAY_MINUTES {
        free.push(Interval::new_unchecked(last.end(), DAY_MINUTES));
    }
    free
}

/// Keep only the intervals long enough to hold `min_minutes`, in order.
pub fn filter_by_duration(intervals: Vec<Interval>, min_minutes: u32) -> Vec<Interval> {
    intervals
        .into_iter()
        .filter(|interval| interval.duration() >= min_minutes)
        .collect()
}
