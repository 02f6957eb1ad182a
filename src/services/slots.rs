use std::collections::{HashMap, HashSet};

use crate::models::{BookingFields, BookingRecord};

/// Canonicalize a booking date into `YYYY-MM-DD`. Accepts dates already in
/// canonical form, day-first slash dates (`5/3/2025`, `05/03/2025`) and
/// compact `YYYYMMDD` digits. Anything else is returned trimmed but
/// unchanged — normalization is best-effort and purely syntactic, so
/// impossible calendar dates pass through untouched.
pub fn normalize_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if is_canonical_date(trimmed) {
        return trimmed.to_string();
    }

    if let Some((day, month, year)) = split_slash_date(trimmed) {
        return format!("{year}-{month:0>2}-{day:0>2}");
    }

    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{}-{}-{}", &trimmed[..4], &trimmed[4..6], &trimmed[6..8]);
    }

    trimmed.to_string()
}

/// Canonicalize a booking time into zero-padded 24-hour `HH:MM`. Only the
/// `H:MM`/`HH:MM` shape is recognized; anything else is returned trimmed.
pub fn normalize_time(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some((hour, minutes)) = trimmed.split_once(':') {
        let hour_ok = !hour.is_empty() && hour.len() <= 2 && hour.bytes().all(|b| b.is_ascii_digit());
        let minutes_ok = minutes.len() == 2 && minutes.bytes().all(|b| b.is_ascii_digit());
        if hour_ok && minutes_ok {
            return format!("{hour:0>2}:{minutes}");
        }
    }

    trimmed.to_string()
}

fn is_canonical_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

fn split_slash_date(s: &str) -> Option<(&str, &str, &str)> {
    let mut parts = s.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let day_ok = (1..=2).contains(&day.len()) && day.bytes().all(|b| b.is_ascii_digit());
    let month_ok = (1..=2).contains(&month.len()) && month.bytes().all(|b| b.is_ascii_digit());
    let year_ok = year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit());
    (day_ok && month_ok && year_ok).then_some((day, month, year))
}

/// Build the occupied-slot index: normalized date → set of normalized times.
/// Records whose date or time normalizes to empty are left out entirely.
/// Derived on every read, never persisted.
pub fn occupied_slots(bookings: &[BookingRecord]) -> HashMap<String, HashSet<String>> {
    let mut slots: HashMap<String, HashSet<String>> = HashMap::new();
    for booking in bookings {
        let date = normalize_date(&booking.date);
        let time = normalize_time(&booking.time);
        if date.is_empty() || time.is_empty() {
            continue;
        }
        slots.entry(date).or_default().insert(time);
    }
    slots
}

pub fn is_slot_taken(slots: &HashMap<String, HashSet<String>>, date: &str, time: &str) -> bool {
    let date = normalize_date(date);
    let time = normalize_time(time);
    slots
        .get(&date)
        .map(|times| times.contains(&time))
        .unwrap_or(false)
}

#[derive(Debug, PartialEq)]
pub enum Admission {
    /// Candidate with date/time normalized; the caller assigns an id and
    /// appends it to the collection.
    Accepted(BookingFields),
    SlotTaken,
}

/// Decide whether a candidate booking may be accepted. Exact-match collision
/// on the normalized (date, time) pair only — each slot holds at most one
/// booking regardless of how it was entered. Pure decision, no mutation.
pub fn admit(existing: &[BookingRecord], candidate: BookingFields) -> Admission {
    let normalized = BookingFields {
        name: candidate.name.trim().to_string(),
        phone: candidate.phone.trim().to_string(),
        date: normalize_date(&candidate.date),
        time: normalize_time(&candidate.time),
        service: candidate.service.trim().to_string(),
    };

    let slots = occupied_slots(existing);
    if is_slot_taken(&slots, &normalized.date, &normalized.time) {
        return Admission::SlotTaken;
    }

    Admission::Accepted(normalized)
}
