use uuid::Uuid;

use crate::models::{BookingFields, BookingRecord};
use crate::services::slots::{admit, Admission};
use crate::storage::{self, BlobStore, StoreEvents};

/// Admit a candidate against the stored collection and, when accepted,
/// assign an id, prepend it (newest first) and persist. Returns `None` when
/// the slot is already taken; nothing is written in that case.
///
/// The load-check-save sequence is not atomic: two requests racing on the
/// same slot can both be accepted, and the last write wins.
pub async fn add_booking(
    store: &dyn BlobStore,
    events: &StoreEvents,
    candidate: BookingFields,
) -> Option<BookingRecord> {
    let existing = storage::load_bookings(store).await;
    match admit(&existing, candidate) {
        Admission::SlotTaken => None,
        Admission::Accepted(fields) => {
            let record = fields.into_record(Uuid::new_v4().to_string());
            let mut bookings = existing;
            bookings.insert(0, record.clone());
            storage::save_bookings(store, events, &bookings).await;
            Some(record)
        }
    }
}

/// Remove a booking by id and persist. Returns false when the id is unknown.
pub async fn remove_booking(store: &dyn BlobStore, events: &StoreEvents, id: &str) -> bool {
    let mut bookings = storage::load_bookings(store).await;
    let before = bookings.len();
    bookings.retain(|booking| booking.id != id);
    if bookings.len() == before {
        return false;
    }
    storage::save_bookings(store, events, &bookings).await;
    true
}
