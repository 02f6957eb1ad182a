use serde::{Deserialize, Serialize};

/// A stored booking. `date` is `YYYY-MM-DD` and `time` is zero-padded
/// 24-hour `HH:MM` whenever normalization succeeded; otherwise the trimmed
/// original text is kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
}

/// Booking data before an id has been assigned — what the public form,
/// the manual admin form, and the WhatsApp parser all produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFields {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
}

impl BookingFields {
    pub fn into_record(self, id: String) -> BookingRecord {
        BookingRecord {
            id,
            name: self.name,
            phone: self.phone,
            date: self.date,
            time: self.time,
            service: self.service,
        }
    }
}
