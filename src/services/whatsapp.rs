use regex::RegexBuilder;

use crate::models::BookingFields;
use crate::services::slots::{normalize_date, normalize_time};

const LABEL_NAME: &str = "Nama";
const LABEL_PHONE: &str = "No. WhatsApp";
const LABEL_DATE: &str = "Tanggal";
const LABEL_TIME: &str = "Jam";
const LABEL_SERVICE: &str = "Layanan";

/// Extract one labeled value from the message. The label is matched
/// case-insensitively with its metacharacters escaped (`No. WhatsApp`
/// contains a dot that must stay literal). A `*value*` emphasis form wins
/// over the bare rest-of-line form.
fn extract_field(text: &str, label: &str) -> Option<String> {
    let pattern = format!(
        r"{}\s*:\s*(?:\*([^*]+)\*|([^\n]+))",
        regex::escape(label)
    );
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;
    let captures = re.captures(text)?;
    let value = captures
        .get(1)
        .or_else(|| captures.get(2))?
        .as_str()
        .trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse the booking message a customer sends over WhatsApp. All five labels
/// must be present, in any order, and the labeled date and time must be
/// normalizable — a message whose date or time cannot be canonicalized is
/// rejected whole, unlike the lenient manual-entry path.
pub fn parse_booking_message(text: &str) -> Option<BookingFields> {
    if text.is_empty() {
        return None;
    }
    let text = text.replace('\r', "");

    let name = extract_field(&text, LABEL_NAME)?;
    let phone = extract_field(&text, LABEL_PHONE)?;
    let date = extract_field(&text, LABEL_DATE)?;
    let time = extract_field(&text, LABEL_TIME)?;
    let service = extract_field(&text, LABEL_SERVICE)?;

    let date = normalize_date(&date);
    let time = normalize_time(&time);
    if date.is_empty() || time.is_empty() {
        return None;
    }

    Some(BookingFields {
        name,
        phone,
        date,
        time,
        service,
    })
}
