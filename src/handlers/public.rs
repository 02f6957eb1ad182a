use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingFields, BookingRecord, SiteContent};
use crate::services::bookings::add_booking;
use crate::services::slots::{normalize_date, normalize_time, occupied_slots};
use crate::state::AppState;
use crate::storage;

// GET /api/content
pub async fn get_content(State(state): State<Arc<AppState>>) -> Json<SiteContent> {
    Json(storage::load_content(state.store.as_ref()).await)
}

// GET /api/slots?date=...
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub times: Vec<String>,
}

/// Configured booking times minus the ones already taken on the requested
/// date. Without a date the full configured list comes back.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Json<SlotsResponse> {
    let content = storage::load_content(state.store.as_ref()).await;
    let date = normalize_date(query.date.as_deref().unwrap_or(""));

    if date.is_empty() {
        return Json(SlotsResponse {
            date,
            times: content.booking.times,
        });
    }

    let bookings = storage::load_bookings(state.store.as_ref()).await;
    let occupied = occupied_slots(&bookings);
    let times = content
        .booking
        .times
        .into_iter()
        .filter(|time| {
            occupied
                .get(&date)
                .map(|taken| !taken.contains(&normalize_time(time)))
                .unwrap_or(true)
        })
        .collect();

    Json(SlotsResponse { date, times })
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<BookingFields>,
) -> Result<(StatusCode, Json<BookingRecord>), AppError> {
    match add_booking(state.store.as_ref(), &state.events, fields).await {
        Some(record) => Ok((StatusCode::CREATED, Json(record))),
        None => Err(AppError::SlotTaken),
    }
}
