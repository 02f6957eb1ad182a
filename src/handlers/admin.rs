use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::errors::AppError;
use crate::models::{
    BookingContent, BookingFields, BookingRecord, FooterContent, GalleryItem, HeroContent,
    ServiceItem, SiteContent,
};
use crate::services::bookings::{add_booking, remove_booking};
use crate::services::whatsapp::parse_booking_message;
use crate::state::AppState;
use crate::storage;

static ADMIN_HTML: &str = include_str!("../web/admin.html");

pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}

// GET /api/admin/content
pub async fn get_content(State(state): State<Arc<AppState>>) -> Json<SiteContent> {
    Json(storage::load_content(state.store.as_ref()).await)
}

// POST /api/admin/content
//
// Whole sections only; there is no field-by-path mutation. Absent sections
// stay as they are.
#[derive(Deserialize, Default)]
pub struct ContentUpdate {
    pub hero: Option<HeroContent>,
    pub services: Option<Vec<ServiceItem>>,
    pub gallery: Option<Vec<GalleryItem>>,
    pub footer: Option<FooterContent>,
    pub booking: Option<BookingContent>,
}

pub async fn update_content(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ContentUpdate>,
) -> Json<SiteContent> {
    let mut content = storage::load_content(state.store.as_ref()).await;

    if let Some(hero) = update.hero {
        content.set_hero(hero);
    }
    if let Some(services) = update.services {
        content.set_services(services);
    }
    if let Some(gallery) = update.gallery {
        content.set_gallery(gallery);
    }
    if let Some(footer) = update.footer {
        content.set_footer(footer);
    }
    if let Some(booking) = update.booking {
        content.set_booking(booking);
    }

    storage::save_content(state.store.as_ref(), &state.events, &content).await;
    Json(content)
}

// GET /api/admin/bookings
pub async fn get_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<BookingRecord>> {
    Json(storage::load_bookings(state.store.as_ref()).await)
}

// POST /api/admin/bookings — manual entry; un-normalizable date/time text is
// kept verbatim rather than rejected.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<BookingFields>,
) -> Result<(StatusCode, Json<BookingRecord>), AppError> {
    match add_booking(state.store.as_ref(), &state.events, fields).await {
        Some(record) => Ok((StatusCode::CREATED, Json(record))),
        None => Err(AppError::SlotTaken),
    }
}

// POST /api/admin/bookings/import — paste of a customer's WhatsApp message.
#[derive(Deserialize)]
pub struct ImportRequest {
    pub text: String,
}

pub async fn import_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ImportRequest>,
) -> Result<(StatusCode, Json<BookingRecord>), AppError> {
    let fields = parse_booking_message(&body.text).ok_or(AppError::UnparseableBooking)?;
    match add_booking(state.store.as_ref(), &state.events, fields).await {
        Some(record) => Ok((StatusCode::CREATED, Json(record))),
        None => Err(AppError::SlotTaken),
    }
}

// POST /api/admin/bookings/:id/delete
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if remove_booking(state.store.as_ref(), &state.events, &id).await {
        Ok(Json(serde_json::json!({"ok": true})))
    } else {
        Err(AppError::NotFound(format!("booking {id}")))
    }
}

// GET /api/admin/events — change feed so an open admin panel can reload
// content or bookings edited elsewhere.
pub async fn events_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|event| {
        let name = match event {
            Ok(storage::StoreEvent::ContentUpdated) => "content",
            Ok(storage::StoreEvent::BookingsUpdated) => "bookings",
            // Lagged receivers just miss a tick; the next event catches
            // them up since listeners reload the whole blob anyway.
            Err(_) => return None,
        };
        Some(Ok(Event::default().event(name).data("update")))
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(30)))
}
