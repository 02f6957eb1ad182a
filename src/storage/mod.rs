use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::models::content::PartialSiteContent;
use crate::models::{BookingRecord, SiteContent};
use crate::services::slots::{normalize_date, normalize_time};

pub const CONTENT_KEY: &str = "beneficial-content";
pub const BOOKINGS_KEY: &str = "beneficial-bookings";

/// Key-value persistence capability. Reads yield `None` on any failure and
/// writes report success as a bool; neither surfaces an error to callers —
/// storage trouble degrades to defaults, it never takes the site down.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn load(&self, key: &str) -> Option<String>;
    async fn save(&self, key: &str, value: &str) -> bool;
}

/// Default backend: one JSON file per key under the data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl BlobStore for JsonFileStore {
    async fn load(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read blob");
                None
            }
        }
    }

    async fn save(&self, key: &str, value: &str) -> bool {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(error = %e, "failed to create data directory");
            return false;
        }
        match std::fs::write(self.path(key), value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to write blob");
                false
            }
        }
    }
}

/// In-memory backend used by tests.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn load(&self, key: &str) -> Option<String> {
        self.blobs.lock().unwrap().get(key).cloned()
    }

    async fn save(&self, key: &str, value: &str) -> bool {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }
}

/// Change notification for other listeners (the admin panel's SSE stream).
/// Best-effort: subscribers reload the full blob on receipt, there is no
/// payload and no delivery guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreEvent {
    ContentUpdated,
    BookingsUpdated,
}

pub struct StoreEvents {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Subscribing hands back a receiver; dropping it unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: StoreEvent) {
        // No receivers is fine — nobody is listening right now.
        let _ = self.tx.send(event);
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

fn normalized(mut booking: BookingRecord) -> BookingRecord {
    booking.date = normalize_date(&booking.date);
    booking.time = normalize_time(&booking.time);
    booking
}

/// Load the booking list, newest first. Missing or corrupt data yields an
/// empty list; stored date/time text is re-normalized on the way in.
pub async fn load_bookings(store: &dyn BlobStore) -> Vec<BookingRecord> {
    let Some(raw) = store.load(BOOKINGS_KEY).await else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<BookingRecord>>(&raw) {
        Ok(bookings) => bookings.into_iter().map(normalized).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "stored bookings are corrupt, starting empty");
            Vec::new()
        }
    }
}

pub async fn save_bookings(
    store: &dyn BlobStore,
    events: &StoreEvents,
    bookings: &[BookingRecord],
) {
    let normalized: Vec<BookingRecord> = bookings.iter().cloned().map(normalized).collect();
    let raw = match serde_json::to_string(&normalized) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize bookings");
            return;
        }
    };
    if store.save(BOOKINGS_KEY, &raw).await {
        events.publish(StoreEvent::BookingsUpdated);
    }
}

/// Load the site content merged over the built-in defaults. Missing or
/// corrupt data yields the defaults unchanged.
pub async fn load_content(store: &dyn BlobStore) -> SiteContent {
    let Some(raw) = store.load(CONTENT_KEY).await else {
        return SiteContent::default();
    };
    match serde_json::from_str::<PartialSiteContent>(&raw) {
        Ok(partial) => SiteContent::merged(partial),
        Err(e) => {
            tracing::warn!(error = %e, "stored content is corrupt, using defaults");
            SiteContent::default()
        }
    }
}

pub async fn save_content(store: &dyn BlobStore, events: &StoreEvents, content: &SiteContent) {
    let raw = match serde_json::to_string(content) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize content");
            return;
        }
    };
    if store.save(CONTENT_KEY, &raw).await {
        events.publish(StoreEvent::ContentUpdated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_bookings_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(load_bookings(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_bookings_corrupt_is_empty() {
        let store = MemoryStore::new();
        store.save(BOOKINGS_KEY, "{not json").await;
        assert!(load_bookings(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_bookings_round_trip_normalizes() {
        let store = MemoryStore::new();
        let events = StoreEvents::new();
        let bookings = vec![BookingRecord {
            id: "b-1".to_string(),
            name: "Budi".to_string(),
            phone: "0812".to_string(),
            date: "5/3/2025".to_string(),
            time: "9:00".to_string(),
            service: "Fade".to_string(),
        }];
        save_bookings(&store, &events, &bookings).await;

        let loaded = load_bookings(&store).await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, "2025-03-05");
        assert_eq!(loaded[0].time, "09:00");
    }

    #[tokio::test]
    async fn test_load_content_missing_is_default() {
        let store = MemoryStore::new();
        assert_eq!(load_content(&store).await, SiteContent::default());
    }

    #[tokio::test]
    async fn test_load_content_partial_is_merged() {
        let store = MemoryStore::new();
        store
            .save(
                CONTENT_KEY,
                r#"{"footer":{"map_url":"m","address":"a","instagram":"i","tiktok":"t"}}"#,
            )
            .await;
        let content = load_content(&store).await;
        assert_eq!(content.footer.address, "a");
        assert_eq!(content.hero, SiteContent::default().hero);
    }

    #[tokio::test]
    async fn test_save_publishes_event() {
        let store = MemoryStore::new();
        let events = StoreEvents::new();
        let mut rx = events.subscribe();
        save_content(&store, &events, &SiteContent::default()).await;
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::ContentUpdated);
    }

    #[tokio::test]
    async fn test_file_store_missing_key() {
        let store = JsonFileStore::new(std::env::temp_dir().join("beneficial-test-none"));
        assert!(store.load("absent").await.is_none());
    }
}
