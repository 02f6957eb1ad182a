use crate::auth::AdminAuth;
use crate::storage::{BlobStore, StoreEvents};

pub struct AppState {
    pub store: Box<dyn BlobStore>,
    pub auth: AdminAuth,
    pub events: StoreEvents,
}
