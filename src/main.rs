use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use beneficial::auth::AdminAuth;
use beneficial::config::AppConfig;
use beneficial::handlers;
use beneficial::session;
use beneficial::state::AppState;
use beneficial::storage::{JsonFileStore, StoreEvents};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let auth = AdminAuth::from_config(&config);
    let store = JsonFileStore::new(&config.data_dir);

    let state = Arc::new(AppState {
        store: Box::new(store),
        auth,
        events: StoreEvents::new(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/content", get(handlers::public::get_content))
        .route("/api/slots", get(handlers::public::get_slots))
        .route("/api/bookings", post(handlers::public::create_booking))
        .route("/admin", get(handlers::admin::admin_page))
        .route("/admin/login", get(handlers::auth::login_page))
        .route("/api/admin/login", post(handlers::auth::login))
        .route("/api/admin/logout", post(handlers::auth::logout))
        .route("/api/admin/content", get(handlers::admin::get_content))
        .route("/api/admin/content", post(handlers::admin::update_content))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route("/api/admin/bookings", post(handlers::admin::create_booking))
        .route(
            "/api/admin/bookings/import",
            post(handlers::admin::import_booking),
        )
        .route(
            "/api/admin/bookings/:id/delete",
            post(handlers::admin::delete_booking),
        )
        .route("/api/admin/events", get(handlers::admin::events_stream))
        .layer(middleware::from_fn(session::guard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
