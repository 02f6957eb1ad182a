use std::sync::Arc;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::session::{clear_session_cookie, session_cookie};
use crate::state::AppState;

static LOGIN_HTML: &str = include_str!("../web/login.html");

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

#[derive(Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub key: String,
}

// POST /api/admin/login
//
// The body is taken as a raw string so a malformed JSON payload degrades to
// an empty submission, which fails verification like any other bad key.
pub async fn login(State(state): State<Arc<AppState>>, body: String) -> Response {
    let request: LoginRequest = serde_json::from_str(&body).unwrap_or_default();

    if !state.auth.verify(&request.key) {
        tracing::info!("admin login rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "Kredensial salah"})),
        )
            .into_response();
    }

    tracing::info!("admin login accepted");
    let mut response = Json(serde_json::json!({"ok": true})).into_response();
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_str(&session_cookie()).expect("session cookie header"),
    );
    response
}

// POST /api/admin/logout — always succeeds, clears the marker.
pub async fn logout() -> Response {
    let mut response = Json(serde_json::json!({"ok": true})).into_response();
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_str(&clear_session_cookie()).expect("logout cookie header"),
    );
    response
}
