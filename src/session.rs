use axum::body::Body;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

pub const SESSION_COOKIE: &str = "admin_auth";
pub const LOGIN_PATH: &str = "/admin/login";

const SESSION_VALUE: &str = "1";
const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Set-Cookie value issued after a successful login. The marker is an opaque
/// flag, not a token: it carries no identity and expires with the cookie.
pub fn session_cookie() -> String {
    format!(
        "{SESSION_COOKIE}={SESSION_VALUE}; Path=/admin; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"
    )
}

/// Set-Cookie value that clears the marker immediately.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/admin; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .any(|raw| cookie_from_header(raw, SESSION_COOKIE) == Some(SESSION_VALUE))
}

fn cookie_from_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let trimmed = part.trim();
        if let Some((cookie_name, cookie_value)) = trimmed.split_once('=') {
            if cookie_name == name {
                return Some(cookie_value);
            }
        }
    }
    None
}

#[derive(Debug, PartialEq)]
pub enum GateDecision {
    Allow,
    Redirect(String),
}

fn is_guarded(path: &str) -> bool {
    if path.starts_with(LOGIN_PATH) {
        return false;
    }
    if path.starts_with("/api/admin/login") || path.starts_with("/api/admin/logout") {
        return false;
    }
    path.starts_with("/admin") || path.starts_with("/api/admin")
}

/// Per-request gate decision. Guarded paths require the session marker; the
/// login page, the login submission endpoint and the logout endpoint always
/// pass. Unauthenticated requests are bounced to the login page with the
/// original path carried in the `redirect` parameter.
pub fn decide(path: &str, has_marker: bool) -> GateDecision {
    if !is_guarded(path) || has_marker {
        return GateDecision::Allow;
    }
    GateDecision::Redirect(format!("{LOGIN_PATH}?redirect={path}"))
}

pub async fn guard(req: Request<Body>, next: Next) -> Response {
    match decide(req.uri().path(), has_session(req.headers())) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect(target) => Redirect::to(&target).into_response(),
    }
}
