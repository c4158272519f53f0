use astra::{Body, Request};
use http::request::Parts;
use std::collections::HashMap;
use std::io::Read;

use crate::app::App;
use crate::errors::{ResultResp, ServerError};
use crate::routes;

/// Form bodies larger than this are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();

    match (method, path) {
        ("GET", "/") => routes::home::show(app, &parts),

        ("GET", "/auth/sign-in") => routes::auth::sign_in_page(app, &parts),
        ("POST", "/auth/request-link") => routes::auth::request_link(app, &parts, body),
        ("GET", "/auth/check-email") => routes::auth::check_email(&parts),
        ("GET", "/auth/callback") => routes::auth::callback(app, &parts),
        ("POST", "/auth/sign-out") => routes::auth::sign_out(app, &parts),

        ("GET", "/onboarding") => routes::onboarding::show(app, &parts),
        ("POST", "/onboarding") => routes::onboarding::submit(app, &parts, body),

        ("GET", "/dashboard") => routes::dashboard::show(app, &parts),

        _ => match (method, task_route(path)) {
            ("GET", Some((id, None))) => routes::tasks::show(app, &parts, id),
            ("POST", Some((id, Some("status")))) => {
                routes::tasks::update_status(app, &parts, body, id)
            }
            _ => Err(ServerError::NotFound),
        },
    }
}

/// `/tasks/{id}` and `/tasks/{id}/{action}`.
fn task_route(path: &str) -> Option<(i64, Option<&str>)> {
    let rest = path.strip_prefix("/tasks/")?;
    let mut parts = rest.splitn(2, '/');
    let id = parts.next()?.parse().ok()?;
    match parts.next() {
        None => Some((id, None)),
        Some(action) if !action.is_empty() && !action.contains('/') => Some((id, Some(action))),
        Some(_) => None,
    }
}

/// Decoded query string. Later keys overwrite earlier ones.
pub fn parse_query(parts: &Parts) -> HashMap<String, String> {
    parts
        .uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Decoded `application/x-www-form-urlencoded` body, repeated keys kept.
pub fn read_form(mut body: Body) -> Result<Vec<(String, String)>, ServerError> {
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

/// First value of a form field, or "".
pub fn form_field<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

pub fn is_htmx(parts: &Parts) -> bool {
    parts.headers.get("HX-Request").is_some_and(|v| v == "true")
}
