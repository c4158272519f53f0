// src/routes/auth.rs
use astra::Body;
use http::request::Parts;
use log::{info, warn};
use maud::html;
use url::form_urlencoded;

use crate::app::{now_unix, App};
use crate::auth::context::SessionWriter;
use crate::auth::sessions::CurrentUser;
use crate::db::magic_auth::{redeem_magic_link, request_magic_link};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_response_with_status, redirect};
use crate::router::{form_field, is_htmx, parse_query, read_form};
use crate::routes::{read_session, SIGN_IN_PATH};
use crate::templates::pages::{check_email_content, check_email_page, login_page};

fn with_query(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}

pub fn sign_in_page(app: &App, parts: &Parts) -> ResultResp {
    if read_session(app, parts, now_unix())?.is_signed_in() {
        return redirect("/dashboard");
    }
    let query = parse_query(parts);
    html_response(login_page(query.get("error").map(String::as_str)))
}

pub fn request_link(app: &App, parts: &Parts, body: Body) -> ResultResp {
    let pairs = read_form(body)?;
    let email = form_field(&pairs, "email");

    let issued = match request_magic_link(&app.db, &app.magic_link_config(), email, now_unix()) {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(msg)) if is_htmx(parts) => {
            return html_response_with_status(
                422,
                html! { p class="errors" { "Please enter a valid email address (" (msg) ")." } },
            );
        }
        Err(e) => return Err(e),
    };

    app.mailer
        .send_magic_link(&issued.email, &app.cfg.absolute_url(&issued.link))?;

    if is_htmx(parts) {
        html_response(check_email_content(&issued.email))
    } else {
        redirect(&with_query("/auth/check-email", "email", &issued.email))
    }
}

pub fn check_email(parts: &Parts) -> ResultResp {
    let query = parse_query(parts);
    let email = query.get("email").map(String::as_str).unwrap_or("");
    html_response(check_email_page(email))
}

pub fn callback(app: &App, parts: &Parts) -> ResultResp {
    let now = now_unix();
    let query = parse_query(parts);

    let Some(token) = query.get("token").filter(|t| !t.trim().is_empty()) else {
        return redirect(&with_query(SIGN_IN_PATH, "error", "missing_code"));
    };

    let redeemed = match redeem_magic_link(&app.db, &app.magic_link_config(), token, now) {
        Ok(r) => r,
        Err(ServerError::Unauthorized(msg)) | Err(ServerError::BadRequest(msg)) => {
            warn!("magic link rejected: {msg}");
            return redirect(&with_query(SIGN_IN_PATH, "error", &msg));
        }
        Err(e) => return Err(e),
    };

    let reader = read_session(app, parts, now)?;
    let mut session = SessionWriter::new(reader, app.cookie_settings());
    let user = CurrentUser {
        id: redeemed.user_id,
        email: redeemed.email,
    };
    app.db.with_conn(|conn| session.sign_in(conn, user, now))?;
    if let Some(user) = session.reader().user() {
        info!("user {} signed in", user.id);
    }

    Ok(session.apply(redirect("/dashboard")?))
}

pub fn sign_out(app: &App, parts: &Parts) -> ResultResp {
    let now = now_unix();
    let reader = read_session(app, parts, now)?;
    if let Some(user) = reader.user() {
        info!("user {} signed out", user.id);
    }

    let mut session = SessionWriter::new(reader, app.cookie_settings());
    app.db.with_conn(|conn| session.sign_out(conn, now))?;
    Ok(session.apply(redirect("/")?))
}
