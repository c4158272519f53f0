pub mod auth;
pub mod dashboard;
pub mod home;
pub mod onboarding;
pub mod tasks;

use http::request::Parts;

use crate::app::App;
use crate::auth::context::SessionReader;
use crate::errors::ServerError;

pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// Who is signed in, for handlers that must not change the session.
pub fn read_session(app: &App, parts: &Parts, now: i64) -> Result<SessionReader, ServerError> {
    app.db
        .with_conn(|conn| SessionReader::from_headers(conn, &parts.headers, now))
}
