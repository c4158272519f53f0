// src/auth/context.rs
//
// Per-request identity. Handlers that only need to know who is signed in get
// a `SessionReader`; only handlers that sign in or out get a `SessionWriter`.

use astra::Response;
use http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use log::warn;
use rusqlite::Connection;

use crate::auth::sessions::{self, CurrentUser};
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "conciera_session";

/// Value of cookie `name` from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// Read-only view of the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionReader {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl SessionReader {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_headers(
        conn: &Connection,
        headers: &HeaderMap,
        now: i64,
    ) -> Result<Self, ServerError> {
        let Some(token) = cookie_value(headers, SESSION_COOKIE).filter(|t| !t.is_empty()) else {
            return Ok(Self::anonymous());
        };
        let user = sessions::load_user_from_session(conn, &token, now)?;
        Ok(Self {
            token: Some(token),
            user,
        })
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age_secs: i64,
}

/// Session with permission to change it. Changes are queued as `Set-Cookie`
/// headers and land on the response in [`SessionWriter::apply`].
#[derive(Debug)]
pub struct SessionWriter {
    reader: SessionReader,
    settings: CookieSettings,
    set_cookies: Vec<String>,
}

impl SessionWriter {
    pub fn new(reader: SessionReader, settings: CookieSettings) -> Self {
        Self {
            reader,
            settings,
            set_cookies: Vec::new(),
        }
    }

    pub fn reader(&self) -> &SessionReader {
        &self.reader
    }

    pub fn sign_in(
        &mut self,
        conn: &Connection,
        user: CurrentUser,
        now: i64,
    ) -> Result<(), ServerError> {
        // Rotating: any session this browser already held is dropped.
        if let Some(old) = self.reader.token.take() {
            sessions::revoke_session(conn, &old, now)?;
        }

        sessions::prune_sessions(conn, now)?;
        let token = sessions::create_session(conn, user.id, now, self.settings.max_age_secs)?;
        self.set_cookies
            .push(self.cookie(&token, self.settings.max_age_secs));
        self.reader = SessionReader {
            token: Some(token),
            user: Some(user),
        };
        Ok(())
    }

    pub fn sign_out(&mut self, conn: &Connection, now: i64) -> Result<(), ServerError> {
        if let Some(token) = self.reader.token.take() {
            sessions::revoke_session(conn, &token, now)?;
        }
        self.reader.user = None;
        self.set_cookies.push(self.cookie("", 0));
        Ok(())
    }

    fn cookie(&self, value: &str, max_age: i64) -> String {
        let mut c = format!(
            "{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
        );
        if self.settings.secure {
            c.push_str("; Secure");
        }
        c
    }

    /// Attach queued cookie changes to the outgoing response.
    pub fn apply(self, mut resp: Response) -> Response {
        for cookie in self.set_cookies {
            match HeaderValue::from_str(&cookie) {
                Ok(v) => {
                    resp.headers_mut().append(SET_COOKIE, v);
                }
                Err(e) => warn!("dropping unencodable session cookie: {e}"),
            }
        }
        resp
    }
}
