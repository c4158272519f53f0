use astra::{Body, Response};
use clap::Parser;
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::App;
use crate::auth::context::SESSION_COOKIE;
use crate::config::Config;
use crate::db::connection::init_db;
use crate::errors::ServerError;
use crate::mailer::Mailer;
use crate::router::handle;

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Keeps every link it was asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailer {
    pub fn last_link(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, link)| link.clone())
    }
}

impl Mailer for RecordingMailer {
    fn send_magic_link(&self, to_email: &str, magic_link: &str) -> Result<(), ServerError> {
        self.sent
            .lock()
            .unwrap()
            .push((to_email.to_string(), magic_link.to_string()));
        Ok(())
    }
}

/// App backed by a fresh database file with the production schema and seed.
pub fn make_app() -> (App, Arc<RecordingMailer>) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "conciera-test-{}-{nanos}-{n}.sqlite3",
        std::process::id()
    ));

    let cfg = Config::parse_from([
        "conciera",
        "--db-path",
        path.to_str().unwrap(),
        "--base-url",
        "http://test.local",
    ]);
    let mailer = Arc::new(RecordingMailer::default());
    let app = App::with_mailer(cfg, mailer.clone());

    init_db(&app.db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (app, mailer)
}

pub fn get(app: &App, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    handle(builder.body(Body::empty()).unwrap(), app).expect("Failed to handle request")
}

pub fn post_form(app: &App, uri: &str, form: &str, cookie: Option<&str>) -> Result<Response, ServerError> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    handle(builder.body(Body::from(form.to_string())).unwrap(), app)
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .expect("no Location header")
        .to_str()
        .unwrap()
}

/// `name=value` of the session cookie set on a response, if any.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(str::to_string)
}

/// Full magic-link round trip; returns the `Cookie` header value for the new session.
pub fn sign_in(app: &App, mailer: &RecordingMailer, email: &str) -> String {
    let resp = post_form(app, "/auth/request-link", &format!("email={email}"), None).unwrap();
    assert_eq!(resp.status(), 302);

    let link = mailer.last_link().expect("no magic link sent");
    let path = link
        .strip_prefix("http://test.local")
        .expect("link not absolute");

    let resp = get(app, path, None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");
    session_cookie(&resp).expect("no session cookie")
}

pub const ONBOARDING_FORM: &str = "full_name=Ada+Lovelace&email=ada%40example.com&phone=&\
current_address=1+Park+Row%2C+Leeds&new_address=10+Downing+Street%2C+London&\
new_postcode=SW1A+1AA&move_date=2024-06-15&adults=2&children=0&pets=1&vehicle_owned=on&\
driving_licence_no=MORGA753116SM9IJ&pref_greenEnergy=on&pref_budgetRange=%C2%A3%C2%A3&\
clubs_interests=padel&institutions=hmrc&institutions=clubs-societies&institutions=hmrc";
