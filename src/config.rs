use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration. Every flag can also be set through the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "conciera", version, about = "Plan a house move and track who to tell")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "CONCIERA_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Path of the SQLite database file.
    #[arg(long, env = "CONCIERA_DB", default_value = "conciera.sqlite3")]
    pub db_path: String,

    #[arg(long, env = "CONCIERA_WORKERS", default_value_t = 8)]
    pub max_workers: usize,

    /// Public origin used when building links that leave the app (emails).
    #[arg(long, env = "CONCIERA_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Mark the session cookie `Secure`. Turn on behind HTTPS.
    #[arg(long, env = "CONCIERA_SECURE_COOKIES")]
    pub secure_cookies: bool,

    #[arg(long, env = "CONCIERA_MAGIC_LINK_TTL", default_value_t = 15 * 60)]
    pub magic_link_ttl_secs: i64,

    #[arg(long, env = "CONCIERA_SESSION_TTL", default_value_t = 60 * 60 * 24 * 7)]
    pub session_ttl_secs: i64,

    /// Brevo API key. Without one, magic links are written to the log instead of mailed.
    #[arg(long, env = "BREVO_API_KEY", hide_env_values = true)]
    pub brevo_api_key: Option<String>,

    #[arg(long, env = "CONCIERA_SENDER_EMAIL", default_value = "hello@conciera.app")]
    pub sender_email: String,

    #[arg(long, env = "CONCIERA_SENDER_NAME", default_value = "Conciera")]
    pub sender_name: String,
}

impl Config {
    /// Absolute URL for an app-relative path such as "/auth/callback?token=...".
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
