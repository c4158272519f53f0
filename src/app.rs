use chrono::NaiveDate;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::auth::context::CookieSettings;
use crate::auth::magic::MagicLinkConfig;
use crate::config::Config;
use crate::db::Database;
use crate::mailer::{BrevoMailer, LogMailer, Mailer};

/// Shared state handed to every request.
pub struct App {
    pub db: Database,
    pub cfg: Config,
    pub mailer: Arc<dyn Mailer>,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let mailer: Arc<dyn Mailer> = match &cfg.brevo_api_key {
            Some(key) if !key.is_empty() => Arc::new(BrevoMailer::new(
                key.clone(),
                cfg.sender_email.clone(),
                cfg.sender_name.clone(),
            )),
            _ => Arc::new(LogMailer),
        };
        Self::with_mailer(cfg, mailer)
    }

    pub fn with_mailer(cfg: Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db: Database::new(cfg.db_path.clone()),
            cfg,
            mailer,
        }
    }

    pub fn magic_link_config(&self) -> MagicLinkConfig {
        MagicLinkConfig {
            ttl_secs: self.cfg.magic_link_ttl_secs,
            ..MagicLinkConfig::default()
        }
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            secure: self.cfg.secure_cookies,
            max_age_secs: self.cfg.session_ttl_secs,
        }
    }
}

pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Today's calendar date in the server's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
