use crate::auth::magic::{IssuedMagicLink, MagicLinkConfig, MagicLinkService, RedeemedMagicLink};
use crate::db::connection::Database;
use crate::errors::ServerError;

/// Request a magic link: creates the user if needed and stores the link.
/// Returns the issued link (raw token included so caller can email/log).
pub fn request_magic_link(
    db: &Database,
    cfg: &MagicLinkConfig,
    email: &str,
    now: i64,
) -> Result<IssuedMagicLink, ServerError> {
    let svc = MagicLinkService::new(cfg.clone());
    db.with_conn(|conn| svc.request_link(conn, email, now))
}

/// Redeem a magic link token (single-use) and return the user it belongs to.
pub fn redeem_magic_link(
    db: &Database,
    cfg: &MagicLinkConfig,
    token: &str,
    now: i64,
) -> Result<RedeemedMagicLink, ServerError> {
    let svc = MagicLinkService::new(cfg.clone());
    db.with_conn(|conn| svc.redeem(conn, token, now))
}
