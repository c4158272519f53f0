// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn find_user_email(conn: &Connection, user_id: i64) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select email from users where id = ?",
        params![user_id],
        |r| r.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

/// Insert a magic link row (token_hash should be SHA-256 bytes).
pub fn insert_magic_link(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into magic_links (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert magic link failed: {e}")))?;
    Ok(())
}

/// Consume a magic link by token hash. The link must exist, be unused and
/// unexpired (`expires_at > now`). Marks it used and returns the owner.
///
/// Check and mark happen in one statement, so two concurrent redeemers
/// cannot both win.
pub fn consume_magic_link(
    conn: &Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    conn.query_row(
        r#"
        update magic_links set used_at = ?1
        where token_hash = ?2 and used_at is null and expires_at > ?1
        returning user_id
        "#,
        params![now, token_hash],
        |r| r.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("consume magic link failed: {e}")))
}

/// Drop links that can no longer be redeemed (used or expired).
pub fn prune_magic_links(conn: &Connection, now: i64) -> Result<usize, ServerError> {
    conn.execute(
        "delete from magic_links where used_at is not null or expires_at <= ?",
        params![now],
    )
    .map_err(|e| ServerError::DbError(format!("prune magic links failed: {e}")))
}
