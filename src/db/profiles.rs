// src/db/profiles.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

/// Create or overwrite the profile bound to `user_id`.
pub fn upsert_profile(conn: &Connection, profile: &Profile, now: i64) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into profiles (user_id, email, full_name, phone, updated_at)
        values (?, ?, ?, ?, ?)
        on conflict(user_id) do update set
            email = excluded.email,
            full_name = excluded.full_name,
            phone = excluded.phone,
            updated_at = excluded.updated_at
        "#,
        params![
            profile.user_id,
            profile.email,
            profile.full_name,
            profile.phone,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert profile failed: {e}")))?;
    Ok(())
}

pub fn find_profile(conn: &Connection, user_id: i64) -> Result<Option<Profile>, ServerError> {
    conn.query_row(
        "select user_id, email, full_name, phone from profiles where user_id = ?",
        params![user_id],
        |r| {
            Ok(Profile {
                user_id: r.get(0)?,
                email: r.get(1)?,
                full_name: r.get(2)?,
                phone: r.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select profile failed: {e}")))
}

pub fn find_full_name(conn: &Connection, user_id: i64) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select full_name from profiles where user_id = ?",
        params![user_id],
        |r| r.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select profile name failed: {e}")))
}
