// src/db/moves.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::moves::{Move, NewMove};
use crate::errors::ServerError;

const MOVE_COLUMNS: &str = "id, user_id, current_address, new_address, new_postcode, move_date, \
     adults, children, pets, vehicle_owned, driving_licence_no, preferences, clubs_prefs, created_at";

fn move_from_row(r: &Row<'_>) -> rusqlite::Result<Move> {
    Ok(Move {
        id: r.get(0)?,
        user_id: r.get(1)?,
        current_address: r.get(2)?,
        new_address: r.get(3)?,
        new_postcode: r.get(4)?,
        move_date: r.get(5)?,
        adults: r.get(6)?,
        children: r.get(7)?,
        pets: r.get(8)?,
        vehicle_owned: r.get(9)?,
        driving_licence_no: r.get(10)?,
        preferences: r.get(11)?,
        clubs_prefs: r.get(12)?,
        created_at: r.get(13)?,
    })
}

pub fn find_move(conn: &Connection, move_id: i64) -> Result<Option<Move>, ServerError> {
    conn.query_row(
        &format!("select {MOVE_COLUMNS} from moves where id = ?"),
        params![move_id],
        move_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select move failed: {e}")))
}

/// The dashboard always shows the most recent move.
pub fn find_latest_move_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Option<Move>, ServerError> {
    conn.query_row(
        &format!(
            "select {MOVE_COLUMNS} from moves where user_id = ? \
             order by created_at desc, id desc limit 1"
        ),
        params![user_id],
        move_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select latest move failed: {e}")))
}

/// Insert a move and return the stored row.
pub fn insert_move(conn: &Connection, m: &NewMove, now: i64) -> Result<Move, ServerError> {
    conn.query_row(
        &format!(
            r#"
            insert into moves (
                user_id, current_address, new_address, new_postcode, move_date,
                adults, children, pets, vehicle_owned, driving_licence_no,
                preferences, clubs_prefs, created_at
            )
            values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            returning {MOVE_COLUMNS}
            "#
        ),
        params![
            m.user_id,
            m.current_address,
            m.new_address,
            m.new_postcode,
            m.move_date,
            m.adults,
            m.children,
            m.pets,
            m.vehicle_owned,
            m.driving_licence_no,
            m.preferences,
            m.clubs_prefs,
            now,
        ],
        move_from_row,
    )
    .map_err(|e| ServerError::DbError(format!("insert move failed: {e}")))
}
