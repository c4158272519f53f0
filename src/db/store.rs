// src/db/store.rs
use rusqlite::Connection;

use crate::db::{institutions, moves, profiles, tasks};
use crate::domain::institution::Institution;
use crate::domain::moves::{Move, NewMove};
use crate::domain::task::{NewTask, TaskStatus};
use crate::errors::ServerError;

/// The store primitives task generation depends on.
pub trait MoveStore {
    fn find_move(&self, move_id: i64) -> Result<Option<Move>, ServerError>;

    /// Full name from the owner's profile, if they have one.
    fn find_profile_name(&self, user_id: i64) -> Result<Option<String>, ServerError>;

    /// Catalog rows whose id is in `ids`. No ordering guarantee.
    fn find_institutions(&self, ids: &[String]) -> Result<Vec<Institution>, ServerError>;

    fn insert_move(&self, new_move: &NewMove, now: i64) -> Result<Move, ServerError>;

    /// Insert the whole batch or nothing. Returns the number of rows written.
    fn insert_tasks(&self, rows: &[NewTask], now: i64) -> Result<usize, ServerError>;

    /// Returns false when no task has that id.
    fn update_task_status(&self, task_id: i64, status: TaskStatus) -> Result<bool, ServerError>;
}

impl MoveStore for Connection {
    fn find_move(&self, move_id: i64) -> Result<Option<Move>, ServerError> {
        moves::find_move(self, move_id)
    }

    fn find_profile_name(&self, user_id: i64) -> Result<Option<String>, ServerError> {
        profiles::find_full_name(self, user_id)
    }

    fn find_institutions(&self, ids: &[String]) -> Result<Vec<Institution>, ServerError> {
        institutions::find_by_ids(self, ids)
    }

    fn insert_move(&self, new_move: &NewMove, now: i64) -> Result<Move, ServerError> {
        moves::insert_move(self, new_move, now)
    }

    fn insert_tasks(&self, rows: &[NewTask], now: i64) -> Result<usize, ServerError> {
        tasks::insert_tasks(self, rows, now)
    }

    fn update_task_status(&self, task_id: i64, status: TaskStatus) -> Result<bool, ServerError> {
        tasks::update_status(self, task_id, status)
    }
}
