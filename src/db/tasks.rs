// src/db/tasks.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::task::{NewTask, Task, TaskStatus};
use crate::errors::ServerError;

const TASK_COLUMNS: &str = "t.id, t.move_id, t.institution_id, t.slug, t.title, t.description, \
     t.due_date, t.status, t.link, t.generated_template";

fn task_from_row(r: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: r.get(0)?,
        move_id: r.get(1)?,
        institution_id: r.get(2)?,
        slug: r.get(3)?,
        title: r.get(4)?,
        description: r.get(5)?,
        due_date: r.get(6)?,
        status: r.get(7)?,
        link: r.get(8)?,
        generated_template: r.get(9)?,
    })
}

/// Insert a batch of generated tasks in one transaction.
/// Either every row lands or none do.
pub fn insert_tasks(conn: &Connection, rows: &[NewTask], now: i64) -> Result<usize, ServerError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    {
        let mut stmt = tx
            .prepare(
                r#"
                insert into tasks (
                    move_id, institution_id, slug, title, description,
                    due_date, status, link, generated_template, created_at
                )
                values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .map_err(|e| ServerError::DbError(format!("prepare task insert failed: {e}")))?;

        for row in rows {
            stmt.execute(params![
                row.move_id,
                row.institution_id,
                row.slug,
                row.title,
                row.description,
                row.due_date,
                row.status,
                row.link,
                row.generated_template,
                now,
            ])
            .map_err(|e| ServerError::DbError(format!("insert task failed: {e}")))?;
        }
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(rows.len())
}

/// Overwrite a task's status. Any status may follow any other.
pub fn update_status(
    conn: &Connection,
    task_id: i64,
    status: TaskStatus,
) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            "update tasks set status = ? where id = ?",
            params![status, task_id],
        )
        .map_err(|e| ServerError::DbError(format!("update task status failed: {e}")))?;
    Ok(updated == 1)
}

/// Tasks for a move, soonest first.
pub fn list_for_move(conn: &Connection, move_id: i64) -> Result<Vec<Task>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {TASK_COLUMNS} from tasks t where t.move_id = ? order by t.due_date asc, t.id asc"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare tasks failed: {e}")))?;

    let rows = stmt
        .query_map(params![move_id], task_from_row)
        .map_err(|e| ServerError::DbError(format!("query tasks failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read task failed: {e}")))
}

/// A task, but only if it belongs to one of `user_id`'s moves.
pub fn find_for_user(
    conn: &Connection,
    task_id: i64,
    user_id: i64,
) -> Result<Option<Task>, ServerError> {
    conn.query_row(
        &format!(
            "select {TASK_COLUMNS} from tasks t join moves m on m.id = t.move_id \
             where t.id = ? and m.user_id = ?"
        ),
        params![task_id, user_id],
        task_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select task failed: {e}")))
}
