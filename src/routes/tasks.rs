use astra::Body;
use http::request::Parts;
use log::info;

use crate::app::{now_unix, App};
use crate::db::{tasks, MoveStore};
use crate::domain::task::TaskStatus;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect};
use crate::router::{form_field, read_form};
use crate::routes::{read_session, SIGN_IN_PATH};
use crate::templates::pages::task_detail_page;

pub fn show(app: &App, parts: &Parts, task_id: i64) -> ResultResp {
    let session = read_session(app, parts, now_unix())?;
    let Some(user) = session.user() else {
        return redirect(SIGN_IN_PATH);
    };

    let task = app
        .db
        .with_conn(|conn| tasks::find_for_user(conn, task_id, user.id))?
        .ok_or(ServerError::NotFound)?;

    html_response(task_detail_page(user, &task))
}

pub fn update_status(app: &App, parts: &Parts, body: Body, task_id: i64) -> ResultResp {
    let session = read_session(app, parts, now_unix())?;
    let Some(user) = session.user() else {
        return redirect(SIGN_IN_PATH);
    };

    let pairs = read_form(body)?;
    let status: TaskStatus = form_field(&pairs, "status")
        .parse()
        .map_err(ServerError::BadRequest)?;

    // Someone else's task looks the same as a missing one.
    app.db.with_conn(|conn| {
        if tasks::find_for_user(conn, task_id, user.id)?.is_none() {
            return Err(ServerError::NotFound);
        }
        conn.update_task_status(task_id, status)
    })?;
    info!("task {task_id} set to {status}");

    let detail = format!("/tasks/{task_id}");
    if form_field(&pairs, "return_to") == detail {
        redirect(&detail)
    } else {
        redirect("/dashboard")
    }
}
