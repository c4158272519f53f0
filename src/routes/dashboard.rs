use http::request::Parts;

use crate::app::{now_unix, today, App};
use crate::db::{moves, tasks};
use crate::domain::dashboard::DashboardStats;
use crate::errors::ResultResp;
use crate::responses::{html_response, redirect};
use crate::routes::{read_session, SIGN_IN_PATH};
use crate::templates::pages::{dashboard_page, DashboardVm};

pub fn show(app: &App, parts: &Parts) -> ResultResp {
    let session = read_session(app, parts, now_unix())?;
    let Some(user) = session.user() else {
        return redirect(SIGN_IN_PATH);
    };

    let (latest_move, tasks) = app.db.with_conn(|conn| {
        let latest = moves::find_latest_move_for_user(conn, user.id)?;
        let tasks = match &latest {
            Some(m) => tasks::list_for_move(conn, m.id)?,
            None => Vec::new(),
        };
        Ok((latest, tasks))
    })?;

    let stats = DashboardStats::compute(&tasks, latest_move.as_ref().map(|m| m.move_date), today());

    html_response(dashboard_page(&DashboardVm {
        user,
        latest_move,
        tasks,
        stats,
    }))
}
