// src/routes/onboarding.rs
use astra::Body;
use http::request::Parts;
use log::{info, warn};

use crate::app::{now_unix, App};
use crate::db::profiles::{find_profile, upsert_profile, Profile};
use crate::db::{institutions, MoveStore};
use crate::domain::generator::generate_tasks_for_move;
use crate::domain::onboarding::OnboardingForm;
use crate::errors::ResultResp;
use crate::responses::{html_response, html_response_with_status, redirect};
use crate::router::read_form;
use crate::routes::{read_session, SIGN_IN_PATH};
use crate::templates::pages::{onboarding_page, OnboardingVm};

pub fn show(app: &App, parts: &Parts) -> ResultResp {
    let session = read_session(app, parts, now_unix())?;
    let Some(user) = session.user() else {
        return redirect(SIGN_IN_PATH);
    };

    let (catalog, profile) = app.db.with_conn(|conn| {
        Ok((
            institutions::list_institutions(conn)?,
            find_profile(conn, user.id)?,
        ))
    })?;

    html_response(onboarding_page(&OnboardingVm {
        user,
        institutions: catalog,
        errors: Vec::new(),
        values: Vec::new(),
        profile,
    }))
}

/// Save the profile and move, then build the checklist.
pub fn submit(app: &App, parts: &Parts, body: Body) -> ResultResp {
    let now = now_unix();
    let session = read_session(app, parts, now)?;
    let Some(user) = session.user() else {
        return redirect(SIGN_IN_PATH);
    };

    let pairs = read_form(body)?;
    let form = match OnboardingForm::parse(&pairs) {
        Ok(form) => form,
        Err(errors) => {
            warn!("onboarding rejected for user {}: {} field errors", user.id, errors.len());
            let catalog = app.db.with_conn(|conn| institutions::list_institutions(conn))?;
            return html_response_with_status(
                400,
                onboarding_page(&OnboardingVm {
                    user,
                    institutions: catalog,
                    errors,
                    values: pairs,
                    profile: None,
                }),
            );
        }
    };

    let new_move = form.to_new_move(user.id);
    let move_id = app.db.with_conn(|conn| {
        upsert_profile(
            conn,
            &Profile {
                user_id: user.id,
                email: form.email.clone(),
                full_name: form.full_name.clone(),
                phone: form.phone.clone(),
            },
            now,
        )?;
        Ok(conn.insert_move(&new_move, now)?.id)
    })?;
    info!("user {} created move {move_id}", user.id);

    app.db
        .with_conn(|conn| generate_tasks_for_move(&*conn, move_id, &form.institutions, now))?;

    redirect("/dashboard")
}
