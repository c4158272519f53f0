use crate::db::tasks;
use crate::domain::task::{Task, TaskStatus};
use crate::errors::ServerError;
use crate::tests::utils::{
    get, location, make_app, post_form, read_body, sign_in, ONBOARDING_FORM,
};
use crate::app::App;

fn tasks_of(app: &App, email: &str) -> Vec<Task> {
    app.db
        .with_conn(|conn| {
            let move_id: i64 = conn
                .query_row(
                    "select m.id from moves m join users u on u.id = m.user_id where u.email = ?1",
                    [email],
                    |r| r.get(0),
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            tasks::list_for_move(conn, move_id)
        })
        .unwrap()
}

#[test]
fn task_detail_shows_letter_and_status_form() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();

    let hmrc = tasks_of(&app, "ada@example.com")
        .into_iter()
        .find(|t| t.institution_id == "hmrc")
        .unwrap();

    let resp = get(&app, &format!("/tasks/{}", hmrc.id), Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Your letter"));
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains(&format!("/tasks/{}/status", hmrc.id)));
}

#[test]
fn status_update_redirects_back_and_persists() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();
    let task = tasks_of(&app, "ada@example.com").remove(0);

    let uri = format!("/tasks/{}/status", task.id);
    let form = format!("status=done&return_to=%2Ftasks%2F{}", task.id);
    let resp = post_form(&app, &uri, &form, Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), format!("/tasks/{}", task.id));

    // Any status may follow any other.
    let resp = post_form(&app, &uri, "status=not_started", Some(&cookie)).unwrap();
    assert_eq!(location(&resp), "/dashboard");

    let reloaded = tasks_of(&app, "ada@example.com");
    let t = reloaded.iter().find(|t| t.id == task.id).unwrap();
    assert_eq!(t.status, TaskStatus::NotStarted);
}

#[test]
fn unknown_status_is_bad_request() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();
    let task = tasks_of(&app, "ada@example.com").remove(0);

    let result = post_form(
        &app,
        &format!("/tasks/{}/status", task.id),
        "status=finished",
        Some(&cookie),
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn other_users_tasks_are_not_found() {
    let (app, mailer) = make_app();
    let ada = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&ada)).unwrap();
    let task = tasks_of(&app, "ada@example.com").remove(0);

    let bob = sign_in(&app, &mailer, "bob%40example.com");

    let req = http::Request::builder()
        .uri(format!("/tasks/{}", task.id))
        .header("Cookie", bob.as_str())
        .body(astra::Body::empty())
        .unwrap();
    assert!(matches!(
        crate::router::handle(req, &app),
        Err(ServerError::NotFound)
    ));

    let result = post_form(
        &app,
        &format!("/tasks/{}/status", task.id),
        "status=done",
        Some(&bob),
    );
    assert!(matches!(result, Err(ServerError::NotFound)));

    let unchanged = tasks_of(&app, "ada@example.com");
    assert!(unchanged.iter().all(|t| t.status == TaskStatus::NotStarted));
}
