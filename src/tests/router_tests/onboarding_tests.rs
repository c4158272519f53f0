use crate::db::{moves, tasks};
use crate::errors::ServerError;
use crate::tests::utils::{
    get, location, make_app, post_form, read_body, sign_in, ONBOARDING_FORM,
};

#[test]
fn onboarding_requires_sign_in() {
    let (app, _) = make_app();

    let resp = get(&app, "/onboarding", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/sign-in");
}

#[test]
fn onboarding_form_lists_catalog_prechecked() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let body = read_body(get(&app, "/onboarding", Some(&cookie)));
    assert!(body.contains("Tell us about your move"));
    assert!(body.contains(r#"value="hmrc""#));
    assert!(body.contains(r#"value="clubs-societies""#));
    // Email defaults to the signed-in address.
    assert!(body.contains(r#"value="ada@example.com""#));
}

#[test]
fn valid_submission_creates_move_and_tasks() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let resp = post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let rows = app
        .db
        .with_conn(|conn| {
            let user_id = conn
                .query_row("select id from users where email = 'ada@example.com'", [], |r| {
                    r.get::<_, i64>(0)
                })
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            let mv = moves::find_latest_move_for_user(conn, user_id)?.expect("move saved");
            tasks::list_for_move(conn, mv.id)
        })
        .unwrap();

    // hmrc selected twice still yields one task.
    assert_eq!(rows.len(), 2);
    let hmrc = rows.iter().find(|t| t.institution_id == "hmrc").unwrap();
    assert_eq!(hmrc.due_date.to_string(), "2024-06-22");
    assert!(hmrc
        .generated_template
        .as_deref()
        .unwrap()
        .contains("Ada Lovelace"));

    let clubs = rows
        .iter()
        .find(|t| t.institution_id == "clubs-societies")
        .unwrap();
    assert_eq!(
        clubs.link,
        "https://www.google.com/maps/search/padel%20near%20SW1A%201AA"
    );
    assert_eq!(clubs.due_date.to_string(), "2024-06-29");
}

#[test]
fn invalid_submission_rerenders_with_errors() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let resp = post_form(
        &app,
        "/onboarding",
        "full_name=Ada&email=ada%40example.com&move_date=next+week",
        Some(&cookie),
    )
    .unwrap();
    assert_eq!(resp.status(), 400);

    let body = read_body(resp);
    assert!(body.contains("Current address is required"));
    assert!(body.contains("Move date must be a date"));
    // Entered values survive the round trip.
    assert!(body.contains(r#"value="Ada""#));
}

#[test]
fn submission_without_session_redirects() {
    let (app, _) = make_app();

    let resp = post_form(&app, "/onboarding", ONBOARDING_FORM, None).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/sign-in");
}

#[test]
fn returning_user_gets_saved_profile_prefilled() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();

    let body = read_body(get(&app, "/onboarding", Some(&cookie)));
    assert!(body.contains(r#"value="Ada Lovelace""#));
}

#[test]
fn comma_separated_interests_build_an_escaped_clubs_link() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    let form = ONBOARDING_FORM.replace("clubs_interests=padel", "clubs_interests=football%2C+padel");
    post_form(&app, "/onboarding", &form, Some(&cookie)).unwrap();

    let link: String = app
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select link from tasks where institution_id = 'clubs-societies'",
                [],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(
        link,
        "https://www.google.com/maps/search/football%2C%20padel%20near%20SW1A%201AA"
    );
}
