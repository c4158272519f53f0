use crate::tests::utils::{get, location, make_app, post_form, read_body, session_cookie, sign_in};
use crate::errors::ServerError;

#[test]
fn sign_in_page_loads_successfully() {
    let (app, _) = make_app();

    let resp = get(&app, "/auth/sign-in", None);
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn sign_in_page_shows_missing_code_message() {
    let (app, _) = make_app();

    let body = read_body(get(&app, "/auth/sign-in?error=missing_code", None));
    assert!(body.contains("That sign-in link was incomplete"));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let (app, mailer) = make_app();

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/auth/request-link")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(astra::Body::from("email=Test%40Example.com"))
        .unwrap();
    let resp = crate::router::handle(req, &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains("test@example.com"));
    // Partial only, for htmx swapping.
    assert!(!body.contains("<html"));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "test@example.com");
    assert!(sent[0].1.starts_with("http://test.local/auth/callback?token="));
}

#[test]
fn request_link_without_htmx_redirects_to_check_email() {
    let (app, _) = make_app();

    let resp = post_form(&app, "/auth/request-link", "email=ada%40example.com", None).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/check-email?email=ada%40example.com");

    let body = read_body(get(&app, location(&resp), None));
    assert!(body.contains("ada@example.com"));
}

#[test]
fn request_link_rejects_invalid_email() {
    let (app, mailer) = make_app();

    let result = post_form(&app, "/auth/request-link", "email=not-an-email", None);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[test]
fn callback_sets_session_and_link_is_single_use() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    assert!(cookie.starts_with("conciera_session="));

    let link = mailer.last_link().unwrap();
    let path = link.strip_prefix("http://test.local").unwrap();
    let resp = get(&app, path, None);
    assert_eq!(resp.status(), 302);
    assert!(location(&resp).starts_with("/auth/sign-in?error="));
    assert!(session_cookie(&resp).is_none());
}

#[test]
fn callback_without_token_redirects_with_missing_code() {
    let (app, _) = make_app();

    let resp = get(&app, "/auth/callback", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/sign-in?error=missing_code");
}

#[test]
fn signed_in_user_skips_sign_in_page() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let resp = get(&app, "/auth/sign-in", Some(&cookie));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn sign_out_revokes_session() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let resp = post_form(&app, "/auth/sign-out", "", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");
    assert_eq!(session_cookie(&resp).as_deref(), Some("conciera_session="));

    // The old cookie no longer opens the dashboard.
    let resp = get(&app, "/dashboard", Some(&cookie));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/sign-in");
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = make_app();

    let req = http::Request::builder()
        .uri("/nope")
        .body(astra::Body::empty())
        .unwrap();
    assert!(matches!(
        crate::router::handle(req, &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn signing_in_clears_dead_links_and_sessions() {
    let (app, mailer) = make_app();
    let first = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/auth/sign-out", "", Some(&first)).unwrap();

    sign_in(&app, &mailer, "ada%40example.com");

    let (links, sessions): (i64, i64) = app
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select (select count(*) from magic_links), (select count(*) from sessions)",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    // Only the live session is left; the redeemed links are gone.
    assert_eq!(links, 0);
    assert_eq!(sessions, 1);
}
