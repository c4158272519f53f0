use crate::tests::utils::{get, location, make_app, post_form, read_body, sign_in, ONBOARDING_FORM};

#[test]
fn dashboard_redirects_when_signed_out() {
    let (app, _) = make_app();

    let resp = get(&app, "/dashboard", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/sign-in");
}

#[test]
fn dashboard_without_move_prompts_onboarding() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");

    let resp = get(&app, "/dashboard", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("No move yet"));
    assert!(body.contains("Plan your move"));
}

#[test]
fn dashboard_shows_generated_tasks() {
    let (app, mailer) = make_app();
    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    post_form(&app, "/onboarding", ONBOARDING_FORM, Some(&cookie)).unwrap();

    let body = read_body(get(&app, "/dashboard", Some(&cookie)));
    assert!(body.contains("Your tasks"));
    assert!(body.contains("0/2"));
    assert!(body.contains("You have 2 open tasks"));
    assert!(body.contains("/tasks/"));
}

#[test]
fn home_page_links_to_dashboard_when_signed_in() {
    let (app, mailer) = make_app();

    let anon = read_body(get(&app, "/", None));
    assert!(anon.contains("/auth/sign-in"));

    let cookie = sign_in(&app, &mailer, "ada%40example.com");
    let body = read_body(get(&app, "/", Some(&cookie)));
    assert!(body.contains("/dashboard"));
}
