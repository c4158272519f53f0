use maud::{html, Markup, DOCTYPE};

use crate::auth::sessions::CurrentUser;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; background: #fafafa; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; border-bottom: 1px solid #e5e7eb; background: white; }
header nav { display: flex; gap: 1rem; align-items: center; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.card { background: white; border: 1px solid #e5e7eb; border-radius: 12px; padding: 1rem; }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.muted { color: #6b7280; font-size: 0.9rem; }
.badge { display: inline-block; border-radius: 999px; padding: 0 0.5rem; font-size: 0.75rem; background: #e5e7eb; }
.errors { background: #fef2f2; color: #991b1b; border-radius: 8px; padding: 0.75rem 1rem; }
label { display: block; margin: 0.5rem 0; }
input, textarea, select { font: inherit; padding: 0.35rem 0.5rem; }
button { font: inherit; padding: 0.4rem 1rem; cursor: pointer; }
"#;

pub fn desktop_layout(title: &str, user: Option<&CurrentUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Conciera" }
                style { (maud::PreEscaped(STYLE)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    a href="/" style="font-weight: 600; text-decoration: none; color: inherit;" { "Conciera" }
                    nav {
                        @if let Some(user) = user {
                            a href="/dashboard" { "Dashboard" }
                            a href="/onboarding" { "Plan a move" }
                            span class="muted" { (user.email) }
                            form method="post" action="/auth/sign-out" style="margin: 0;" {
                                button type="submit" { "Sign out" }
                            }
                        } @else {
                            a href="/auth/sign-in" { "Sign in" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
