use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Partial swapped in by htmx after the email form is posted.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="card" {
            h3 { "Check your email" }
            p {
                "We sent a sign-in link to "
                strong { (email) }
                "."
            }
            p class="muted" { "Click the link in the email to sign in." }
            p { a href="/auth/sign-in" { "Try with a different email" } }
        }
    }
}

/// Full page, for browsers without htmx.
pub fn check_email_page(email: &str) -> Markup {
    desktop_layout(
        "Check your email",
        None,
        html! {
            main style="max-width: 480px;" {
                (check_email_content(email))
            }
        },
    )
}
