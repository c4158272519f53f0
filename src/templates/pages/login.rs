use crate::templates::{components::email_cta_form, desktop_layout};
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main style="max-width: 480px;" {
                h1 { "Sign in" }
                p { "Enter your email and we’ll send you a secure sign-in link." }

                @if let Some(error) = error {
                    p class="errors" { (error_message(error)) }
                }

                (email_cta_form())
            }
        },
    )
}

fn error_message(code: &str) -> String {
    match code {
        "missing_code" => "That sign-in link was incomplete. Request a new one below.".to_string(),
        other => other.to_string(),
    }
}
