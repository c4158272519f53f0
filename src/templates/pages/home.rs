// templates/pages/home.rs

use crate::auth::sessions::CurrentUser;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(user: Option<&CurrentUser>) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            main {
                h1 { "Moving house? We’ll tell you who to tell." }
                p {
                    "Tell us about your move and Conciera builds a checklist: DVLA, HMRC, "
                    "council tax, utilities and more, each with a due date worked out from your move date "
                    "and a letter ready to copy."
                }
                @if user.is_some() {
                    p { a href="/dashboard" { "Go to your dashboard →" } }
                } @else {
                    p { a href="/auth/sign-in" { "Sign in to get started →" } }
                }
            }
        },
    )
}
