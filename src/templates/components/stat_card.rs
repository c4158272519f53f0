use maud::{html, Markup};

pub fn stat_card(label: &str, value: &str, helper: Option<&str>, footer: Option<Markup>) -> Markup {
    html! {
        section class="card" {
            div class="muted" { (label) }
            div style="font-size: 1.5rem; font-weight: 600;" { (value) }
            @if let Some(helper) = helper {
                div class="muted" { (helper) }
            }
            @if let Some(footer) = footer {
                div style="margin-top: 0.5rem;" { (footer) }
            }
        }
    }
}

pub fn progress_bar(pct: u32) -> Markup {
    html! {
        div style="height: 8px; background: #e5e7eb; border-radius: 4px;" {
            div style=(format!("height: 8px; border-radius: 4px; background: #111827; width: {}%;", pct.min(100))) {}
        }
    }
}
