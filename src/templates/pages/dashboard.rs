use crate::auth::sessions::CurrentUser;
use crate::domain::dashboard::{group_by_status, DashboardStats};
use crate::domain::moves::Move;
use crate::domain::task::Task;
use crate::templates::components::{progress_bar, stat_card, task_item};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub user: &'a CurrentUser,
    pub latest_move: Option<Move>,
    pub tasks: Vec<Task>,
    pub stats: DashboardStats,
}

const LOCAL_ESSENTIALS: &[(&str, &str)] = &[
    ("Find your council", "https://www.gov.uk/find-local-council"),
    ("Find a GP", "https://www.nhs.uk/service-search/gp"),
    ("Find a dentist", "https://www.nhs.uk/service-search/find-a-dentist"),
    ("Parking permits", "https://www.gov.uk/apply-for-a-resident-parking-permit"),
    ("Bin collection day", "https://www.gov.uk/rubbish-collection-day"),
];

pub fn dashboard_page(vm: &DashboardVm<'_>) -> Markup {
    let s = &vm.stats;
    let move_date = vm
        .latest_move
        .as_ref()
        .map(|m| m.move_date.format("%d %b %Y").to_string());
    let next_due_date = s
        .next_due
        .as_ref()
        .map(|(_, d)| d.format("%d %b %Y").to_string());
    let next_due_title = s
        .next_due
        .as_ref()
        .map(|(t, _)| t.as_str())
        .unwrap_or("All caught up");
    let pct_label = format!("{}% complete", s.pct_done);

    desktop_layout(
        "Dashboard",
        Some(vm.user),
        html! {
            main {
                h1 { "Dashboard" }
                p class="muted" { "Welcome, " (vm.user.email) }

                div class="grid" {
                    (stat_card("Move timeline", &s.timeline_label(), move_date.as_deref(), Some(progress_bar(s.pct_done))))
                    (stat_card("Tasks done", &format!("{}/{}", s.done, s.total), Some(pct_label.as_str()), None))
                    (stat_card("Next due", next_due_title, next_due_date.as_deref(), None))
                }

                @if vm.latest_move.is_none() {
                    section class="card" style="margin-top: 1rem;" {
                        p { "You haven't told us about a move yet." }
                        a href="/onboarding" { "Plan your move →" }
                    }
                }

                h2 { "Your tasks" }
                @if s.open > 0 {
                    p class="card" {
                        "You have " (s.open) " open task" @if s.open != 1 { "s" } "."
                    }
                } @else if s.total > 0 {
                    p class="card" { "All tasks complete!" }
                }

                div class="grid" {
                    @for (status, tasks) in group_by_status(&vm.tasks) {
                        section class="card" {
                            h3 { (status.label()) " (" (tasks.len()) ")" }
                            @for t in &tasks {
                                (task_item(t))
                            }
                            @if tasks.is_empty() {
                                p class="muted" { "No tasks" }
                            }
                        }
                    }
                }

                h2 { "Local essentials" }
                div class="grid" {
                    @for (label, href) in LOCAL_ESSENTIALS {
                        a href=(href) target="_blank" rel="noreferrer" { (label) }
                    }
                    a href="/onboarding" { "Update move details" }
                }
            }
        },
    )
}
