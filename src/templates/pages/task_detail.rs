use crate::auth::sessions::CurrentUser;
use crate::domain::categories::Category;
use crate::domain::task::{Task, TaskStatus};
use crate::templates::components::status_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn task_detail_page(user: &CurrentUser, task: &Task) -> Markup {
    let category = Category::for_institution(&task.institution_id);

    desktop_layout(
        &task.title,
        Some(user),
        html! {
            main {
                p { a href="/dashboard" { "← Dashboard" } }
                h1 { (category.icon()) " " (task.title) }
                p {
                    "Due " strong { (task.due_date.format("%A %d %B %Y").to_string()) }
                    " " (status_badge(task.status))
                }

                @if let Some(description) = &task.description {
                    p { (description) }
                }

                @if !task.link.is_empty() {
                    p { a href=(task.link) target="_blank" rel="noreferrer" { "Open " (task.title) " →" } }
                }

                @if let Some(letter) = &task.generated_template {
                    section class="card" {
                        h3 { "Your letter" }
                        textarea id="letter" rows="12" readonly style="width: 100%;" { (letter) }
                        button
                            type="button"
                            onclick="navigator.clipboard.writeText(document.getElementById('letter').value); this.textContent='Copied';"
                        { "Copy" }
                    }
                }

                form method="post" action=(format!("/tasks/{}/status", task.id)) style="margin-top: 1rem;" {
                    input type="hidden" name="return_to" value=(format!("/tasks/{}", task.id));
                    label {
                        "Status "
                        select name="status" {
                            @for s in TaskStatus::ALL {
                                option value=(s.as_str()) selected[s == task.status] { (s.label()) }
                            }
                        }
                    }
                    button type="submit" { "Update" }
                }
            }
        },
    )
}
