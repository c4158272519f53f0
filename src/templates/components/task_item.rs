use maud::{html, Markup};

use crate::domain::categories::Category;
use crate::domain::task::{Task, TaskStatus};

pub fn status_badge(status: TaskStatus) -> Markup {
    let colour = match status {
        TaskStatus::NotStarted => "#e5e7eb",
        TaskStatus::InProgress => "#fde68a",
        TaskStatus::Done => "#bbf7d0",
    };
    html! {
        span class="badge" style=(format!("background: {colour};")) { (status.label()) }
    }
}

pub fn task_item(task: &Task) -> Markup {
    let category = Category::for_institution(&task.institution_id);
    html! {
        div class="card" style="padding: 0.75rem;" {
            div style="display: flex; justify-content: space-between; gap: 0.5rem;" {
                a href=(format!("/tasks/{}", task.id)) title=(category.label()) {
                    (category.icon()) " " (task.title)
                }
                div {
                    span class="muted" { (task.due_date.format("%d %b %Y").to_string()) }
                    " "
                    (status_badge(task.status))
                }
            }
        }
    }
}
