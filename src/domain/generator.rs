// src/domain/generator.rs

use log::{debug, info};
use std::collections::{HashMap, HashSet};

use crate::db::store::MoveStore;
use crate::domain::due_dates::due_date;
use crate::domain::institution::Institution;
use crate::domain::links::task_link;
use crate::domain::moves::Move;
use crate::domain::task::{NewTask, TaskStatus};
use crate::domain::template::render;
use crate::errors::ServerError;

/// Variables available to notification templates.
pub fn template_vars(mv: &Move, full_name: &str) -> HashMap<&'static str, String> {
    HashMap::from([
        ("full_name", full_name.to_string()),
        ("new_address", mv.new_address.clone()),
        ("current_address", mv.current_address.clone()),
        ("new_postcode", mv.new_postcode.clone()),
        ("move_date", mv.move_date.format("%Y-%m-%d").to_string()),
        (
            "preferences",
            serde_json::to_string(&mv.preferences).unwrap_or_else(|_| "{}".to_string()),
        ),
        (
            "driving_licence_no",
            mv.driving_licence_no.clone().unwrap_or_default(),
        ),
        ("clubs_interests", mv.clubs_prefs.interests.clone()),
    ])
}

/// First occurrence of each id, in the order given.
pub fn dedupe_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Arrange catalog rows in selection order, dropping anything not selected.
fn in_selection_order(selected: &[String], catalog: Vec<Institution>) -> Vec<Institution> {
    let mut by_id: HashMap<String, Institution> =
        catalog.into_iter().map(|i| (i.id.clone(), i)).collect();
    selected.iter().filter_map(|id| by_id.remove(id)).collect()
}

/// Build the task for one institution. Pure.
pub fn build_task(mv: &Move, institution: &Institution, vars: &HashMap<&str, String>) -> NewTask {
    NewTask {
        move_id: mv.id,
        institution_id: institution.id.clone(),
        slug: institution.id.clone(),
        title: institution.title.clone(),
        description: institution.notes.clone(),
        due_date: due_date(&institution.id, mv.move_date),
        status: TaskStatus::NotStarted,
        link: task_link(institution, mv),
        generated_template: institution.template.as_deref().map(|t| render(t, vars)),
    }
}

/// Create one task per selected catalog institution for `move_id`.
///
/// Unknown moves and selections that match nothing in the catalog are not
/// errors; nothing is written and 0 is returned. Duplicate ids in
/// `selected` produce a single task.
pub fn generate_tasks_for_move<S: MoveStore + ?Sized>(
    store: &S,
    move_id: i64,
    selected: &[String],
    now: i64,
) -> Result<usize, ServerError> {
    let Some(mv) = store.find_move(move_id)? else {
        debug!("generate tasks: move {move_id} not found, nothing to do");
        return Ok(0);
    };

    let wanted = dedupe_ids(selected);
    let institutions = in_selection_order(&wanted, store.find_institutions(&wanted)?);
    if institutions.is_empty() {
        debug!("generate tasks: no catalog match for move {move_id}");
        return Ok(0);
    }

    let full_name = store.find_profile_name(mv.user_id)?.unwrap_or_default();
    let vars = template_vars(&mv, &full_name);

    let rows: Vec<NewTask> = institutions
        .iter()
        .map(|inst| build_task(&mv, inst, &vars))
        .collect();

    let written = store.insert_tasks(&rows, now)?;
    info!("generated {written} tasks for move {move_id}");
    Ok(written)
}
