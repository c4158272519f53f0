// src/db/institutions.rs
use rusqlite::{params_from_iter, Connection, Row};

use crate::domain::institution::Institution;
use crate::errors::ServerError;

fn placeholders(n: usize) -> String {
    std::iter::repeat("?")
        .take(n)
        .collect::<Vec<_>>()
        .join(", ")
}

fn institution_from_row(r: &Row<'_>) -> rusqlite::Result<Institution> {
    Ok(Institution {
        id: r.get(0)?,
        title: r.get(1)?,
        notes: r.get(2)?,
        link: r.get(3)?,
        template: r.get(4)?,
    })
}

/// Whole catalog, ordered by title for the onboarding checkboxes.
pub fn list_institutions(conn: &Connection) -> Result<Vec<Institution>, ServerError> {
    let mut stmt = conn
        .prepare("select id, title, notes, link, template from institutions order by title asc")
        .map_err(|e| ServerError::DbError(format!("prepare institutions failed: {e}")))?;

    let rows = stmt
        .query_map([], institution_from_row)
        .map_err(|e| ServerError::DbError(format!("query institutions failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read institution failed: {e}")))
}

/// Catalog rows for the given ids. Unknown ids are skipped; order is unspecified.
pub fn find_by_ids(conn: &Connection, ids: &[String]) -> Result<Vec<Institution>, ServerError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "select id, title, notes, link, template from institutions where id in ({})",
        placeholders(ids.len())
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare institutions by id failed: {e}")))?;

    let rows = stmt
        .query_map(params_from_iter(ids.iter()), institution_from_row)
        .map_err(|e| ServerError::DbError(format!("query institutions by id failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read institution failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_conn;

    #[test]
    fn catalog_is_sorted_by_title() {
        let conn = test_conn();
        let all = list_institutions(&conn).unwrap();
        assert_eq!(all.len(), 11);

        let titles: Vec<&str> = all.iter().map(|i| i.title.as_str()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn find_by_ids_skips_unknown() {
        let conn = test_conn();
        let ids = vec![
            "hmrc".to_string(),
            "no-such-thing".to_string(),
            "gp".to_string(),
        ];
        let mut found: Vec<String> = find_by_ids(&conn, &ids)
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        found.sort();
        assert_eq!(found, vec!["gp", "hmrc"]);
    }

    #[test]
    fn find_by_ids_empty_selection() {
        let conn = test_conn();
        assert!(find_by_ids(&conn, &[]).unwrap().is_empty());
    }

    #[test]
    fn seeded_templates_are_optional() {
        let conn = test_conn();
        let rows = find_by_ids(&conn, &["gp".to_string(), "hmrc".to_string()]).unwrap();
        let gp = rows.iter().find(|i| i.id == "gp").unwrap();
        let hmrc = rows.iter().find(|i| i.id == "hmrc").unwrap();
        assert!(gp.template.is_none());
        assert!(hmrc.template.as_deref().unwrap().contains("{{full_name}}"));
    }
}
