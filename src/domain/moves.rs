use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Energy and broadband preferences captured at onboarding.
///
/// Serialized with camelCase keys; the JSON form is stored in `moves.preferences`
/// and substituted into notification letters as `{{preferences}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub green_energy: bool,
    pub fibre_preferred: bool,
    pub budget_range: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubsPrefs {
    pub interests: String,
    pub gym_priority: bool,
}

/// A single planned relocation. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub id: i64,
    pub user_id: i64,
    pub current_address: String,
    pub new_address: String,
    pub new_postcode: String,
    pub move_date: NaiveDate,
    pub adults: i64,
    pub children: i64,
    pub pets: i64,
    pub vehicle_owned: bool,
    pub driving_licence_no: Option<String>,
    pub preferences: Preferences,
    pub clubs_prefs: ClubsPrefs,
    pub created_at: i64,
}

/// Everything needed to insert a move; the store assigns `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMove {
    pub user_id: i64,
    pub current_address: String,
    pub new_address: String,
    pub new_postcode: String,
    pub move_date: NaiveDate,
    pub adults: i64,
    pub children: i64,
    pub pets: i64,
    pub vehicle_owned: bool,
    pub driving_licence_no: Option<String>,
    pub preferences: Preferences,
    pub clubs_prefs: ClubsPrefs,
}

// JSON text columns.

fn json_column<T: for<'de> Deserialize<'de> + Default>(value: ValueRef<'_>) -> FromSqlResult<T> {
    match value {
        ValueRef::Null => Ok(T::default()),
        other => {
            let s = other.as_str()?;
            serde_json::from_str(s).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
    }
}

fn json_output<T: Serialize>(value: &T) -> rusqlite::Result<ToSqlOutput<'_>> {
    let s = serde_json::to_string(value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    Ok(ToSqlOutput::from(s))
}

impl FromSql for Preferences {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        json_column(value)
    }
}

impl ToSql for Preferences {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        json_output(self)
    }
}

impl FromSql for ClubsPrefs {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        json_column(value)
    }
}

impl ToSql for ClubsPrefs {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        json_output(self)
    }
}
