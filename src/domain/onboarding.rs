// src/domain/onboarding.rs

use chrono::NaiveDate;

use crate::domain::moves::{ClubsPrefs, NewMove, Preferences};

/// A validated onboarding submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub current_address: String,
    pub new_address: String,
    pub new_postcode: String,
    pub move_date: NaiveDate,
    pub adults: i64,
    pub children: i64,
    pub pets: i64,
    pub vehicle_owned: bool,
    pub driving_licence_no: String,
    pub preferences: Preferences,
    pub clubs_prefs: ClubsPrefs,
    /// Institution ids ticked on the form, in submission order.
    pub institutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

struct Fields<'a>(&'a [(String, String)]);

impl<'a> Fields<'a> {
    fn get(&self, name: &str) -> &'a str {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .unwrap_or("")
    }

    fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// HTML checkboxes send "on" when ticked and nothing otherwise.
    fn checked(&self, name: &str) -> bool {
        self.get(name) == "on"
    }
}

impl OnboardingForm {
    /// Validate decoded `application/x-www-form-urlencoded` pairs.
    pub fn parse(pairs: &[(String, String)]) -> Result<Self, Vec<FieldError>> {
        let f = Fields(pairs);
        let mut errors = Vec::new();

        let mut required = |field: &'static str, label: &str| -> String {
            let v = f.get(field);
            if v.is_empty() {
                errors.push(FieldError {
                    field,
                    message: format!("{label} is required"),
                });
            }
            v.to_string()
        };

        let full_name = required("full_name", "Full name");
        let email = required("email", "Email");
        let current_address = required("current_address", "Current address");
        let new_address = required("new_address", "New address");
        let new_postcode = required("new_postcode", "New postcode");
        let move_date_raw = required("move_date", "Move date");

        if !email.is_empty() && !looks_like_email(&email) {
            errors.push(FieldError {
                field: "email",
                message: "Enter a valid email address".to_string(),
            });
        }

        let move_date = if move_date_raw.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&move_date_raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(FieldError {
                        field: "move_date",
                        message: "Move date must be a date (YYYY-MM-DD)".to_string(),
                    });
                    None
                }
            }
        };

        let adults = count(&f, "adults", "Adults", 1, &mut errors);
        let children = count(&f, "children", "Children", 0, &mut errors);
        let pets = count(&f, "pets", "Pets", 0, &mut errors);

        let form = match move_date {
            Some(move_date) if errors.is_empty() => OnboardingForm {
                full_name,
                email,
                phone: f.get("phone").to_string(),
                current_address,
                new_address,
                new_postcode,
                move_date,
                adults,
                children,
                pets,
                vehicle_owned: f.checked("vehicle_owned"),
                driving_licence_no: f.get("driving_licence_no").to_string(),
                preferences: Preferences {
                    green_energy: f.checked("pref_greenEnergy"),
                    fibre_preferred: f.checked("pref_fibrePreferred"),
                    budget_range: f.get("pref_budgetRange").to_string(),
                },
                clubs_prefs: ClubsPrefs {
                    interests: f.get("clubs_interests").to_string(),
                    gym_priority: f.checked("clubs_gymPriority"),
                },
                institutions: f.all("institutions"),
            },
            _ => return Err(errors),
        };

        Ok(form)
    }

    pub fn to_new_move(&self, user_id: i64) -> NewMove {
        NewMove {
            user_id,
            current_address: self.current_address.clone(),
            new_address: self.new_address.clone(),
            new_postcode: self.new_postcode.clone(),
            move_date: self.move_date,
            adults: self.adults,
            children: self.children,
            pets: self.pets,
            vehicle_owned: self.vehicle_owned,
            driving_licence_no: Some(self.driving_licence_no.clone()).filter(|s| !s.is_empty()),
            preferences: self.preferences.clone(),
            clubs_prefs: self.clubs_prefs.clone(),
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Non-negative whole number; blank means `default`.
fn count(
    f: &Fields<'_>,
    field: &'static str,
    label: &str,
    default: i64,
    errors: &mut Vec<FieldError>,
) -> i64 {
    let raw = f.get(field);
    if raw.is_empty() {
        return default;
    }
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => n,
        _ => {
            errors.push(FieldError {
                field,
                message: format!("{label} must be a whole number, 0 or more"),
            });
            default
        }
    }
}
