// templates/pages/onboarding.rs

use crate::auth::sessions::CurrentUser;
use crate::db::profiles::Profile;
use crate::domain::institution::Institution;
use crate::domain::onboarding::FieldError;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct OnboardingVm<'a> {
    pub user: &'a CurrentUser,
    pub institutions: Vec<Institution>,
    pub errors: Vec<FieldError>,
    /// Submitted values, echoed back when validation fails.
    pub values: Vec<(String, String)>,
    /// Saved details from an earlier submission.
    pub profile: Option<Profile>,
}

impl OnboardingVm<'_> {
    fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .or_else(|| self.saved(name))
    }

    fn saved(&self, name: &str) -> Option<&str> {
        let p = self.profile.as_ref()?;
        match name {
            "full_name" => Some(p.full_name.as_str()),
            "email" => Some(p.email.as_str()),
            "phone" => Some(p.phone.as_str()),
            _ => None,
        }
    }

    fn text(&self, name: &str) -> &str {
        self.value(name).unwrap_or("")
    }

    fn checked(&self, name: &str) -> bool {
        self.value(name) == Some("on")
    }

    /// Institutions start ticked on a fresh form.
    fn institution_checked(&self, id: &str) -> bool {
        self.values.is_empty()
            || self
                .values
                .iter()
                .any(|(k, v)| k == "institutions" && v == id)
    }
}

pub fn onboarding_page(vm: &OnboardingVm<'_>) -> Markup {
    let email = vm.value("email").unwrap_or(vm.user.email.as_str());
    let adults = vm.value("adults").unwrap_or("1");
    let children = vm.value("children").unwrap_or("0");
    let pets = vm.value("pets").unwrap_or("0");
    let budget = vm.text("pref_budgetRange");

    desktop_layout(
        "Tell us about your move",
        Some(vm.user),
        html! {
            main {
                h1 { "Tell us about your move" }

                @if !vm.errors.is_empty() {
                    div class="errors" {
                        ul {
                            @for e in &vm.errors {
                                li { (e.message) }
                            }
                        }
                    }
                }

                form method="post" action="/onboarding" {
                    section class="card" {
                        h3 { "Basics" }
                        label { "Full name" input name="full_name" required value=(vm.text("full_name")); }
                        label { "Email" input name="email" type="email" required value=(email); }
                        label { "Phone (optional)" input name="phone" value=(vm.text("phone")); }
                        label { "Current address" textarea name="current_address" rows="2" required { (vm.text("current_address")) } }
                        label { "New address" textarea name="new_address" rows="2" required { (vm.text("new_address")) } }
                        label { "Move date" input name="move_date" type="date" required value=(vm.text("move_date")); }
                        label { "New postcode" input name="new_postcode" required value=(vm.text("new_postcode")); }
                    }

                    section class="card" {
                        h3 { "Household" }
                        label { "Adults" input name="adults" type="number" min="0" value=(adults); }
                        label { "Children" input name="children" type="number" min="0" value=(children); }
                        label { "Pets" input name="pets" type="number" min="0" value=(pets); }
                        label { input type="checkbox" name="vehicle_owned" checked[vm.checked("vehicle_owned")]; " Vehicle owned" }
                        label { "Driving licence number (optional)" input name="driving_licence_no" value=(vm.text("driving_licence_no")); }
                    }

                    section class="card" {
                        h3 { "Preferences" }
                        label { input type="checkbox" name="pref_greenEnergy" checked[vm.checked("pref_greenEnergy")]; " Green energy only" }
                        label { input type="checkbox" name="pref_fibrePreferred" checked[vm.checked("pref_fibrePreferred")]; " Fibre preferred" }
                        label {
                            "Budget "
                            select name="pref_budgetRange" {
                                option value="" selected[budget.is_empty()] { "Select…" }
                                @for tier in ["£", "££", "£££"] {
                                    option selected[budget == tier] { (tier) }
                                }
                            }
                        }
                    }

                    section class="card" {
                        h3 { "Clubs & societies" }
                        label {
                            "Interests (comma-separated)"
                            input name="clubs_interests" placeholder="football, padel, CrossFit, Rotary" value=(vm.text("clubs_interests"));
                        }
                        label { input type="checkbox" name="clubs_gymPriority" checked[vm.checked("clubs_gymPriority")]; " Gym is a priority" }
                    }

                    section class="card" {
                        h3 { "Which institutions should we set up?" }
                        div class="grid" {
                            @for inst in &vm.institutions {
                                label class="card" {
                                    input type="checkbox" name="institutions" value=(inst.id) checked[vm.institution_checked(&inst.id)];
                                    " "
                                    strong { (inst.title) }
                                    @if let Some(notes) = &inst.notes {
                                        div class="muted" { (notes) }
                                    }
                                }
                            }
                        }
                    }

                    p { button type="submit" { "Create my plan" } }
                }
            }
        },
    )
}
