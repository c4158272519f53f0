pub mod categories;
pub mod dashboard;
pub mod due_dates;
pub mod generator;
pub mod institution;
pub mod links;
pub mod moves;
pub mod onboarding;
pub mod task;
pub mod template;
