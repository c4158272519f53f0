pub mod check_email;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod onboarding;
pub mod task_detail;

pub use check_email::{check_email_content, check_email_page};
pub use dashboard::{dashboard_page, DashboardVm};
pub use home::home_page;
pub use login::login_page;
pub use onboarding::{onboarding_page, OnboardingVm};
pub use task_detail::task_detail_page;
