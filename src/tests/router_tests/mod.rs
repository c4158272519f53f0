mod auth_flow_tests;
mod dashboard_tests;
mod onboarding_tests;
mod task_tests;
