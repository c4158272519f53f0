pub mod email_cta;
pub mod error;
pub mod stat_card;
pub mod task_item;

pub use email_cta::email_cta_form;
pub use error::html_error_response;
pub use stat_card::{progress_bar, stat_card};
pub use task_item::{status_badge, task_item};
