/// Catalog entry for an organisation that needs to hear about the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    /// Stable key, also used for due-date rules and as the task slug.
    pub id: String,
    pub title: String,
    pub notes: Option<String>,
    pub link: Option<String>,
    /// Notification letter containing `{{placeholder}}` tokens.
    pub template: Option<String>,
}
