use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Name shown in the header badge.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            self.email.as_deref().unwrap_or("writer")
        } else {
            &self.username
        }
    }
}
