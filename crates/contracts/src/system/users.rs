use serde::{Deserialize, Serialize};

use crate::domain::common::uuid_aggregate_id;

uuid_aggregate_id!(
    /// Unique user identifier
    UserId
);

/// User entry for pickers (sales target owner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserSummary {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = UserSummary {
            id: UserId::new_v4(),
            username: "pekka".to_string(),
            full_name: Some("Pekka Korhonen".to_string()),
        };
        assert_eq!(user.display_name(), "Pekka Korhonen");

        user.full_name = Some(" ".to_string());
        assert_eq!(user.display_name(), "pekka");

        user.full_name = None;
        assert_eq!(user.display_name(), "pekka");
    }
}
