use contracts::system::users::UserSummary;

use crate::shared::api_utils::{self, ApiError};

/// Fetch active users for owner pickers
pub async fn fetch_users() -> Result<Vec<UserSummary>, ApiError> {
    api_utils::get_json("/api/users").await
}
