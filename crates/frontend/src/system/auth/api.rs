use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, SessionUser,
};

use crate::shared::api_utils::{self, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_utils::post_json("/api/auth/login", &request).await
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_json("/api/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post("/api/auth/logout", &request).await
}

/// Current user of the stored access token
pub async fn get_current_user() -> Result<SessionUser, ApiError> {
    api_utils::get_json("/api/auth/me").await
}
