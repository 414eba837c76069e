//! Session provider.
//!
//! The session lives in a context object created by [`SessionProvider`]; it is
//! resolved once on load from the stored tokens and torn down by
//! [`SessionContext::logout`].

use contracts::system::auth::{LoginResponse, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Stored tokens are still being validated
    #[default]
    Loading,
    Anonymous,
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Loading)
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Loading),
        }
    }

    /// Validate stored tokens and publish the resulting session
    pub fn init(&self) {
        let state = self.state;
        spawn_local(async move {
            let resolved = resolve_stored_session().await;
            state.set(resolved);
        });
    }

    /// Store tokens of a successful login and switch to the new user
    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_tokens(&response.access_token, &response.refresh_token);
        log::info!("signed in as {}", response.user.username);
        self.state.set(SessionState::Authenticated(response.user));
    }

    /// Revoke the refresh token, drop stored tokens and forget the user
    pub fn logout(&self) {
        let state = self.state;
        spawn_local(async move {
            if let Some(refresh_token) = storage::refresh_token() {
                if let Err(e) = api::logout(refresh_token).await {
                    log::error!("logout request failed: {}", e);
                }
            }
            storage::clear_tokens();
            state.set(SessionState::Anonymous);
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

async fn resolve_stored_session() -> SessionState {
    if storage::access_token().is_none() {
        return SessionState::Anonymous;
    }

    match api::get_current_user().await {
        Ok(user) => SessionState::Authenticated(user),
        Err(ApiError::Unauthorized) => refresh_session().await,
        Err(e) => {
            log::error!("session check failed: {}", e);
            SessionState::Anonymous
        }
    }
}

async fn refresh_session() -> SessionState {
    let Some(refresh_token) = storage::refresh_token() else {
        storage::clear_tokens();
        return SessionState::Anonymous;
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user().await {
                Ok(user) => SessionState::Authenticated(user),
                Err(e) => {
                    log::error!("session check after refresh failed: {}", e);
                    SessionState::Anonymous
                }
            }
        }
        Err(e) => {
            log::info!("token refresh rejected: {}", e);
            storage::clear_tokens();
            SessionState::Anonymous
        }
    }
}

/// Provides [`SessionContext`] to its children and starts session resolution
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    session.init();
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
