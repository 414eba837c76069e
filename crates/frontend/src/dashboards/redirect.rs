//! One-shot navigation from `/dashboard` to the view of the user's role.

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;
use crate::system::auth::{use_session, SessionState};

/// Landing route of a role; unknown roles go to the work view
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Admin => routes::ADMIN_DASHBOARD,
        Role::Manager => routes::MANAGER_DASHBOARD,
        Role::Technician | Role::Unknown => routes::WORK,
    }
}

/// The redirect replaces `/dashboard` in history, so Back skips it
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Waits for the session to resolve, then yields the target route once.
///
/// While the session is loading nothing happens, however long that takes.
/// An anonymous session is left to the auth guard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RedirectMachine {
    done: bool,
}

impl RedirectMachine {
    pub fn observe(&mut self, session: &SessionState) -> Option<&'static str> {
        if self.done {
            return None;
        }
        let user = session.user()?;
        self.done = true;
        Some(dashboard_route(user.role))
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[component]
pub fn RoleRedirector() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();
    let navigate = use_navigate();
    let mut machine = RedirectMachine::default();

    Effect::new(move |_| {
        let target = session.state.with(|s| machine.observe(s));
        if let Some(path) = target {
            log::info!("redirecting to {}", path);
            navigate(path, redirect_options());
        }
    });

    view! {
        <div class="list-state">{move || i18n.t("common.loading")}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::SessionUser;
    use contracts::system::users::UserId;

    fn session(role: Role) -> SessionState {
        SessionState::Authenticated(SessionUser {
            id: UserId::new_v4(),
            username: "tester".into(),
            full_name: None,
            role,
        })
    }

    #[test]
    fn test_role_routes() {
        assert_eq!(dashboard_route(Role::Admin), "/admin/dashboard");
        assert_eq!(dashboard_route(Role::Manager), "/manager/dashboard");
        assert_eq!(dashboard_route(Role::Technician), "/work");
        assert_eq!(dashboard_route(Role::Unknown), "/work");
    }

    #[test]
    fn test_redirects_exactly_once() {
        let mut machine = RedirectMachine::default();
        assert_eq!(machine.observe(&session(Role::Admin)), Some("/admin/dashboard"));
        assert!(machine.is_done());
        assert_eq!(machine.observe(&session(Role::Admin)), None);
        assert_eq!(machine.observe(&session(Role::Manager)), None);
    }

    #[test]
    fn test_loading_session_keeps_waiting() {
        let mut machine = RedirectMachine::default();
        for _ in 0..3 {
            assert_eq!(machine.observe(&SessionState::Loading), None);
        }
        assert!(!machine.is_done());
        assert_eq!(machine.observe(&session(Role::Manager)), Some("/manager/dashboard"));
    }

    #[test]
    fn test_anonymous_session_does_not_redirect() {
        let mut machine = RedirectMachine::default();
        assert_eq!(machine.observe(&SessionState::Anonymous), None);
        assert!(!machine.is_done());
    }

    #[test]
    fn test_redirect_replaces_history_entry() {
        let options = redirect_options();
        assert!(options.replace);
    }

    #[test]
    fn test_null_role_goes_to_work_view() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":"7f6c1f4e-8d5b-4a3e-9a51-0c2b7f1e9d10","username":"x","role":null}"#)
                .unwrap();
        let mut machine = RedirectMachine::default();
        assert_eq!(
            machine.observe(&SessionState::Authenticated(user)),
            Some("/work")
        );
    }

    #[test]
    fn test_unrecognised_role_goes_to_work_view() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":"7f6c1f4e-8d5b-4a3e-9a51-0c2b7f1e9d10","username":"x","role":"intern"}"#)
                .unwrap();
        let mut machine = RedirectMachine::default();
        assert_eq!(
            machine.observe(&SessionState::Authenticated(user)),
            Some("/work")
        );
    }
}
