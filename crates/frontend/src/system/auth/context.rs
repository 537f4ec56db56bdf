use contracts::system::auth::{AuthSession, AuthUser};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthState {
    /// Signed in only with both a token and the user it belongs to
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    /// Session kept in localStorage from an earlier login
    fn restore() -> Self {
        let Some(access_token) = storage::get_access_token() else {
            return Self::default();
        };
        let user = storage::get_user().unwrap_or_else(|e| {
            log::warn!("{}", e);
            None
        });
        Self::from_stored(access_token, user).unwrap_or_else(|| {
            log::warn!("Stored session is incomplete; clearing it");
            storage::clear_session();
            Self::default()
        })
    }

    fn from_stored(access_token: String, user: Option<AuthUser>) -> Option<Self> {
        let state = Self {
            access_token: Some(access_token),
            user,
        };
        state.is_authenticated().then_some(state)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: store a fresh session and switch to the dashboard
pub fn start_session(session: AuthSession, set_auth_state: WriteSignal<AuthState>) {
    storage::save_access_token(&session.access_token);
    storage::save_user(&session.user);
    log::info!("Signed in as {}", session.user.display_name());

    set_auth_state.set(AuthState {
        access_token: Some(session.access_token),
        user: Some(session.user),
    });
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        serde_json::from_str(r#"{"id":"u1","email":"admin@bookbee.test"}"#).unwrap()
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        assert!(AuthState::from_stored("token".into(), None).is_none());
        assert!(!AuthState {
            access_token: Some("token".into()),
            user: None,
        }
        .is_authenticated());
    }

    #[test]
    fn test_token_with_user_restores() {
        let state = AuthState::from_stored("token".into(), Some(user())).unwrap();
        assert!(state.is_authenticated());
        assert!(!AuthState::default().is_authenticated());
    }
}
