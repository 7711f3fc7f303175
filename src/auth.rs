//! Session state container.
//!
//! Holds the current user and bearer token behind a single signal, updated
//! through reducer-style dispatch. Token and user are mirrored to
//! localStorage so a reload can restore the session; restoration fetches
//! `GET /auth/me` and logs out silently when that fails.

use crate::api;
use crate::dto::{Role, UserDto};
use leptos::{
    create_rw_signal, expect_context, provide_context, RwSignal, SignalGetUntracked, SignalSet,
};
use wasm_bindgen_futures::spawn_local;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserDto>,
    pub token: Option<String>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SetUser(Option<UserDto>),
    SetToken(Option<String>),
    Logout,
}

pub fn reduce(state: &Session, action: AuthAction) -> Session {
    match action {
        AuthAction::SetUser(user) => Session {
            user,
            token: state.token.clone(),
        },
        AuthAction::SetToken(token) => Session {
            user: state.user.clone(),
            token,
        },
        AuthAction::Logout => Session::default(),
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext(pub RwSignal<Session>);

/// Create the auth signal and put it into context. The token is seeded from
/// storage synchronously so guarded routes do not bounce to `/login` while
/// `restore` is still fetching the user.
pub fn provide_auth() -> AuthContext {
    let session = Session {
        user: None,
        token: storage_get(TOKEN_KEY),
    };
    let auth = AuthContext(create_rw_signal(session));
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    /// Apply an action to the session; token changes and logout are
    /// mirrored to storage.
    pub fn dispatch(self, action: AuthAction) {
        match &action {
            AuthAction::SetToken(Some(token)) => storage_set(TOKEN_KEY, token),
            AuthAction::SetToken(None) => storage_remove(TOKEN_KEY),
            AuthAction::Logout => {
                storage_remove(TOKEN_KEY);
                storage_remove(USER_KEY);
            }
            AuthAction::SetUser(_) => {}
        }
        let next = reduce(&self.0.get_untracked(), action);
        self.0.set(next);
    }

    /// Authenticate against the backend. On failure the error propagates to
    /// the caller and the session is left untouched.
    pub async fn login(self, email: &str, password: &str) -> Result<(), String> {
        let data = api::login(email, password).await?;
        self.dispatch(AuthAction::SetToken(Some(data.token)));
        if let Ok(json) = serde_json::to_string(&data.user) {
            storage_set(USER_KEY, &json);
        }
        self.dispatch(AuthAction::SetUser(Some(data.user)));
        Ok(())
    }

    pub fn logout(self) {
        self.dispatch(AuthAction::Logout);
    }

    /// Rehydrate on startup: with a stored token, fetch the current user;
    /// on failure, log out silently.
    pub fn restore(self) {
        let Some(token) = storage_get(TOKEN_KEY) else {
            return;
        };
        spawn_local(async move {
            match api::get_me(&token).await {
                Ok(user) => {
                    self.dispatch(AuthAction::SetToken(Some(token)));
                    self.dispatch(AuthAction::SetUser(Some(user)));
                }
                Err(e) => {
                    log::warn!("failed to restore session: {e}");
                    self.logout();
                }
            }
        });
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: Role) -> UserDto {
        UserDto {
            id: 1,
            name: "Noa".into(),
            email: "noa@example.com".into(),
            role,
            is_active: true,
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn set_token_preserves_user() {
        let state = Session {
            user: Some(sample_user(Role::Customer)),
            token: None,
        };
        let next = reduce(&state, AuthAction::SetToken(Some("t-1".into())));
        assert_eq!(next.token.as_deref(), Some("t-1"));
        assert!(next.user.is_some());
    }

    #[test]
    fn set_user_preserves_token() {
        let state = Session {
            user: None,
            token: Some("t-1".into()),
        };
        let next = reduce(&state, AuthAction::SetUser(Some(sample_user(Role::Agent))));
        assert_eq!(next.token.as_deref(), Some("t-1"));
        assert_eq!(next.role(), Some(Role::Agent));
    }

    #[test]
    fn logout_clears_user_and_token() {
        let state = Session {
            user: Some(sample_user(Role::Admin)),
            token: Some("t-1".into()),
        };
        let next = reduce(&state, AuthAction::Logout);
        assert_eq!(next, Session::default());
    }

    #[test]
    fn clearing_token_keeps_user_until_told_otherwise() {
        let state = Session {
            user: Some(sample_user(Role::Customer)),
            token: Some("t-1".into()),
        };
        let next = reduce(&state, AuthAction::SetToken(None));
        assert_eq!(next.token, None);
        assert!(next.user.is_some());
    }
}
