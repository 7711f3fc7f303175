//! Route gating.
//!
//! `Protected` wraps a page and redirects instead of rendering it when the
//! session does not satisfy the route's requirements. The decision itself
//! is a pure function over the session.

use crate::auth::{use_auth, Session};
use crate::dto::Role;
use leptos::*;
use leptos_router::Redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectLogin,
    RedirectDashboard,
}

/// No token: go log in. Allow-list given and the loaded user's role not on
/// it: back to the dashboard. A token whose user is still being fetched
/// passes; role checks only apply once the user is known.
pub fn check_access(session: &Session, allowed_roles: Option<&[Role]>) -> Access {
    if session.token.is_none() {
        return Access::RedirectLogin;
    }
    if let (Some(allowed), Some(role)) = (allowed_roles, session.role()) {
        if !allowed.contains(&role) {
            return Access::RedirectDashboard;
        }
    }
    Access::Allow
}

#[component]
pub fn Protected(
    #[prop(optional, into)] allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    view! {
      {move || match auth.0.with(|s| check_access(s, allowed_roles.as_deref())) {
          Access::Allow => children().into_view(),
          Access::RedirectLogin => view! { <Redirect path="/login"/> }.into_view(),
          Access::RedirectDashboard => view! { <Redirect path="/dashboard"/> }.into_view(),
      }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::UserDto;

    fn session(token: Option<&str>, role: Option<Role>) -> Session {
        Session {
            token: token.map(str::to_string),
            user: role.map(|role| UserDto {
                id: 9,
                name: "Omer".into(),
                email: "omer@example.com".into(),
                role,
                is_active: true,
                created_at: "2026-01-01T00:00:00Z".into(),
            }),
        }
    }

    #[test]
    fn no_token_redirects_to_login() {
        let anon = session(None, None);
        assert_eq!(check_access(&anon, None), Access::RedirectLogin);
        assert_eq!(
            check_access(&anon, Some(&[Role::Admin])),
            Access::RedirectLogin
        );
    }

    #[test]
    fn role_outside_allow_list_redirects_to_dashboard() {
        let customer = session(Some("t"), Some(Role::Customer));
        assert_eq!(
            check_access(&customer, Some(&[Role::Admin])),
            Access::RedirectDashboard
        );
        assert_eq!(
            check_access(&customer, Some(&[Role::Agent, Role::Admin])),
            Access::RedirectDashboard
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let admin = session(Some("t"), Some(Role::Admin));
        assert_eq!(check_access(&admin, Some(&[Role::Admin])), Access::Allow);
        assert_eq!(check_access(&admin, None), Access::Allow);
    }

    #[test]
    fn token_without_loaded_user_is_allowed() {
        // Rehydration in flight: the role check waits for the user.
        let pending = session(Some("t"), None);
        assert_eq!(check_access(&pending, Some(&[Role::Admin])), Access::Allow);
    }
}
