use crate::api;
use crate::auth::use_auth;
use crate::dto::Role;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

/// Reject the form before any network call.
fn validate(name: &str, email: &str, password: &str) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Some("Please fill in all fields");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    None
}

fn role_description(role: Role) -> &'static str {
    match role {
        Role::Customer => "Can create and view own tickets",
        Role::Agent => "Can view assigned tickets and update status",
        Role::Admin => "Full access to all tickets and system settings",
    }
}

#[component]
pub fn CreateUserPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Customer);
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let token = create_memo(move |_| auth.0.with(|s| s.token.clone()));

    let submit = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let name_value = name.get_untracked();
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            if let Some(message) = validate(&name_value, &email_value, &password_value) {
                error.set(Some(message.into()));
                return;
            }
            let Some(token) = token.get_untracked() else {
                error.set(Some("You must be logged in".into()));
                return;
            };
            error.set(None);
            loading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create_user(
                    &token,
                    name_value.trim(),
                    email_value.trim(),
                    &password_value,
                    role.get_untracked(),
                )
                .await
                {
                    Ok(_) => navigate("/users", Default::default()),
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/users", Default::default());

    view! {
      <div class="create-user-container">
        <div class="create-user-card">
          <h1>"Create New User"</h1>
          <p class="subtitle">"Add a new user to the system"</p>

          <form on:submit=submit>
            <div class="form-group">
              <label for="name">"Full Name *"</label>
              <input
                type="text"
                id="name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                placeholder="Enter full name"
                maxlength=100
                disabled=move || loading.get()
              />
            </div>

            <div class="form-group">
              <label for="email">"Email *"</label>
              <input
                type="email"
                id="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
                placeholder="Enter email address"
                disabled=move || loading.get()
              />
            </div>

            <div class="form-group">
              <label for="password">"Password *"</label>
              <input
                type="password"
                id="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
                placeholder="Enter password (min 6 characters)"
                disabled=move || loading.get()
              />
            </div>

            <div class="form-group">
              <label for="role">"Role *"</label>
              <select
                id="role"
                prop:value=move || role.get().as_str()
                on:change=move |ev| {
                    if let Some(parsed) = Role::parse(&event_target_value(&ev)) {
                        role.set(parsed);
                    }
                }
                disabled=move || loading.get()
              >
                <option value="customer">"Customer"</option>
                <option value="agent">"Agent"</option>
                <option value="admin">"Admin"</option>
              </select>
              <small class="role-description">
                {move || role_description(role.get())}
              </small>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form-actions">
              <button
                type="button"
                class="cancel-btn"
                on:click=cancel
                disabled=move || loading.get()
              >
                "Cancel"
              </button>
              <button type="submit" class="submit-btn" disabled=move || loading.get()>
                {move || if loading.get() { "Creating..." } else { "Create User" }}
              </button>
            </div>
          </form>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            validate("", "a@example.com", "secret1"),
            Some("Please fill in all fields")
        );
        assert_eq!(validate("Avi", "", "secret1"), Some("Please fill in all fields"));
        assert_eq!(
            validate("Avi", "a@example.com", "  "),
            Some("Please fill in all fields")
        );
    }

    #[test]
    fn short_password_is_rejected() {
        assert_eq!(
            validate("Avi", "a@example.com", "12345"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate("Avi", "a@example.com", "123456"), None);
    }

    #[test]
    fn every_role_has_a_description() {
        for role in [Role::Customer, Role::Agent, Role::Admin] {
            assert!(!role_description(role).is_empty());
        }
    }
}
