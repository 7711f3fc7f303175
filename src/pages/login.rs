use crate::auth::use_auth;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please fill in all fields".into()));
            return;
        }
        error.set(None);
        loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(&email_value, &password_value).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
      <div class="login-container">
        <div class="login-card">
          <h1>"Helpdesk Login"</h1>
          <p class="subtitle">"Sign in to your account"</p>

          <form on:submit=submit>
            <div class="form-group">
              <label for="email">"Email"</label>
              <input
                type="email"
                id="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
                placeholder="Enter your email"
                disabled=move || loading.get()
              />
            </div>

            <div class="form-group">
              <label for="password">"Password"</label>
              <input
                type="password"
                id="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
                placeholder="Enter your password"
                disabled=move || loading.get()
              />
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <button type="submit" class="submit-btn" disabled=move || loading.get()>
              {move || if loading.get() { "Signing in..." } else { "Sign In" }}
            </button>
          </form>
        </div>
      </div>
    }
}
