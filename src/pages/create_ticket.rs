use crate::api;
use crate::auth::use_auth;
use crate::dto::LookupDto;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

/// Reject the form before any network call.
fn validate(subject: &str, description: &str) -> Option<&'static str> {
    if subject.trim().is_empty() || description.trim().is_empty() {
        return Some("Please fill in all fields");
    }
    None
}

#[component]
pub fn CreateTicketPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let subject = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let priority_id = create_rw_signal(1i64);
    let priorities = create_rw_signal(Vec::<LookupDto>::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let token = create_memo(move |_| auth.0.with(|s| s.token.clone()));

    create_effect(move |_| {
        let Some(token) = token.get() else { return };
        spawn_local(async move {
            match api::get_priorities(&token).await {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        priority_id.set(first.id);
                    }
                    priorities.set(list);
                }
                Err(e) => log::warn!("failed to load priorities: {e}"),
            }
        });
    });

    let submit = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let subject_value = subject.get_untracked();
            let description_value = description.get_untracked();
            if let Some(message) = validate(&subject_value, &description_value) {
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
                match api::create_ticket(
                    &token,
                    subject_value.trim(),
                    description_value.trim(),
                    priority_id.get_untracked(),
                )
                .await
                {
                    Ok(_) => navigate("/tickets", Default::default()),
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/tickets", Default::default());

    view! {
      <div class="create-ticket-container">
        <div class="create-ticket-card">
          <h1>"Create New Ticket"</h1>
          <p class="subtitle">"Submit a new support request"</p>

          <form on:submit=submit>
            <div class="form-group">
              <label for="subject">"Subject *"</label>
              <input
                type="text"
                id="subject"
                prop:value=move || subject.get()
                on:input=move |ev| subject.set(event_target_value(&ev))
                placeholder="Brief description of your issue"
                maxlength=200
                disabled=move || loading.get()
              />
            </div>

            <div class="form-group">
              <label for="description">"Description *"</label>
              <textarea
                id="description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
                placeholder="Provide detailed information about your issue"
                rows=6
                disabled=move || loading.get()
              ></textarea>
            </div>

            <div class="form-group">
              <label for="priority">"Priority"</label>
              <select
                id="priority"
                prop:value=move || priority_id.get().to_string()
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                        priority_id.set(id);
                    }
                }
                disabled=move || loading.get()
              >
                <For
                  each=move || priorities.get()
                  key=|p| p.id
                  children=move |p: LookupDto| view! {
                    <option value=p.id.to_string()>{p.name.clone()}</option>
                  }
                />
              </select>
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
                {move || if loading.get() { "Creating..." } else { "Create Ticket" }}
              </button>
            </div>
          </form>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn empty_subject_is_rejected() {
        assert_eq!(validate("", "something broke"), Some("Please fill in all fields"));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        assert_eq!(validate("   ", "something broke"), Some("Please fill in all fields"));
        assert_eq!(validate("printer on fire", " \n "), Some("Please fill in all fields"));
    }

    #[test]
    fn filled_form_passes() {
        assert_eq!(validate("printer on fire", "it is very much on fire"), None);
    }
}
