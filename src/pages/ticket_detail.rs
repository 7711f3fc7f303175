use crate::api;
use crate::auth::use_auth;
use crate::dto::{CommentDto, LookupDto, Role, TicketDto, UserDto};
use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

fn parse_ticket_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[component]
pub fn TicketDetailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();

    let ticket = create_rw_signal(None::<TicketDto>);
    let comments = create_rw_signal(Vec::<CommentDto>::new());
    let statuses = create_rw_signal(Vec::<LookupDto>::new());
    let agents = create_rw_signal(Vec::<UserDto>::new());
    let new_comment = create_rw_signal(String::new());
    let loading = create_rw_signal(true);
    let submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let token = create_memo(move |_| auth.0.with(|s| s.token.clone()));
    let role = create_memo(move |_| auth.0.with(|s| s.role()));
    let ticket_id =
        create_memo(move |_| params.with(|p| p.get("id").and_then(|v| parse_ticket_id(v))));

    create_effect(move |_| {
        let Some(token) = token.get() else {
            return;
        };
        // An unparsable id can never load; fall through to "Ticket not found".
        let Some(id) = ticket_id.get() else {
            loading.set(false);
            return;
        };
        let is_admin = role.get() == Some(Role::Admin);
        loading.set(true);
        spawn_local(async move {
            let t = api::get_ticket(&token, id).await;
            let c = api::get_comments(&token, id).await;
            let s = api::get_statuses(&token).await;

            let mut errs = Vec::new();
            match t {
                Ok(v) => ticket.set(Some(v)),
                Err(e) => errs.push(format!("ticket: {e}")),
            }
            match c {
                Ok(v) => comments.set(v),
                Err(e) => errs.push(format!("comments: {e}")),
            }
            match s {
                Ok(v) => statuses.set(v),
                Err(e) => errs.push(format!("statuses: {e}")),
            }
            if is_admin {
                match api::get_users(&token).await {
                    Ok(users) => agents.set(
                        users
                            .into_iter()
                            .filter(|u| matches!(u.role, Role::Agent | Role::Admin))
                            .collect(),
                    ),
                    Err(e) => errs.push(format!("users: {e}")),
                }
            }

            if errs.is_empty() {
                error.set(None);
            } else {
                error.set(Some(errs.join("\n")));
            }
            loading.set(false);
        });
    });

    // PATCH a single field and replace the ticket with the response.
    let patch_ticket = move |patch: serde_json::Value| {
        let (Some(token), Some(id)) = (token.get_untracked(), ticket_id.get_untracked()) else {
            return;
        };
        spawn_local(async move {
            match api::update_ticket(&token, id, patch).await {
                Ok(updated) => ticket.set(Some(updated)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let change_status = move |ev: ev::Event| {
        if let Ok(status_id) = event_target_value(&ev).parse::<i64>() {
            patch_ticket(serde_json::json!({ "status_id": status_id }));
        }
    };

    let assign_agent = move |ev: ev::Event| {
        if let Ok(agent_id) = event_target_value(&ev).parse::<i64>() {
            patch_ticket(serde_json::json!({ "assigned_to": agent_id }));
        }
    };

    let add_comment = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let content = new_comment.get_untracked().trim().to_string();
        if content.is_empty() {
            return;
        }
        let (Some(token), Some(id)) = (token.get_untracked(), ticket_id.get_untracked()) else {
            return;
        };
        submitting.set(true);
        spawn_local(async move {
            match api::create_comment(&token, id, &content).await {
                Ok(comment) => {
                    comments.update(|list| list.push(comment));
                    new_comment.set(String::new());
                }
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    let back = move |_| navigate("/tickets", Default::default());

    let can_update_status =
        move || matches!(role.get(), Some(Role::Agent) | Some(Role::Admin));
    let is_admin = move || role.get() == Some(Role::Admin);

    view! {
      <div class="ticket-detail-container">
        <header class="ticket-detail-header">
          <button class="back-btn" on:click=back>"Back to Tickets"</button>
        </header>

        <main class="ticket-detail-content">
          {move || error.get().map(|e| view! { <pre class="error-message">{e}</pre> })}

          <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading ticket..."</div> }
          >
            {move || match ticket.get() {
                None => view! { <div class="error-message">"Ticket not found"</div> }.into_view(),
                Some(t) => {
                    let priority = t
                        .priority_name
                        .clone()
                        .unwrap_or_else(|| format!("Priority {}", t.priority_id));
                    let status = t
                        .status_name
                        .clone()
                        .unwrap_or_else(|| format!("Status {}", t.status_id));
                    let status_id = t.status_id;
                    let assigned_to = t.assigned_to;
                    view! {
                      <div class="ticket-info-card">
                        <div class="ticket-header">
                          <h1>{format!("#{} - {}", t.id, t.subject)}</h1>
                          <div class="ticket-badges">
                            <span class=format!("priority-badge priority-{}", t.priority_id)>
                              {priority}
                            </span>
                            <Show
                              when=can_update_status
                              fallback=move || view! {
                                <span class=format!("status-badge status-{status_id}")>
                                  {status.clone()}
                                </span>
                              }
                            >
                              <select
                                class="status-select"
                                prop:value=status_id.to_string()
                                on:change=change_status
                              >
                                <For
                                  each=move || statuses.get()
                                  key=|s| s.id
                                  children=move |s: LookupDto| view! {
                                    <option value=s.id.to_string()>{s.name.clone()}</option>
                                  }
                                />
                              </select>
                            </Show>
                            <Show when=is_admin fallback=|| ()>
                              <select
                                class="assign-select"
                                prop:value=assigned_to.map(|id| id.to_string()).unwrap_or_default()
                                on:change=assign_agent
                              >
                                <option value="">"Assign to Agent..."</option>
                                <For
                                  each=move || agents.get()
                                  key=|a| a.id
                                  children=move |a: UserDto| view! {
                                    <option value=a.id.to_string()>
                                      {format!("{} ({})", a.name, a.role.as_str())}
                                    </option>
                                  }
                                />
                              </select>
                            </Show>
                          </div>
                        </div>

                        <div class="ticket-body">
                          <p class="ticket-description">{t.description.clone()}</p>
                          <div class="ticket-meta">
                            <span>{format!("Created: {}", t.created_at)}</span>
                            <span>{format!("Updated: {}", t.updated_at)}</span>
                          </div>
                        </div>
                      </div>
                    }
                    .into_view()
                }
            }}

            <div class="comments-section">
              <h2>{move || format!("Comments ({})", comments.with(Vec::len))}</h2>

              <div class="comments-list">
                <Show
                  when=move || comments.with(|c| !c.is_empty())
                  fallback=|| view! {
                    <p class="no-comments">"No comments yet. Be the first to comment!"</p>
                  }
                >
                  <For
                    each=move || comments.get()
                    key=|c| c.id
                    children=move |c: CommentDto| {
                      let author = c.author_name.clone().unwrap_or_else(|| "Unknown".into());
                      view! {
                        <div class="comment-card">
                          <div class="comment-header">
                            <strong>{author}</strong>
                            <span class="comment-date">{c.created_at.clone()}</span>
                          </div>
                          <p class="comment-content">{c.content.clone()}</p>
                        </div>
                      }
                    }
                  />
                </Show>
              </div>

              <form class="comment-form" on:submit=add_comment>
                <textarea
                  prop:value=move || new_comment.get()
                  on:input=move |ev| new_comment.set(event_target_value(&ev))
                  placeholder="Add a comment..."
                  rows=4
                  disabled=move || submitting.get()
                ></textarea>
                <button
                  type="submit"
                  disabled=move || submitting.get() || new_comment.with(|c| c.trim().is_empty())
                >
                  {move || if submitting.get() { "Adding..." } else { "Add Comment" }}
                </button>
              </form>
            </div>
          </Show>
        </main>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_ticket_id;

    #[test]
    fn numeric_route_ids_parse() {
        assert_eq!(parse_ticket_id("42"), Some(42));
    }

    #[test]
    fn garbage_route_ids_are_rejected() {
        assert_eq!(parse_ticket_id("abc"), None);
        assert_eq!(parse_ticket_id(""), None);
        assert_eq!(parse_ticket_id("12abc"), None);
    }
}
