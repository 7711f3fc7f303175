use crate::api;
use crate::auth::use_auth;
use crate::dto::{Role, TicketDto};
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn TicketsPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let tickets = create_rw_signal(Vec::<TicketDto>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let token = create_memo(move |_| auth.0.with(|s| s.token.clone()));
    let is_customer = create_memo(move |_| auth.0.with(|s| s.role()) == Some(Role::Customer));

    create_effect(move |_| {
        let Some(token) = token.get() else { return };
        loading.set(true);
        spawn_local(async move {
            match api::get_tickets(&token).await {
                Ok(list) => {
                    tickets.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/dashboard", Default::default())
    };
    let new_ticket = {
        let navigate = navigate.clone();
        move |_| navigate("/tickets/new", Default::default())
    };
    let first_ticket = {
        let navigate = navigate.clone();
        move |_| navigate("/tickets/new", Default::default())
    };

    view! {
      <div class="tickets-container">
        <header class="tickets-header">
          <div class="header-left">
            <button class="back-btn" on:click=back>"Back to Dashboard"</button>
            <h1>"My Tickets"</h1>
          </div>
          <Show when=move || is_customer.get() fallback=|| ()>
            <button class="new-ticket-btn" on:click=new_ticket.clone()>"+ New Ticket"</button>
          </Show>
        </header>

        <main class="tickets-content">
          {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

          <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading tickets..."</div> }
          >
            <Show
              when=move || tickets.with(|t| !t.is_empty())
              fallback={
                let first_ticket = first_ticket.clone();
                move || {
                  let first_ticket = first_ticket.clone();
                  view! {
                    <div class="no-tickets">
                      <p>"No tickets found"</p>
                      <Show when=move || is_customer.get() fallback=|| ()>
                        <button class="create-first-btn" on:click=first_ticket.clone()>
                          "Create Your First Ticket"
                        </button>
                      </Show>
                    </div>
                  }
                }
              }
            >
              <div class="tickets-list">
                <For
                  each=move || tickets.get()
                  key=|t| t.id
                  children=move |t: TicketDto| {
                      let navigate = use_navigate();
                      let open = {
                        let id = t.id;
                        move |_| navigate(&format!("/tickets/{id}"), Default::default())
                      };
                      let priority = t
                        .priority_name
                        .clone()
                        .unwrap_or_else(|| format!("Priority {}", t.priority_id));
                      let status = t
                        .status_name
                        .clone()
                        .unwrap_or_else(|| format!("Status {}", t.status_id));
                      view! {
                        <div class="ticket-card" on:click=open>
                          <div class="ticket-header-row">
                            <h3>{format!("#{} - {}", t.id, t.subject)}</h3>
                            <span class=format!("priority-badge priority-{}", t.priority_id)>
                              {priority}
                            </span>
                          </div>
                          <p class="ticket-description">{t.description.clone()}</p>
                          <div class="ticket-footer">
                            <span class=format!("status-badge status-{}", t.status_id)>
                              {status}
                            </span>
                            <span class="ticket-date">{t.created_at.clone()}</span>
                          </div>
                        </div>
                      }
                  }
                />
              </div>
            </Show>
          </Show>
        </main>
      </div>
    }
}
