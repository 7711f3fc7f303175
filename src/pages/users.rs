use crate::api;
use crate::auth::use_auth;
use crate::dto::UserDto;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let users = create_rw_signal(Vec::<UserDto>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let token = create_memo(move |_| auth.0.with(|s| s.token.clone()));

    create_effect(move |_| {
        let Some(token) = token.get() else { return };
        loading.set(true);
        spawn_local(async move {
            match api::get_users(&token).await {
                Ok(list) => {
                    users.set(list);
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
    let new_user = move |_| navigate("/users/new", Default::default());

    view! {
      <div class="users-container">
        <header class="users-header">
          <div class="header-left">
            <button class="back-btn" on:click=back>"Back to Dashboard"</button>
            <h1>"Users Management"</h1>
          </div>
          <button class="new-user-btn" on:click=new_user>"+ Add New User"</button>
        </header>

        <main class="users-content">
          {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

          <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading users..."</div> }
          >
            <div class="users-table-container">
              <table class="users-table">
                <thead>
                  <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Created At"</th>
                  </tr>
                </thead>
                <tbody>
                  <For
                    each=move || users.get()
                    key=|u| u.id
                    children=move |u: UserDto| {
                      let activity = if u.is_active { "Active" } else { "Inactive" };
                      let activity_class =
                          if u.is_active { "status-badge active" } else { "status-badge inactive" };
                      view! {
                        <tr>
                          <td>{u.id}</td>
                          <td>{u.name.clone()}</td>
                          <td>{u.email.clone()}</td>
                          <td>
                            <span class=format!("role-badge role-{}", u.role.as_str())>
                              {u.role.as_str()}
                            </span>
                          </td>
                          <td><span class=activity_class>{activity}</span></td>
                          <td>{u.created_at.clone()}</td>
                        </tr>
                      }
                    }
                  />
                </tbody>
              </table>
            </div>
          </Show>
        </main>
      </div>
    }
}
