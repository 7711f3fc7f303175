use crate::auth::provide_auth;
use crate::dto::Role;
use crate::guard::Protected;
use crate::pages::create_ticket::CreateTicketPage;
use crate::pages::create_user::CreateUserPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::ticket_detail::TicketDetailPage;
use crate::pages::tickets::TicketsPage;
use crate::pages::users::UsersPage;
use leptos::*;
use leptos_router::{Redirect, Route, Router, Routes};

#[component]
pub fn App() -> impl IntoView {
    let auth = provide_auth();
    auth.restore();

    view! {
      <Router>
        <main>
          <Routes>
            <Route path="/login" view=LoginPage/>
            <Route
              path="/dashboard"
              view=|| view! { <Protected><DashboardPage/></Protected> }
            />
            <Route
              path="/tickets"
              view=|| view! { <Protected><TicketsPage/></Protected> }
            />
            <Route
              path="/tickets/new"
              view=|| view! {
                <Protected allowed_roles=vec![Role::Customer]>
                  <CreateTicketPage/>
                </Protected>
              }
            />
            <Route
              path="/tickets/:id"
              view=|| view! { <Protected><TicketDetailPage/></Protected> }
            />
            <Route
              path="/users"
              view=|| view! {
                <Protected allowed_roles=vec![Role::Admin]>
                  <UsersPage/>
                </Protected>
              }
            />
            <Route
              path="/users/new"
              view=|| view! {
                <Protected allowed_roles=vec![Role::Admin]>
                  <CreateUserPage/>
                </Protected>
              }
            />
            <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
            <Route path="/*any" view=NotFoundPage/>
          </Routes>
        </main>
      </Router>
    }
}
