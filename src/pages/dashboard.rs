//! Role-specific dashboards. The page dispatches on the loaded user's role;
//! the variants share a header with the welcome line and logout.

use crate::auth::use_auth;
use crate::dto::Role;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    view! {
      {move || match auth.0.with(|s| s.role()) {
          None => view! { <div class="loading">"Loading..."</div> }.into_view(),
          Some(Role::Customer) => view! { <CustomerDashboard/> }.into_view(),
          Some(Role::Agent) => view! { <AgentDashboard/> }.into_view(),
          Some(Role::Admin) => view! { <AdminDashboard/> }.into_view(),
      }}
    }
}

#[component]
fn DashboardHeader(title: &'static str) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let logout = move |_| {
        auth.logout();
        navigate("/login", Default::default());
    };
    let welcome = move || {
        auth.0.with(|s| {
            let name = s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
            format!("Welcome, {name}")
        })
    };
    view! {
      <header class="dashboard-header">
        <h1>{title}</h1>
        <div class="user-info">
          <span>{welcome}</span>
          <button class="logout-btn" on:click=logout>"Logout"</button>
        </div>
      </header>
    }
}

#[component]
fn CustomerDashboard() -> impl IntoView {
    let navigate = use_navigate();
    let new_ticket = {
        let navigate = navigate.clone();
        move |_| navigate("/tickets/new", Default::default())
    };
    let my_tickets = move |_| navigate("/tickets", Default::default());

    view! {
      <div class="dashboard-container">
        <DashboardHeader title="Customer Dashboard"/>
        <main class="dashboard-content">
          <div class="welcome-card">
            <h2>"Welcome to Your Helpdesk"</h2>
            <p>"Here you can view and manage your support tickets."</p>
          </div>
          <div class="actions-grid">
            <div class="action-card" on:click=new_ticket>
              <h3>"Create New Ticket"</h3>
              <p>"Submit a new support request"</p>
            </div>
            <div class="action-card" on:click=my_tickets>
              <h3>"My Tickets"</h3>
              <p>"View all your tickets"</p>
            </div>
          </div>
        </main>
      </div>
    }
}

#[component]
fn AgentDashboard() -> impl IntoView {
    let navigate = use_navigate();
    let assigned = move |_| navigate("/tickets", Default::default());

    view! {
      <div class="dashboard-container">
        <DashboardHeader title="Agent Dashboard"/>
        <main class="dashboard-content">
          <div class="welcome-card agent">
            <h2>"Agent Portal"</h2>
            <p>"Manage and respond to assigned tickets."</p>
          </div>
          <div class="actions-grid">
            <div class="action-card" on:click=assigned>
              <h3>"Assigned Tickets"</h3>
              <p>"View tickets assigned to you"</p>
            </div>
            <div class="action-card">
              <h3>"Statistics"</h3>
              <p>"View your performance"</p>
            </div>
          </div>
        </main>
      </div>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let navigate = use_navigate();
    let all_tickets = {
        let navigate = navigate.clone();
        move |_| navigate("/tickets", Default::default())
    };
    let manage_users = move |_| navigate("/users", Default::default());

    view! {
      <div class="dashboard-container">
        <DashboardHeader title="Admin Dashboard"/>
        <main class="dashboard-content">
          <div class="welcome-card admin">
            <h2>"Admin Control Panel"</h2>
            <p>"Manage all tickets, users, and system settings."</p>
          </div>
          <div class="actions-grid">
            <div class="action-card" on:click=all_tickets>
              <h3>"All Tickets"</h3>
              <p>"View and manage every ticket"</p>
            </div>
            <div class="action-card" on:click=manage_users>
              <h3>"User Management"</h3>
              <p>"Create and review user accounts"</p>
            </div>
          </div>
        </main>
      </div>
    }
}
