//! Navigation Bar Component
//!
//! App title, links between resource views, and the logout button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;

/// (path, label) of every resource view
const NAV_LINKS: &[(&str, &str)] = &[
    ("/warehouse", "Warehouse"),
    ("/clients", "Clients"),
    ("/orders", "Orders"),
    ("/filaments", "Filament types"),
    ("/purchases", "Purchases"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <h1>"Filament Manager"</h1>
            <nav class="app-nav">
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <A href=*href>{*label}</A>
                }).collect_view()}
            </nav>
            <button class="logout-button" on:click=move |_| ctx.logout()>
                "Log out"
            </button>
        </header>
    }
}
