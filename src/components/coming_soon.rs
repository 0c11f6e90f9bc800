//! Placeholder Views
//!
//! Routes that exist in the navigation but have no API behind them yet.

use leptos::prelude::*;

#[component]
fn ComingSoon(title: &'static str) -> impl IntoView {
    view! {
        <section class="list-section full-width">
            <h2>{title}</h2>
            <p>"This section is under construction."</p>
        </section>
    }
}

#[component]
pub fn ClientsView() -> impl IntoView {
    view! { <ComingSoon title="Clients" /> }
}

#[component]
pub fn OrdersView() -> impl IntoView {
    view! { <ComingSoon title="Orders" /> }
}
