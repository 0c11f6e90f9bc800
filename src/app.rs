//! Filament Manager App
//!
//! Root component: login screen while signed out, routed resource views
//! while signed in.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{
    ClientsView, FilamentTypesView, LoginForm, NavBar, OrdersView, PurchasesView, WarehouseView,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_reset, Inventory};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let store = Store::new(Inventory::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Drop data loaded under a session that has ended
    Effect::new(move |_| {
        if ctx.token.with(Option::is_none) {
            store_reset(&store);
        }
    });

    let signed_in = move || ctx.token.with(Option::is_some);

    view! {
        <Show when=signed_in fallback=|| view! { <LoginForm /> }>
            <Router>
                <div class="App">
                    <NavBar />
                    <main class="container">
                        <Routes fallback=|| view! { <p>"Page not found."</p> }>
                            <Route path=path!("/") view=WarehouseView />
                            <Route path=path!("/warehouse") view=WarehouseView />
                            <Route path=path!("/clients") view=ClientsView />
                            <Route path=path!("/orders") view=OrdersView />
                            <Route path=path!("/filaments") view=FilamentTypesView />
                            <Route path=path!("/purchases") view=PurchasesView />
                        </Routes>
                    </main>
                </div>
            </Router>
        </Show>
    }
}
