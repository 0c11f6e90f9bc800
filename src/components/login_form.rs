//! Login Form Component
//!
//! Exchanges the shared password for a session token.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_is_loading.set(true);
        let pw = password.get_untracked();

        spawn_local(async move {
            // On success the session listener swaps this view out.
            if let Err(err) = ctx.client().login(&pw).await {
                log::warn!("[Login] {}", err);
                set_error.set(Some(err.user_message()));
                set_is_loading.set(false);
            }
        });
    };

    view! {
        <div class="login-container">
            <form class="login-form" on:submit=on_submit>
                <h1>"Filament Manager"</h1>
                <h2>"Log in"</h2>
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <button type="submit" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Logging in..." } else { "Log in" }}
                </button>
                {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
            </form>
        </div>
    }
}
