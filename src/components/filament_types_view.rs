//! Filament Types View
//!
//! Add-filament form and the list of defined filament types.

use leptos::prelude::*;

use filament_core::{FilamentType, FilamentTypeDraft, FilamentTypes, LoadEpoch, Loadable};

use crate::context::use_app_context;
use crate::loader::{alert, reload, submit};
use crate::store::{use_inventory, InventoryStoreFields};

#[component]
pub fn FilamentTypesView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory();
    let epoch = StoredValue::new(LoadEpoch::new());
    let draft = RwSignal::new(FilamentTypeDraft::default());
    let saving = RwSignal::new(false);

    let apply = move |state: Loadable<Vec<FilamentType>>| store.filament_types().set(state);

    // Reload on mount and whenever the token changes
    Effect::new(move |_| {
        let _ = ctx.token.get();
        reload::<FilamentTypes>(ctx, epoch, apply);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().build() {
            Ok(payload) => submit::<FilamentTypes>(ctx, epoch, payload, saving, apply, move || {
                draft.set(FilamentTypeDraft::default())
            }),
            Err(err) => alert(&err.user_message()),
        }
    };

    view! {
        <div class="management-panel">
            <section class="form-section">
                <h2>"Add a new filament type"</h2>
                <form on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Manufacturer"
                        required
                        prop:value=move || draft.with(|d| d.manufacturer.clone())
                        on:input=move |ev| draft.update(|d| d.manufacturer = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Material (e.g. PLA, PETG)"
                        required
                        prop:value=move || draft.with(|d| d.material.clone())
                        on:input=move |ev| draft.update(|d| d.material = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Color"
                        required
                        prop:value=move || draft.with(|d| d.color.clone())
                        on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || saving.get()>"Add"</button>
                </form>
            </section>

            <section class="list-section">
                <h2>"Defined filament types"</h2>
                {move || match store.filament_types().get() {
                    Loadable::Loading => view! { <p>"Loading data..."</p> }.into_any(),
                    Loadable::Failed(msg) => view! { <p class="error-message">"Error: " {msg}</p> }.into_any(),
                    Loadable::Ready(types) if types.is_empty() => {
                        view! { <p>"No filament types yet. Add the first one!"</p> }.into_any()
                    }
                    Loadable::Ready(types) => view! {
                        <ul>
                            {types.into_iter().map(|ft| view! {
                                <li><strong>{ft.manufacturer}</strong> " " {ft.material} " - " {ft.color}</li>
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                }}
            </section>
        </div>
    }
}
