//! Purchases View
//!
//! Add-purchase form with the currency / exchange-rate toggle, and the
//! purchase table with remaining weight and cost per gram.

use leptos::prelude::*;

use filament_core::{Currency, LoadEpoch, Loadable, PurchaseBook, PurchaseDraft, PurchaseRow, Purchases};

use crate::context::use_app_context;
use crate::loader::{alert, reload, submit};
use crate::store::{use_inventory, InventoryStoreFields};

#[component]
pub fn PurchasesView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory();
    let epoch = StoredValue::new(LoadEpoch::new());
    let draft = RwSignal::new(PurchaseDraft::default());
    let saving = RwSignal::new(false);

    let apply = move |state: Loadable<PurchaseBook>| {
        if let Loadable::Ready(book) = &state {
            draft.update(|d| d.ensure_filament_type(&book.filament_types));
        }
        store.purchases().set(state);
    };

    Effect::new(move |_| {
        let _ = ctx.token.get();
        reload::<Purchases>(ctx, epoch, apply);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().build() {
            Ok(payload) => submit::<Purchases>(ctx, epoch, payload, saving, apply, move || {
                draft.update(PurchaseDraft::clear)
            }),
            Err(err) => alert(&err.user_message()),
        }
    };

    let filament_options = move || {
        store.purchases().with(|state| {
            state
                .ready()
                .map(|book| book.filament_types.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="management-panel">
            <section class="form-section">
                <h2>"Register a purchase"</h2>
                <form on:submit=on_submit>
                    <label>"Filament type"</label>
                    <select
                        required
                        prop:value=move || draft.with(|d| d.filament_type_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<u32>().ok();
                            draft.update(|d| d.filament_type_id = id);
                        }
                    >
                        {move || filament_options().into_iter().map(|ft| view! {
                            <option value=ft.id.to_string()>{ft.label()}</option>
                        }).collect_view()}
                    </select>

                    <label>"Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        required
                        prop:value=move || draft.with(|d| d.price.clone())
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />

                    <label>"Currency"</label>
                    <select
                        prop:value=move || draft.with(|d| d.currency().to_string())
                        on:change=move |ev| {
                            if let Ok(currency) = event_target_value(&ev).parse::<Currency>() {
                                draft.update(|d| d.set_currency(currency));
                            }
                        }
                    >
                        {Currency::ALL.iter().map(|c| view! {
                            <option value=c.as_str()>{c.as_str()}</option>
                        }).collect_view()}
                    </select>

                    <Show when=move || draft.with(PurchaseDraft::rate_editable)>
                        <label>"Exchange rate to PLN"</label>
                        <input
                            type="number"
                            step="0.0001"
                            min="0"
                            required
                            prop:value=move || draft.with(|d| d.exchange_rate().to_string())
                            on:input=move |ev| draft.update(|d| d.set_exchange_rate(&event_target_value(&ev)))
                        />
                    </Show>

                    <label>"Initial weight (g)"</label>
                    <input
                        type="number"
                        step="1"
                        min="1"
                        required
                        prop:value=move || draft.with(|d| d.initial_weight.clone())
                        on:input=move |ev| draft.update(|d| d.initial_weight = event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || saving.get()>"Add purchase"</button>
                </form>
            </section>

            <section class="list-section">
                <h2>"Purchases"</h2>
                {move || match store.purchases().get() {
                    Loadable::Loading => view! { <p>"Loading purchases..."</p> }.into_any(),
                    Loadable::Failed(msg) => view! { <p class="error-message">"Error: " {msg}</p> }.into_any(),
                    Loadable::Ready(book) if book.purchases.is_empty() => {
                        view! { <p>"No purchases yet."</p> }.into_any()
                    }
                    Loadable::Ready(book) => view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Filament"</th>
                                    <th>"Remaining"</th>
                                    <th>"Price"</th>
                                    <th>"Cost / g"</th>
                                    <th>"Purchased"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {book.purchases.iter().map(PurchaseRow::from).map(|row| view! {
                                    <tr>
                                        <td>{row.filament}</td>
                                        <td>{row.weight}</td>
                                        <td>{row.price}</td>
                                        <td>{row.cost_per_gram}</td>
                                        <td>{row.date}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                }}
            </section>
        </div>
    }
}
