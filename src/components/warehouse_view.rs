//! Warehouse View
//!
//! Add-product form whose fields follow the selected category, and the
//! product list. Categories and products load together.

use leptos::prelude::*;

use filament_core::{CategoryKind, LoadEpoch, Loadable, ProductDraft, Stock, Warehouse};

use crate::context::use_app_context;
use crate::loader::{alert, reload, submit};
use crate::store::{use_inventory, InventoryStoreFields};

#[component]
pub fn WarehouseView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory();
    let epoch = StoredValue::new(LoadEpoch::new());
    let draft = RwSignal::new(ProductDraft::default());
    let saving = RwSignal::new(false);

    let apply = move |state: Loadable<Stock>| {
        if let Loadable::Ready(stock) = &state {
            draft.update(|d| d.ensure_category(&stock.categories));
        }
        store.stock().set(state);
    };

    Effect::new(move |_| {
        let _ = ctx.token.get();
        reload::<Warehouse>(ctx, epoch, apply);
    });

    let categories = move || {
        store.stock().with(|state| state.ready().map(|s| s.categories.clone()).unwrap_or_default())
    };
    let kind = Memo::new(move |_| {
        let categories = categories();
        draft.with(|d| d.kind(&categories))
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().build(&categories()) {
            Ok(payload) => submit::<Warehouse>(ctx, epoch, payload, saving, apply, move || {
                draft.update(ProductDraft::clear)
            }),
            Err(err) => alert(&err.user_message()),
        }
    };

    let text_field = move |label: &'static str, read: fn(&ProductDraft) -> String, write: fn(&mut ProductDraft, String)| {
        view! {
            <label>{label}</label>
            <input
                type="text"
                required
                prop:value=move || draft.with(read)
                on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
            />
        }
    };

    let form = move || view! {
        <section class="form-section">
            <h2>"Add a new product"</h2>
            <form on:submit=on_submit>
                <label>"Category"</label>
                <select
                    prop:value=move || draft.with(|d| d.category_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<u32>().ok();
                        draft.update(|d| d.category_id = id);
                    }
                >
                    {move || categories().into_iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name}</option>
                    }).collect_view()}
                </select>

                {move || match kind.get() {
                    CategoryKind::Filament => view! {
                        {text_field("Manufacturer", |d| d.manufacturer.clone(), |d, v| d.manufacturer = v)}
                        {text_field("Material type", |d| d.material_type.clone(), |d, v| d.material_type = v)}
                        {text_field("Color", |d| d.color.clone(), |d, v| d.color = v)}
                    }.into_any(),
                    CategoryKind::Generic => view! {
                        {text_field("Product name", |d| d.name.clone(), |d, v| d.name = v)}
                        {text_field("Unit (g, ml, pcs, h)", |d| d.unit.clone(), |d, v| d.unit = v)}
                    }.into_any(),
                }}
                <button type="submit" disabled=move || saving.get()>"Add product"</button>
            </form>
        </section>
    };

    view! {
        {move || match store.stock().get() {
            Loadable::Loading => view! { <p>"Loading warehouse data..."</p> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="error-message">"Error: " {msg}</p> }.into_any(),
            Loadable::Ready(stock) => view! {
                <div class="management-panel">
                    {form()}
                    <section class="form-section">
                        <h2>"Add categories and purchases (coming soon)"</h2>
                    </section>
                </div>
                <section class="list-section full-width">
                    <h2>"Products"</h2>
                    <ProductTable stock=stock />
                </section>
            }.into_any(),
        }}
    }
}

#[component]
fn ProductTable(stock: Stock) -> impl IntoView {
    if stock.products.is_empty() {
        return view! { <p>"No products yet."</p> }.into_any();
    }

    let Stock { categories, products } = stock;
    view! {
        <table>
            <thead>
                <tr><th>"Name"</th><th>"Category"</th><th>"Unit"</th></tr>
            </thead>
            <tbody>
                {products.into_iter().map(|p| view! {
                    <tr>
                        <td>{p.display_name()}</td>
                        <td>{p.category_name(&categories)}</td>
                        <td>{p.unit.clone().unwrap_or_default()}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
