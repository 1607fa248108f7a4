//! Packing Item Component
//!
//! One row: packed checkbox, quantity, title and delete button.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_delete_item, store_toggle_packed, use_app_store, AppStateStoreFields};

#[component]
pub fn PackingItem(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    // Rows are keyed by id only, so the flag is read back from the store
    let packed = move || {
        store
            .list()
            .read()
            .get(id)
            .map(|item| item.packed)
            .unwrap_or(false)
    };

    view! {
        <div class="card">
            <input
                type="checkbox"
                class="card__check"
                prop:checked=packed
                on:change=move |_| store_toggle_packed(&store, id)
            />
            <h3 class="card__count">{item.quantity.to_string()}</h3>
            <h1 class=move || if packed() { "card__title packed" } else { "card__title" }>
                {item.title}
            </h1>
            <button class="deleteBtn" on:click=move |_| store_delete_item(&store, id)>
                "❌"
            </button>
        </div>
    }
}
