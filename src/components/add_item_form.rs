//! Add Item Form Component
//!
//! Quantity dropdown, title input and the ADD button.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::logging;
use crate::models::Quantity;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for adding a new item to the packing list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();
    let config = expect_context::<WidgetConfig>();
    let max_quantity = config.max_quantity;

    let on_quantity_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match Quantity::parse(&value, max_quantity) {
            Ok(quantity) => store.quantity().set(quantity),
            Err(e) => logging::warn("FORM", &e.to_string()),
        }
    };

    view! {
        <div class="inp__box">
            <h2 class="inp__box__title">"What do you need for your trip?"</h2>
            <select class="select" on:change=on_quantity_change>
                {config.quantity_options().map(|n| {
                    let is_selected = move || store.quantity().get().get() == n;
                    view! {
                        <option value=n.to_string() prop:selected=is_selected>{n}</option>
                    }
                }).collect_view()}
            </select>
            <input
                type="text"
                class="input"
                placeholder="item..."
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        store_add_item(&store);
                    }
                }
            />
            <button class="addBtn" on:click=move |_| store_add_item(&store)>"ADD"</button>
        </div>
    }
}
