//! List Controls Component
//!
//! Sort dropdown and the Clear button.

use leptos::prelude::*;

use crate::models::SortOrder;
use crate::store::{store_clear, store_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn ListControls() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="controlBox">
            <select
                class="sortSelect"
                on:change=move |ev| store_sort(&store, SortOrder::from_str(&event_target_value(&ev)))
            >
                {SortOrder::ALL.iter().map(|order| {
                    let order = *order;
                    view! {
                        <option
                            value=order.as_str()
                            prop:selected=move || store.sort().get() == order
                        >
                            {order.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button class="clearBtn" on:click=move |_| store_clear(&store)>"Clear"</button>
        </div>
    }
}
