//! Packing Stats Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Summary of list size and packed count
#[component]
pub fn PackingStats() -> impl IntoView {
    let store = use_app_store();
    let total = move || store.list().read().len();
    let packed = move || store.list().read().packed_count();

    view! {
        <div class="aboutBox">
            <h2>
                "You have " <span>{total}</span> " items on your list, and you already packed "
                {packed}
            </h2>
        </div>
    }
}
