//! Packing List Component
//!
//! Shows the working list, or the message slot while the list is empty.

use leptos::prelude::*;

use crate::components::PackingItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="cards__box">
            <Show
                when=move || !store.list().read().is_empty()
                fallback=move || view! {
                    <h2 class="noItemTitle">{move || store.message().read().text()}</h2>
                }
            >
                <For
                    each=move || store.list().read().working().to_vec()
                    key=|item| item.id
                    children=|item| view! { <PackingItem item=item /> }
                />
            </Show>
        </div>
    }
}
