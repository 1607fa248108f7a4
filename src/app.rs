//! Far Away Frontend App
//!
//! Trip packing list: add form, list, controls and summary.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, ListControls, PackingList, PackingStats};
use crate::config::WidgetConfig;
use crate::logging;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::default();

    // Provide config and store to all children
    provide_context(config);
    provide_context(Store::new(AppState::new(config)));

    logging::log(
        "APP",
        &format!(
            "mounted (max title {} chars, quantity 1-{})",
            config.max_title_chars, config.max_quantity
        ),
    );

    view! {
        <section class="TodoSection">
            <div class="sectionContainer">
                <div class="bg">
                    <h1 class="section__title">"🏝️ Far Away 🧳"</h1>
                </div>

                <AddItemForm />

                <div class="drafts__box">
                    <PackingList />
                    <ListControls />
                </div>

                <PackingStats />
            </div>
        </section>
    }
}
