//! Packing List Store
//!
//! One reactive store holding the trip list, the message slot, the draft
//! title, the selected quantity and the selected sort order.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::WidgetConfig;
use crate::list::TripList;
use crate::logging;
use crate::message::{ClearToken, MessageSlot};
use crate::models::{ItemId, Quantity, SortOrder};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Working list, baseline and packed subset
    pub list: TripList,
    /// Empty-state text or the current add error
    pub message: MessageSlot,
    /// Text typed into the item input
    pub draft: String,
    /// Quantity selected in the dropdown
    pub quantity: Quantity,
    /// Selected sort option
    pub sort: SortOrder,
}

/// An error now in the message slot, waiting for its auto-clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub token: ClearToken,
    pub delay_ms: u32,
}

impl AppState {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            list: TripList::new(config),
            ..Default::default()
        }
    }

    /// Try to add the draft with the selected quantity
    ///
    /// On success the draft is emptied. On failure the draft is kept and the
    /// error goes into the message slot.
    pub fn submit_draft(&mut self) -> Result<ItemId, PendingClear> {
        match self.list.add(&self.draft, self.quantity) {
            Ok(id) => {
                self.draft.clear();
                Ok(id)
            }
            Err(error) => Err(PendingClear {
                delay_ms: error.clear_after_ms(self.list.config()),
                token: self.message.show(error),
            }),
        }
    }
}

pub type AppStore = Store<AppState>;

/// Store provided by `App`
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Add the drafted item, or show why it was rejected
pub fn store_add_item(store: &AppStore) {
    let result = store.write().submit_draft();
    match result {
        Ok(id) => logging::log("LIST", &format!("added {}", id)),
        Err(pending) => {
            let store = *store;
            spawn_local(async move {
                TimeoutFuture::new(pending.delay_ms).await;
                if !store.message().write().expire(pending.token) {
                    logging::log("MSG", "stale clear skipped");
                }
            });
        }
    }
    logging::debug_state(&store.list().read_untracked());
}

/// Remove an item by ID
pub fn store_delete_item(store: &AppStore, item_id: ItemId) {
    if store.list().write().delete(item_id) {
        logging::log("LIST", &format!("deleted {}", item_id));
    }
}

/// Empty the visible list (baseline is kept)
pub fn store_clear(store: &AppStore) {
    store.list().write().clear();
    logging::log("LIST", "cleared");
}

/// Flip an item's packed flag
pub fn store_toggle_packed(store: &AppStore, item_id: ItemId) {
    match store.list().write().toggle_packed(item_id) {
        Some(packed) => logging::log("LIST", &format!("{} packed={}", item_id, packed)),
        None => logging::warn("LIST", &format!("toggle on unknown item {}", item_id)),
    }
}

/// Remember the selected order and apply it
pub fn store_sort(store: &AppStore, order: SortOrder) {
    store.sort().set(order);
    store.list().write().sort(order);
    logging::log("LIST", &format!("sorted by {}", order.as_str()));
    logging::debug_state(&store.list().read_untracked());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_draft(draft: &str) -> AppState {
        let mut state = AppState::new(WidgetConfig::default());
        state.draft = draft.to_string();
        state
    }

    #[test]
    fn test_submit_blank_draft() {
        let mut state = state_with_draft("   ");
        let pending = state.submit_draft().unwrap_err();

        assert_eq!(pending.delay_ms, 3000);
        assert_eq!(state.message.text(), "You must write something to add");
        assert_eq!(state.draft, "   ");
        assert!(state.list.is_empty());
    }

    #[test]
    fn test_submit_long_draft() {
        let mut state = state_with_draft(&"x".repeat(21));
        let pending = state.submit_draft().unwrap_err();

        assert_eq!(pending.delay_ms, 4000);
        assert_eq!(state.message.text(), "Character count should not exceed 20!");
        assert!(state.list.is_empty());
    }

    #[test]
    fn test_submit_valid_draft() {
        let mut state = state_with_draft("Passport");
        state.quantity = Quantity::new(2, 25).unwrap();
        let id = state.submit_draft().unwrap();

        assert!(state.draft.is_empty());
        assert!(state.message.is_idle());
        let item = state.list.get(id).unwrap();
        assert_eq!(item.title, "Passport");
        assert_eq!(item.quantity.get(), 2);
    }

    #[test]
    fn test_newer_error_outlives_older_clear() {
        let mut state = state_with_draft("");
        let first = state.submit_draft().unwrap_err();
        state.draft = "y".repeat(30);
        let second = state.submit_draft().unwrap_err();

        assert!(!state.message.expire(first.token));
        assert_eq!(state.message.text(), "Character count should not exceed 20!");
        assert!(state.message.expire(second.token));
        assert_eq!(state.message.text(), "No items...");
    }
}
