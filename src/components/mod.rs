//! UI Components
//!
//! Leptos components for the packing list widget.

mod add_item_form;
mod list_controls;
mod packing_item;
mod packing_list;
mod packing_stats;

pub use add_item_form::AddItemForm;
pub use list_controls::ListControls;
pub use packing_item::PackingItem;
pub use packing_list::PackingList;
pub use packing_stats::PackingStats;
