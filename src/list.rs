//! Packing List State
//!
//! Working list, insertion-order baseline and the cached packed subset.
//! Everything here is plain data so it runs outside the browser.

use serde::Serialize;

use crate::config::WidgetConfig;
use crate::error::AddError;
use crate::models::{Item, ItemId, Quantity, SortOrder};

/// All list state behind the widget
///
/// `working` is what the user sees and may be reordered by sorting.
/// `baseline` keeps insertion order and is only touched by add, delete
/// and toggle. `clear` empties `working` but leaves `baseline` alone, so a
/// later "default" sort brings cleared items back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripList {
    #[serde(skip)]
    config: WidgetConfig,
    working: Vec<Item>,
    baseline: Vec<Item>,
    /// Packed item ids, rebuilt from `working` on every toggle
    packed: Vec<ItemId>,
}

impl TripList {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Items in display order
    pub fn working(&self) -> &[Item] {
        &self.working
    }

    /// Items in insertion order
    #[cfg(test)]
    pub fn baseline(&self) -> &[Item] {
        &self.baseline
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.working.iter().find(|item| item.id == id)
    }

    #[cfg(test)]
    pub fn packed_ids(&self) -> &[ItemId] {
        &self.packed
    }

    pub fn packed_count(&self) -> usize {
        self.packed.len()
    }

    /// Cached packed items that are still on the working list
    #[cfg(test)]
    pub fn packed_items(&self) -> Vec<&Item> {
        self.packed
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Check a draft title without adding it
    ///
    /// Emptiness is judged on the trimmed text, length on the raw text.
    pub fn validate_title(&self, title: &str) -> Result<(), AddError> {
        if title.trim().is_empty() {
            return Err(AddError::EmptyTitle);
        }
        let max = self.config.max_title_chars;
        if title.chars().count() > max {
            return Err(AddError::TitleTooLong { max });
        }
        Ok(())
    }

    /// Append a new unpacked item to both lists
    pub fn add(&mut self, title: &str, quantity: Quantity) -> Result<ItemId, AddError> {
        self.validate_title(title)?;
        let item = Item::new(title.to_string(), quantity);
        let id = item.id;
        self.baseline.push(item.clone());
        self.working.push(item);
        Ok(id)
    }

    /// Remove an item everywhere; returns false if it was not on the working list
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.working.len();
        self.working.retain(|item| item.id != id);
        self.baseline.retain(|item| item.id != id);
        self.packed.retain(|packed| *packed != id);
        self.working.len() != before
    }

    /// Empty the working list and the packed subset
    pub fn clear(&mut self) {
        self.working.clear();
        self.packed.clear();
    }

    /// Flip an item's packed flag and rebuild the packed subset
    ///
    /// Returns the new flag, or `None` if no such item is shown.
    pub fn toggle_packed(&mut self, id: ItemId) -> Option<bool> {
        let item = self.working.iter_mut().find(|item| item.id == id)?;
        item.packed = !item.packed;
        let packed = item.packed;

        if let Some(item) = self.baseline.iter_mut().find(|item| item.id == id) {
            item.packed = packed;
        }

        self.packed = self
            .working
            .iter()
            .filter(|item| item.packed)
            .map(|item| item.id)
            .collect();
        Some(packed)
    }

    /// Reorder the working list; the baseline is never changed
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Checked => self.partition(true),
            SortOrder::Unchecked => self.partition(false),
            SortOrder::Default => self.working = self.baseline.clone(),
        }
    }

    /// Stable partition with items whose flag equals `packed_first` in front
    fn partition(&mut self, packed_first: bool) {
        let (mut front, back): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.working)
            .into_iter()
            .partition(|item| item.packed == packed_first);
        front.extend(back);
        self.working = front;
    }
}
