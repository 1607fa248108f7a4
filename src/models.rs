//! Frontend Models
//!
//! Packing list entries and the sort options offered by the controls.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuantityError;

/// Stable identifier generated when an item is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How many of an item to pack, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(u8);

impl Quantity {
    pub fn new(value: u8, max: u8) -> Result<Self, QuantityError> {
        if (1..=max).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuantityError::OutOfRange { value, max })
        }
    }

    /// Parse a dropdown option value
    pub fn parse(s: &str, max: u8) -> Result<Self, QuantityError> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| QuantityError::NotANumber(s.to_string()))?;
        Self::new(value, max)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single entry on the packing list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Stored as typed, untrimmed
    pub title: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item with a fresh id
    pub fn new(title: String, quantity: Quantity) -> Self {
        Self {
            id: ItemId::new(),
            title,
            quantity,
            packed: false,
        }
    }
}

/// Ordering applied by the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Insertion order
    #[default]
    Default,
    /// Packed items first
    Checked,
    /// Unpacked items first
    Unchecked,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Default, SortOrder::Checked, SortOrder::Unchecked];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Checked => "checked",
            SortOrder::Unchecked => "unchecked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::Checked => "Checked",
            SortOrder::Unchecked => "Unchecked",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "checked" => SortOrder::Checked,
            "unchecked" => SortOrder::Unchecked,
            _ => SortOrder::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Passport".to_string(), Quantity::default());
        assert_eq!(item.title, "Passport");
        assert_eq!(item.quantity.get(), 1);
        assert!(!item.packed);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = Item::new("Socks".to_string(), Quantity::default());
        let b = Item::new("Socks".to_string(), Quantity::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_quantity_range() {
        assert_eq!(Quantity::new(25, 25).map(|q| q.get()), Ok(25));
        assert_eq!(
            Quantity::new(0, 25),
            Err(QuantityError::OutOfRange { value: 0, max: 25 })
        );
        assert!(Quantity::new(26, 25).is_err());
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse("7", 25).map(|q| q.get()), Ok(7));
        assert!(matches!(Quantity::parse("seven", 25), Err(QuantityError::NotANumber(_))));
    }

    #[test]
    fn test_sort_order_strings() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_str(order.as_str()), order);
        }
        assert_eq!(SortOrder::from_str("bogus"), SortOrder::Default);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new("Shoes".to_string(), Quantity::new(2, 25).unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "Shoes");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["packed"], false);
    }
}
