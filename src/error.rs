//! Error Types
//!
//! The `Display` text of `AddError` is what the user sees in the message slot.

use thiserror::Error;

use crate::config::WidgetConfig;

/// Why an add attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("You must write something to add")]
    EmptyTitle,
    #[error("Character count should not exceed {max}!")]
    TitleTooLong { max: usize },
}

impl AddError {
    /// Delay before the message slot returns to idle
    pub fn clear_after_ms(&self, config: &WidgetConfig) -> u32 {
        match self {
            AddError::EmptyTitle => config.empty_title_clear_ms,
            AddError::TitleTooLong { .. } => config.long_title_clear_ms,
        }
    }
}

/// Quantity outside the dropdown range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity {value} is outside 1..={max}")]
    OutOfRange { value: u8, max: u8 },
    #[error("quantity is not a number: {0}")]
    NotANumber(String),
}
