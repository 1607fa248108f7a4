//! Message Slot
//!
//! One line of text shared by the empty-list placeholder and add errors.
//! Each error gets a token; a scheduled clear only applies if no newer
//! error has replaced it in the meantime.

use crate::config::EMPTY_LIST_TEXT;
use crate::error::AddError;

/// Handle for a scheduled auto-clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageSlot {
    error: Option<AddError>,
    generation: u64,
}

impl MessageSlot {
    /// Show an error, superseding any pending clear
    pub fn show(&mut self, error: AddError) -> ClearToken {
        self.generation += 1;
        self.error = Some(error);
        ClearToken(self.generation)
    }

    /// Return to idle if `token` belongs to the error still shown
    pub fn expire(&mut self, token: ClearToken) -> bool {
        if token.0 != self.generation || self.error.is_none() {
            return false;
        }
        self.error = None;
        true
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<AddError> {
        self.error
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.error.is_none()
    }

    /// Text for the slot: the current error or the empty-list placeholder
    pub fn text(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => EMPTY_LIST_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_text() {
        let slot = MessageSlot::default();
        assert!(slot.is_idle());
        assert_eq!(slot.text(), "No items...");
    }

    #[test]
    fn test_show_then_expire() {
        let mut slot = MessageSlot::default();
        let token = slot.show(AddError::EmptyTitle);
        assert_eq!(slot.text(), "You must write something to add");

        assert!(slot.expire(token));
        assert_eq!(slot.text(), "No items...");
        assert!(!slot.expire(token));
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let mut slot = MessageSlot::default();
        let first = slot.show(AddError::EmptyTitle);
        let second = slot.show(AddError::TitleTooLong { max: 20 });

        assert!(!slot.expire(first));
        assert_eq!(slot.error(), Some(AddError::TitleTooLong { max: 20 }));

        assert!(slot.expire(second));
        assert!(slot.is_idle());
    }

    #[test]
    fn test_same_error_twice_keeps_latest_timer() {
        let mut slot = MessageSlot::default();
        let first = slot.show(AddError::EmptyTitle);
        let second = slot.show(AddError::EmptyTitle);
        assert_ne!(first, second);
        assert!(!slot.expire(first));
        assert!(!slot.is_idle());
        assert!(slot.expire(second));
    }
}
