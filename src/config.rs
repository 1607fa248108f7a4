//! Widget Configuration
//!
//! Limits, delays and fixed texts shared by the list logic and the UI.

/// Text shown in the message slot when nothing else is displayed
pub const EMPTY_LIST_TEXT: &str = "No items...";

/// Tunable widget limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Longest accepted title, in characters
    pub max_title_chars: usize,
    /// Highest quantity offered by the dropdown
    pub max_quantity: u8,
    /// How long the "empty title" error stays visible (ms)
    pub empty_title_clear_ms: u32,
    /// How long the "title too long" error stays visible (ms)
    pub long_title_clear_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 20,
            max_quantity: 25,
            empty_title_clear_ms: 3000,
            long_title_clear_ms: 4000,
        }
    }
}

impl WidgetConfig {
    /// All quantities the dropdown offers, in display order
    pub fn quantity_options(&self) -> impl Iterator<Item = u8> {
        1..=self.max_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = WidgetConfig::default();
        assert_eq!(config.max_title_chars, 20);
        assert_eq!(config.empty_title_clear_ms, 3000);
        assert_eq!(config.long_title_clear_ms, 4000);
    }

    #[test]
    fn test_quantity_options() {
        let options: Vec<u8> = WidgetConfig::default().quantity_options().collect();
        assert_eq!(options.len(), 25);
        assert_eq!(options.first(), Some(&1));
        assert_eq!(options.last(), Some(&25));
    }
}
