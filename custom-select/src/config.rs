//! Widget configuration.

use std::time::Duration;

use serde::Deserialize;

/// Per-page configuration shared by every custom select.
///
/// Class names are the hooks the page stylesheet targets; the widget only
/// toggles them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// `data-*` key (without prefix) marking selects to enhance.
    pub marker: String,

    pub container_class: String,
    pub value_class: String,
    pub options_class: String,
    pub option_class: String,

    /// Marker class on the selected list item.
    pub selected_class: String,
    /// Class on the options list while it is open.
    pub open_class: String,

    /// Pause after which the type-ahead buffer resets.
    pub search_debounce_ms: u64,

    /// Whether Space also releases focus after toggling the list.
    pub space_blurs: bool,

    /// Visible rows of the options list before it scrolls.
    pub list_rows: u16,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            marker: "custom".to_string(),
            container_class: "custom-select-container".to_string(),
            value_class: "custom-select-value".to_string(),
            options_class: "custom-select-options".to_string(),
            option_class: "custom-select-option".to_string(),
            selected_class: "selected".to_string(),
            open_class: "open".to_string(),
            search_debounce_ms: 500,
            space_blurs: false,
            list_rows: 5,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker data attribute.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the type-ahead debounce.
    pub fn search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Make Space blur the container after toggling.
    pub fn space_blurs(mut self, blurs: bool) -> Self {
        self.space_blurs = blurs;
        self
    }

    /// Set the visible rows of the options list.
    pub fn list_rows(mut self, rows: u16) -> Self {
        self.list_rows = rows;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
