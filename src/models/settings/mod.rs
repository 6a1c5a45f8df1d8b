// Settings module
// Presentation settings for the countdown display; the deadline itself is fixed.

use serde::{Deserialize, Serialize};

use super::countdown::SlotId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Text shown before the countdown values.
    pub label: String,
    /// Shown until the first successful tick.
    pub fallback_message: String,
    /// Slots present on the display; absent ones are skipped each tick.
    pub slots: Vec<SlotId>,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label: "Auction closes in".to_string(),
            fallback_message: "Auction closes Sunday at 6 PM ET".to_string(),
            slots: SlotId::ALL.to_vec(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.label.trim().is_empty() {
            return Err(SettingsValidationError::EmptyLabel);
        }

        for (idx, slot) in self.slots.iter().enumerate() {
            if self.slots[..idx].contains(slot) {
                return Err(SettingsValidationError::DuplicateSlot(*slot));
            }
        }

        if self.log_filter.trim().is_empty() {
            return Err(SettingsValidationError::EmptyLogFilter);
        }

        Ok(())
    }

    pub fn has_slot(&self, slot: SlotId) -> bool {
        self.slots.contains(&slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    EmptyLabel,
    DuplicateSlot(SlotId),
    EmptyLogFilter,
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Label cannot be empty"),
            Self::DuplicateSlot(slot) => {
                write!(f, "Slot '{}' is listed more than once", slot.element_id())
            }
            Self::EmptyLogFilter => write!(f, "Log filter cannot be empty"),
        }
    }
}

impl std::error::Error for SettingsValidationError {}
