//! Selector controls and UI events
//!
//! The asset and timeframe button rows behave like radio groups: at most one
//! button per group is active at any time.

use serde::Serialize;

/// Which selector row a control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlGroup {
    Asset,
    Timeframe,
}

/// Classes applied to the active button
pub const ACTIVE_CLASSES: &str = "active bg-blue-500 text-white";
/// Classes applied to every other button
pub const INACTIVE_CLASSES: &str = "bg-gray-700 text-gray-300";

/// A row of mutually exclusive buttons keyed by string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorGroup {
    options: Vec<String>,
    active: Option<usize>,
}

impl SelectorGroup {
    /// Create a group with `initial` active (if it is one of the options)
    pub fn new(options: Vec<String>, initial: &str) -> Self {
        let active = options.iter().position(|o| o == initial);
        Self { options, active }
    }

    /// Make `key` the only active option.
    ///
    /// An unknown key leaves no option active. Returns whether `key` matched.
    pub fn activate(&mut self, key: &str) -> bool {
        self.active = self.options.iter().position(|o| o == key);
        self.active.is_some()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.map(|i| self.options[i].as_str())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_key() == Some(key)
    }

    /// Number of active options, always 0 or 1
    pub fn active_count(&self) -> usize {
        self.options.iter().filter(|o| self.is_active(o)).count()
    }

    /// CSS classes for the button with `key`
    pub fn classes_for(&self, key: &str) -> &'static str {
        if self.is_active(key) {
            ACTIVE_CLASSES
        } else {
            INACTIVE_CLASSES
        }
    }
}

/// User-driven events the adapter forwards to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Asset button or card clicked
    SelectAsset(String),
    /// Timeframe button clicked
    SelectTimeframe(String),
    /// Window resized
    Resize,
    /// Mobile menu button clicked
    MobileMenu,
}
