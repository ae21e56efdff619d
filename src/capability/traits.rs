//! Capability trait definitions and the values they exchange

use crate::model::Playlist;
use crate::store::ViewRecord;
use anyhow::Result;
use std::fmt;

/// Source of the initial playlist snapshot (usually a backend listing call)
pub trait PlaylistSource {
    /// Load the playlists the session starts with
    fn load_initial_playlists(&self) -> Result<Vec<Playlist>>;
}

/// User-visible feedback
pub trait Notifier {
    fn notify(&mut self, message: &str, level: NotifyLevel);
}

/// Form fields the store reads from and writes back to
pub trait FormInput {
    /// Current value of a field, `None` if the field is absent
    fn read_field(&self, field: FormField) -> Option<FieldValue>;

    /// Reset a field after a successful submission
    fn clear_field(&mut self, field: FormField);

    /// Prefill a field (used when editing an existing playlist)
    fn fill_field(&mut self, field: FormField, value: FieldValue);
}

/// Display surface receiving rendered view records
pub trait DisplaySink {
    fn render_list(&mut self, records: &[ViewRecord]);
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyLevel::Info => "info",
            NotifyLevel::Success => "success",
            NotifyLevel::Warning => "warning",
            NotifyLevel::Error => "error",
        }
    }
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playlist form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    IsPublic,
}

impl FormField {
    /// DOM element ID of the field
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "playlistName",
            FormField::Description => "playlistDescription",
            FormField::IsPublic => "playlistPublic",
        }
    }
}

/// Raw value read from a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Field content as text (flags render as "true"/"false")
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    /// Field content as a checkbox state
    ///
    /// Text values count as checked for "true", "on", "1" and "yes".
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => matches!(
                text.to_ascii_lowercase().as_str(),
                "true" | "on" | "1" | "yes"
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_text() {
        assert!(FieldValue::from("on").as_flag());
        assert!(FieldValue::from("TRUE").as_flag());
        assert!(!FieldValue::from("off").as_flag());
        assert!(!FieldValue::from("").as_flag());
        assert!(FieldValue::Flag(true).as_flag());
    }

    #[test]
    fn test_into_text() {
        assert_eq!(FieldValue::from("Road Trips").into_text(), "Road Trips");
        assert_eq!(FieldValue::Flag(false).into_text(), "false");
    }
}
