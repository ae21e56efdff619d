//! Capabilities for running the store outside a browser
//!
//! Notifications go to the `log` facade, the form is a plain map and the
//! rendered list is written as text.

use super::traits::{DisplaySink, FieldValue, FormField, FormInput, Notifier, NotifyLevel};
use crate::store::ViewRecord;
use std::collections::HashMap;
use std::io::Write;

/// Notifier that routes messages to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Info | NotifyLevel::Success => log::info!("[{}] {}", level, message),
            NotifyLevel::Warning => log::warn!("{}", message),
            NotifyLevel::Error => log::error!("{}", message),
        }
    }
}

/// Form backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MapForm {
    fields: HashMap<FormField, FieldValue>,
}

impl MapForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn set(&mut self, field: FormField, value: impl Into<FieldValue>) {
        self.fields.insert(field, value.into());
    }

    /// Builder variant of [`MapForm::set`]
    pub fn with(mut self, field: FormField, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Borrow a field value
    pub fn get(&self, field: FormField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }
}

impl FormInput for MapForm {
    fn read_field(&self, field: FormField) -> Option<FieldValue> {
        self.fields.get(&field).cloned()
    }

    fn clear_field(&mut self, field: FormField) {
        // A cleared input reads back as an empty value, not as a missing one
        let cleared = match field {
            FormField::IsPublic => FieldValue::Flag(false),
            FormField::Name | FormField::Description => FieldValue::Text(String::new()),
        };
        self.fields.insert(field, cleared);
    }

    fn fill_field(&mut self, field: FormField, value: FieldValue) {
        self.fields.insert(field, value);
    }
}

/// Display sink writing one text line per view record
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn render_list(&mut self, records: &[ViewRecord]) {
        // The display surface is best-effort, a broken pipe must not abort the session
        if let Err(e) = write_records(&mut self.out, records) {
            log::warn!("Failed to write playlist view: {}", e);
        }
    }
}

fn write_records<W: Write>(out: &mut W, records: &[ViewRecord]) -> std::io::Result<()> {
    writeln!(out, "Playlists ({})", records.len())?;
    for record in records {
        writeln!(out, "  {}", record)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PlaylistAction;

    #[test]
    fn test_map_form_clear() {
        let mut form = MapForm::new()
            .with(FormField::Name, "Road Trips")
            .with(FormField::IsPublic, true);

        form.clear_field(FormField::Name);
        form.clear_field(FormField::IsPublic);

        assert_eq!(form.read_field(FormField::Name), Some(FieldValue::Text(String::new())));
        assert_eq!(form.read_field(FormField::IsPublic), Some(FieldValue::Flag(false)));
        assert_eq!(form.read_field(FormField::Description), None);
    }

    #[test]
    fn test_console_sink_output() {
        let record = ViewRecord {
            playlist_id: "abc".to_string(),
            thumbnail: "/t/1.jpg".to_string(),
            video_count: 2,
            name: "Road Trips".to_string(),
            description: String::new(),
            actions: PlaylistAction::bindings("abc"),
        };

        let mut sink = ConsoleSink::new(Vec::new());
        sink.render_list(&[record]);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("Playlists (1)\n"));
        assert!(text.contains("Road Trips"));
        assert!(text.contains("2 videos"));
    }
}
