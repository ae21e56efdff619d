//! Capabilities that remember what they were given

use super::traits::{DisplaySink, Notifier, NotifyLevel};
use crate::store::ViewRecord;

/// Notifier keeping every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, NotifyLevel)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications emitted at a given level
    pub fn count(&self, level: NotifyLevel) -> usize {
        self.messages.iter().filter(|(_, l)| *l == level).count()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<&(String, NotifyLevel)> {
        self.messages.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, level: NotifyLevel) {
        self.messages.push((message.to_string(), level));
    }
}

/// Display sink keeping every rendered frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<ViewRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently rendered frame
    pub fn last_frame(&self) -> Option<&[ViewRecord]> {
        self.frames.last().map(|f| f.as_slice())
    }
}

impl DisplaySink for RecordingSink {
    fn render_list(&mut self, records: &[ViewRecord]) {
        self.frames.push(records.to_vec());
    }
}
