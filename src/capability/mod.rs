//! Capabilities the playlist store depends on
//!
//! The store never talks to a backend, a UI toolkit or a notification
//! system directly. It goes through the traits defined here, so the same
//! store runs against a real frontend, the CLI or test doubles.

mod console;
mod json;
mod recording;
mod stub;
mod traits;

pub use console::{ConsoleSink, LogNotifier, MapForm};
pub use json::JsonFileSource;
pub use recording::{RecordingNotifier, RecordingSink};
pub use stub::DefaultSource;
pub use traits::{DisplaySink, FieldValue, FormField, FormInput, Notifier, NotifyLevel, PlaylistSource};
