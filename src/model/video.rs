use serde::{Deserialize, Serialize};

/// Reference to a video owned by the backend
///
/// Only the fields the playlist component needs are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Backend video identifier
    pub id: String,

    /// Video title
    #[serde(default)]
    pub title: String,

    /// Thumbnail URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl VideoRef {
    /// Create a video reference without a thumbnail
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: None,
        }
    }

    /// Set the thumbnail URL
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}
