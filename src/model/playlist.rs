use super::VideoRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a user playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique identifier within the session
    pub id: String,

    /// Display name (never empty once stored)
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Video references (ordered, first one provides the thumbnail)
    #[serde(default)]
    pub videos: Vec<VideoRef>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Visibility flag
    #[serde(default)]
    pub is_public: bool,
}

impl Playlist {
    /// Create a new empty, private playlist
    pub fn new(id: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            videos: Vec::new(),
            created_at,
            is_public: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the visibility flag
    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Thumbnail of the first video, if any
    pub fn first_thumbnail(&self) -> Option<&str> {
        self.videos.first().and_then(|v| v.thumbnail.as_deref())
    }

    /// Whether a video is already referenced
    pub fn contains_video(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_thumbnail() {
        let mut playlist = Playlist::new("p1".to_string(), "Mix".to_string(), Utc::now());
        assert_eq!(playlist.first_thumbnail(), None);

        playlist.videos.push(VideoRef::new("v1", "No thumb"));
        playlist
            .videos
            .push(VideoRef::new("v2", "Thumb").with_thumbnail("/t/v2.jpg"));

        // Only the first video counts, even when it has no thumbnail
        assert_eq!(playlist.first_thumbnail(), None);

        playlist.videos.swap(0, 1);
        assert_eq!(playlist.first_thumbnail(), Some("/t/v2.jpg"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id":"abc","name":"Saved","createdAt":"2024-05-01T10:00:00Z"}"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();

        assert_eq!(playlist.name, "Saved");
        assert_eq!(playlist.description, "");
        assert!(playlist.videos.is_empty());
        assert!(!playlist.is_public);
    }

    #[test]
    fn test_serialize_camel_case() {
        let playlist = Playlist::new("abc".to_string(), "Saved".to_string(), Utc::now())
            .with_visibility(true);
        let value = serde_json::to_value(&playlist).unwrap();

        assert_eq!(value["isPublic"], serde_json::json!(true));
        assert!(value.get("createdAt").is_some());
    }
}
