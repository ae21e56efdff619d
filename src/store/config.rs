//! Store configuration

/// Thumbnail shown for playlists without videos
pub const DEFAULT_PLACEHOLDER_THUMBNAIL: &str = "/images/playlist-placeholder.jpg";

/// Name of the playlist every session starts with
pub const DEFAULT_PLAYLIST_NAME: &str = "My Favorites";

/// Configuration for the playlist store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Thumbnail URL used when a playlist has no videos
    pub placeholder_thumbnail: String,

    /// Name of the built-in default playlist (read by `DefaultSource::from_config`)
    pub default_playlist_name: String,

    /// Whether name/description inputs are cleared after a successful submit
    pub clear_form_on_success: bool,
}

impl StoreConfig {
    /// Create a configuration with the stock defaults
    pub fn new() -> Self {
        Self {
            placeholder_thumbnail: DEFAULT_PLACEHOLDER_THUMBNAIL.to_string(),
            default_playlist_name: DEFAULT_PLAYLIST_NAME.to_string(),
            clear_form_on_success: true,
        }
    }

    /// Set the placeholder thumbnail URL
    pub fn with_placeholder(mut self, url: impl Into<String>) -> Self {
        self.placeholder_thumbnail = url.into();
        self
    }

    /// Set the default playlist name
    pub fn with_default_playlist_name(mut self, name: impl Into<String>) -> Self {
        self.default_playlist_name = name.into();
        self
    }

    /// Keep form inputs after a successful submit
    pub fn keep_form_on_success(mut self) -> Self {
        self.clear_form_on_success = false;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
