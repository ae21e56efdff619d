//! Built-in playlist source
//!
//! Stands in for the backend listing call: every session starts with a
//! single empty "My Favorites" playlist.

use super::traits::PlaylistSource;
use crate::model::Playlist;
use crate::store::StoreConfig;
use anyhow::Result;
use chrono::Utc;

/// ID of the built-in playlist
pub const DEFAULT_PLAYLIST_ID: &str = "1";

/// Source yielding the single default playlist
pub struct DefaultSource {
    name: String,
}

impl DefaultSource {
    pub fn new() -> Self {
        Self {
            name: crate::store::DEFAULT_PLAYLIST_NAME.to_string(),
        }
    }

    /// Source using the default playlist name from the store configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            name: config.default_playlist_name.clone(),
        }
    }

    /// Use a different name for the default playlist
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for DefaultSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistSource for DefaultSource {
    fn load_initial_playlists(&self) -> Result<Vec<Playlist>> {
        log::debug!("Installing default playlist: {}", self.name);

        Ok(vec![Playlist::new(
            DEFAULT_PLAYLIST_ID.to_string(),
            self.name.clone(),
            Utc::now(),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_config() {
        let config = StoreConfig::new().with_default_playlist_name("Watch Later");
        let playlists = DefaultSource::from_config(&config).load_initial_playlists().unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].name, "Watch Later");
        assert_eq!(playlists[0].id, DEFAULT_PLAYLIST_ID);
    }

    #[test]
    fn test_stock_name() {
        let playlists = DefaultSource::new().load_initial_playlists().unwrap();
        assert_eq!(playlists[0].name, "My Favorites");
    }
}
