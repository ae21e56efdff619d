//! Playlist store errors

/// Errors surfaced by [`crate::store::PlaylistStore`] operations
///
/// Every variant has already been reported through the notifier by the time
/// the caller sees it.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("Please enter a playlist name")]
    MissingName,

    #[error("Playlist not found: {0}")]
    NotFound(String),

    #[error("Failed to load playlists: {0:#}")]
    Upstream(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
