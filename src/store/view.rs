//! View projection of playlists
//!
//! View records are what a presentation layer draws. They carry the action
//! bindings it hooks up to buttons; triggering one goes back through
//! [`crate::store::PlaylistStore::dispatch`].

use crate::model::Playlist;
use std::fmt;

/// Action offered on each rendered playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Open,
    Edit,
    Delete,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Open => "open",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }
}

/// Action bound to a specific playlist
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistAction {
    pub kind: ActionKind,
    pub playlist_id: String,
}

impl PlaylistAction {
    /// Open, edit and delete bindings for one playlist
    pub fn bindings(playlist_id: &str) -> [PlaylistAction; 3] {
        [ActionKind::Open, ActionKind::Edit, ActionKind::Delete].map(|kind| PlaylistAction {
            kind,
            playlist_id: playlist_id.to_string(),
        })
    }
}

/// Read-only projection of one playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub playlist_id: String,
    pub thumbnail: String,
    pub video_count: usize,
    pub name: String,
    pub description: String,
    pub actions: [PlaylistAction; 3],
}

impl ViewRecord {
    /// Project a playlist, falling back to `placeholder` when it has no videos
    pub fn project(playlist: &Playlist, placeholder: &str) -> Self {
        let thumbnail = playlist.first_thumbnail().unwrap_or(placeholder);

        Self {
            playlist_id: playlist.id.clone(),
            thumbnail: thumbnail.to_string(),
            video_count: playlist.len(),
            name: playlist.name.clone(),
            description: playlist.description.clone(),
            actions: PlaylistAction::bindings(&playlist.id),
        }
    }
}

impl fmt::Display for ViewRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.video_count == 1 { "video" } else { "videos" };
        write!(f, "[{}] {} - {} {}", self.playlist_id, self.name, self.video_count, unit)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        write!(f, " ({})", self.thumbnail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoRef;
    use chrono::Utc;

    const PLACEHOLDER: &str = "/images/playlist-placeholder.jpg";

    #[test]
    fn test_empty_playlist_uses_placeholder() {
        let playlist = Playlist::new("p1".to_string(), "Empty".to_string(), Utc::now());
        let record = ViewRecord::project(&playlist, PLACEHOLDER);

        assert_eq!(record.thumbnail, PLACEHOLDER);
        assert_eq!(record.video_count, 0);
    }

    #[test]
    fn test_first_video_thumbnail() {
        let mut playlist = Playlist::new("p1".to_string(), "Trips".to_string(), Utc::now());
        playlist.videos.push(VideoRef::new("v1", "Coast").with_thumbnail("X"));
        playlist.videos.push(VideoRef::new("v2", "Hills").with_thumbnail("Y"));

        let record = ViewRecord::project(&playlist, PLACEHOLDER);
        assert_eq!(record.thumbnail, "X");
        assert_eq!(record.video_count, 2);
    }

    #[test]
    fn test_first_video_without_thumbnail_uses_placeholder() {
        let mut playlist = Playlist::new("p1".to_string(), "Trips".to_string(), Utc::now());
        playlist.videos.push(VideoRef::new("v1", "Bare"));
        playlist.videos.push(VideoRef::new("v2", "Hills").with_thumbnail("Y"));

        let record = ViewRecord::project(&playlist, PLACEHOLDER);
        assert_eq!(record.thumbnail, PLACEHOLDER);
    }

    #[test]
    fn test_actions_keyed_by_id() {
        let playlist = Playlist::new("p9".to_string(), "Keyed".to_string(), Utc::now());
        let record = ViewRecord::project(&playlist, PLACEHOLDER);

        let kinds: Vec<ActionKind> = record.actions.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Open, ActionKind::Edit, ActionKind::Delete]);
        assert!(record.actions.iter().all(|a| a.playlist_id == "p9"));
    }
}
