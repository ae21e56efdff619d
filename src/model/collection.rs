use super::Playlist;

/// Ordered playlist collection
///
/// Insertion order is display order. Ids are expected to be unique; the
/// store guarantees this when it generates them.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCollection {
    playlists: Vec<Playlist>,
}

impl PlaylistCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            playlists: Vec::new(),
        }
    }

    /// Replace the whole collection
    pub fn replace(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    /// Append a playlist at the end
    pub fn push(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Remove a playlist by ID, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<Playlist> {
        let index = self.position(id)?;
        Some(self.playlists.remove(index))
    }

    /// Index of a playlist by ID
    pub fn position(&self, id: &str) -> Option<usize> {
        self.playlists.iter().position(|p| p.id == id)
    }

    /// Get a playlist by ID
    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Get a mutable playlist by ID
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    /// Whether an ID is already taken
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All playlists, in display order
    pub fn as_slice(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if collection is empty
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn playlist(id: &str, name: &str) -> Playlist {
        Playlist::new(id.to_string(), name.to_string(), Utc::now())
    }

    #[test]
    fn test_collection_creation() {
        let collection = PlaylistCollection::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_push_keeps_order() {
        let mut collection = PlaylistCollection::new();
        collection.push(playlist("a", "First"));
        collection.push(playlist("b", "Second"));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.as_slice()[0].name, "First");
        assert_eq!(collection.as_slice()[1].name, "Second");
        assert_eq!(collection.position("b"), Some(1));
    }

    #[test]
    fn test_remove_only_matching() {
        let mut collection = PlaylistCollection::new();
        collection.push(playlist("a", "First"));
        collection.push(playlist("b", "Second"));
        collection.push(playlist("c", "Third"));

        let removed = collection.remove("b").unwrap();
        assert_eq!(removed.name, "Second");
        assert_eq!(collection.len(), 2);
        assert!(collection.contains("a"));
        assert!(collection.contains("c"));

        assert!(collection.remove("missing").is_none());
        assert_eq!(collection.len(), 2);
    }
}
