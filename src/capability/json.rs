//! Playlist source backed by a JSON snapshot on disk

use super::traits::PlaylistSource;
use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Reads a JSON array of playlists (the format written by `--output`)
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PlaylistSource for JsonFileSource {
    fn load_initial_playlists(&self) -> Result<Vec<Playlist>> {
        log::info!("Loading playlists from {:?}", self.path);

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open playlist file: {:?}", self.path))?;

        let playlists: Vec<Playlist> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse playlist file: {:?}", self.path))?;

        log::debug!("Loaded {} playlists", playlists.len());
        Ok(playlists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlists.json");
        fs::write(
            &path,
            r#"[{"id":"a1","name":"Saved","createdAt":"2024-05-01T10:00:00Z",
                "videos":[{"id":"v1","title":"Intro","thumbnail":"/t/v1.jpg"}]}]"#,
        )
        .unwrap();

        let playlists = JsonFileSource::new(path).load_initial_playlists().unwrap();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].videos[0].thumbnail.as_deref(), Some("/t/v1.jpg"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(source.load_initial_playlists().is_err());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlists.json");
        fs::write(&path, r#"[{"id":"a1","name":"Broken","#).unwrap();

        let err = JsonFileSource::new(path).load_initial_playlists().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse playlist file"));
    }

    #[test]
    fn test_missing_created_at_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlists.json");
        fs::write(&path, r#"[{"id":"a1","name":"No date"}]"#).unwrap();

        assert!(JsonFileSource::new(path).load_initial_playlists().is_err());
    }
}
