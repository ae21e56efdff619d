//! The playlist store

use super::config::StoreConfig;
use super::id::IdGenerator;
use super::view::{ActionKind, PlaylistAction, ViewRecord};
use crate::capability::{DisplaySink, FieldValue, FormField, FormInput, Notifier, NotifyLevel, PlaylistSource};
use crate::error::{PlaylistError, Result};
use crate::model::{Playlist, PlaylistCollection, VideoRef};
use chrono::Utc;
use std::collections::HashSet;

/// Values submitted through the playlist form
struct PlaylistForm {
    name: String,
    description: String,
    is_public: bool,
}

/// Session playlist state
///
/// Owns the playlists of the current session and the capabilities it
/// reports through. Every mutating operation re-renders the full list to the
/// display sink.
pub struct PlaylistStore<S, N, F, D>
where
    S: PlaylistSource,
    N: Notifier,
    F: FormInput,
    D: DisplaySink,
{
    config: StoreConfig,
    source: S,
    notifier: N,
    form: F,
    sink: D,
    playlists: PlaylistCollection,
    current: Option<String>,
    ids: IdGenerator,
}

impl<S, N, F, D> PlaylistStore<S, N, F, D>
where
    S: PlaylistSource,
    N: Notifier,
    F: FormInput,
    D: DisplaySink,
{
    /// Create an empty store; call [`PlaylistStore::initialize`] to load it
    pub fn new(config: StoreConfig, source: S, notifier: N, form: F, sink: D) -> Self {
        Self {
            config,
            source,
            notifier,
            form,
            sink,
            playlists: PlaylistCollection::new(),
            current: None,
            ids: IdGenerator::new(),
        }
    }

    /// Load the initial playlists and render them
    ///
    /// A failing source leaves the store empty but usable: the failure is
    /// reported as an error notification, the empty list is rendered and the
    /// error is returned for the caller to log.
    pub fn initialize(&mut self) -> Result<()> {
        log::info!("Initializing playlist store");

        let outcome = match self.source.load_initial_playlists() {
            Ok(loaded) => {
                let playlists = sanitize_loaded(loaded);
                log::info!("Loaded {} playlists", playlists.len());
                self.playlists.replace(playlists);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load playlists: {:#}", e);
                self.playlists.replace(Vec::new());
                self.notifier.notify("Failed to load playlists", NotifyLevel::Error);
                Err(PlaylistError::Upstream(e))
            }
        };

        self.current = None;
        self.refresh();
        outcome
    }

    /// Create a playlist from the form fields
    ///
    /// Returns the new playlist's ID. An empty or missing name is rejected
    /// with a warning and nothing changes.
    pub fn create_playlist(&mut self) -> Result<String> {
        let submitted = self.read_form()?;

        let now = Utc::now();
        let playlists = &self.playlists;
        let id = self.ids.next_id(&submitted.name, now, |id| playlists.contains(id));

        let playlist = Playlist::new(id.clone(), submitted.name, now)
            .with_description(submitted.description)
            .with_visibility(submitted.is_public);

        log::info!("Created playlist {} ({})", playlist.name, id);
        self.playlists.push(playlist);

        self.notifier.notify("Playlist created successfully!", NotifyLevel::Success);
        self.refresh();
        self.clear_form();

        Ok(id)
    }

    /// Apply the form fields to an existing playlist
    ///
    /// ID, videos and creation time are kept.
    pub fn update_playlist(&mut self, id: &str) -> Result<()> {
        if !self.playlists.contains(id) {
            return Err(self.not_found(id));
        }

        let submitted = self.read_form()?;

        if let Some(playlist) = self.playlists.get_mut(id) {
            playlist.name = submitted.name;
            playlist.description = submitted.description;
            playlist.is_public = submitted.is_public;
            log::info!("Updated playlist {} ({})", playlist.name, id);
        }

        self.notifier.notify("Playlist updated", NotifyLevel::Success);
        self.refresh();
        self.clear_form();

        Ok(())
    }

    /// Remove a playlist; unknown IDs are ignored
    pub fn delete_playlist(&mut self, id: &str) {
        match self.playlists.remove(id) {
            Some(removed) => {
                log::info!("Deleted playlist {} ({})", removed.name, id);
                if self.current.as_deref() == Some(id) {
                    self.current = None;
                }
                self.refresh();
            }
            None => log::debug!("Delete ignored, no playlist with id {}", id),
        }
    }

    /// Select a playlist for viewing
    pub fn open_playlist(&mut self, id: &str) -> Option<&Playlist> {
        let name = self.select(id)?;
        self.notifier
            .notify(&format!("Opening playlist: {}", name), NotifyLevel::Info);
        self.playlists.get(id)
    }

    /// Select a playlist for editing and prefill the form with it
    pub fn edit_playlist(&mut self, id: &str) -> Option<&Playlist> {
        let name = self.select(id)?;

        if let Some(playlist) = self.playlists.get(id) {
            self.form.fill_field(FormField::Name, FieldValue::Text(playlist.name.clone()));
            self.form
                .fill_field(FormField::Description, FieldValue::Text(playlist.description.clone()));
            self.form.fill_field(FormField::IsPublic, FieldValue::Flag(playlist.is_public));
        }

        self.notifier
            .notify(&format!("Editing playlist: {}", name), NotifyLevel::Info);
        self.playlists.get(id)
    }

    /// Run an action bound to a rendered playlist
    pub fn dispatch(&mut self, action: &PlaylistAction) {
        log::debug!("Dispatching {} on {}", action.kind.label(), action.playlist_id);

        match action.kind {
            ActionKind::Open => {
                self.open_playlist(&action.playlist_id);
            }
            ActionKind::Edit => {
                self.edit_playlist(&action.playlist_id);
            }
            ActionKind::Delete => self.delete_playlist(&action.playlist_id),
        }
    }

    /// Append a video to a playlist
    ///
    /// A video already in the playlist is not added twice.
    pub fn add_video(&mut self, id: &str, video: VideoRef) -> Result<()> {
        let already_added = match self.playlists.get(id) {
            Some(playlist) => playlist.contains_video(&video.id),
            None => return Err(self.not_found(id)),
        };

        if already_added {
            log::debug!("Video {} already in playlist {}", video.id, id);
            self.notifier.notify("Video already in playlist", NotifyLevel::Info);
            return Ok(());
        }

        log::debug!("Adding video {} to playlist {}", video.id, id);
        if let Some(playlist) = self.playlists.get_mut(id) {
            playlist.videos.push(video);
        }

        self.notifier.notify("Video added to playlist", NotifyLevel::Success);
        self.refresh();
        Ok(())
    }

    /// Remove a video from a playlist; returns whether anything was removed
    pub fn remove_video(&mut self, id: &str, video_id: &str) -> bool {
        let removed = match self.playlists.get_mut(id) {
            Some(playlist) => match playlist.videos.iter().position(|v| v.id == video_id) {
                Some(index) => {
                    playlist.videos.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        };

        if removed {
            log::debug!("Removed video {} from playlist {}", video_id, id);
            self.refresh();
        }
        removed
    }

    /// Project every playlist, in display order
    ///
    /// Pure: does not touch state or capabilities.
    pub fn render(&self) -> Vec<ViewRecord> {
        self.playlists
            .as_slice()
            .iter()
            .map(|p| ViewRecord::project(p, &self.config.placeholder_thumbnail))
            .collect()
    }

    /// Push the current projection to the display sink
    pub fn refresh(&mut self) {
        let records = self.render();
        log::debug!("Rendering {} playlists", records.len());
        self.sink.render_list(&records);
    }

    /// All playlists, in display order
    pub fn playlists(&self) -> &[Playlist] {
        self.playlists.as_slice()
    }

    /// Get a playlist by ID
    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.playlists.get(id)
    }

    /// Currently selected playlist
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current.as_deref().and_then(|id| self.playlists.get(id))
    }

    /// Owned copy of all playlists, for persisting outside the store
    pub fn snapshot(&self) -> Vec<Playlist> {
        self.playlists.as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Read and validate the form fields
    ///
    /// Only an empty or missing name is rejected; whitespace is not trimmed.
    fn read_form(&mut self) -> Result<PlaylistForm> {
        let name = self
            .form
            .read_field(FormField::Name)
            .map(FieldValue::into_text)
            .unwrap_or_default();

        if name.is_empty() {
            log::warn!("Rejected playlist form without a name");
            self.notifier
                .notify(&PlaylistError::MissingName.to_string(), NotifyLevel::Warning);
            return Err(PlaylistError::MissingName);
        }

        let description = self
            .form
            .read_field(FormField::Description)
            .map(FieldValue::into_text)
            .unwrap_or_default();

        let is_public = self
            .form
            .read_field(FormField::IsPublic)
            .map(|v| v.as_flag())
            .unwrap_or(false);

        Ok(PlaylistForm {
            name,
            description,
            is_public,
        })
    }

    fn clear_form(&mut self) {
        if self.config.clear_form_on_success {
            self.form.clear_field(FormField::Name);
            self.form.clear_field(FormField::Description);
        }
    }

    /// Mark a playlist as current, returning its name
    fn select(&mut self, id: &str) -> Option<String> {
        let Some(playlist) = self.playlists.get(id) else {
            log::debug!("No playlist with id {}", id);
            return None;
        };

        let name = playlist.name.clone();
        self.current = Some(id.to_string());
        Some(name)
    }

    fn not_found(&mut self, id: &str) -> PlaylistError {
        log::warn!("Playlist not found: {}", id);
        self.notifier.notify("Playlist not found", NotifyLevel::Error);
        PlaylistError::NotFound(id.to_string())
    }
}

/// Drop loaded playlists that would break the store invariants
///
/// Unnamed playlists are skipped and only the first playlist for each ID is kept.
fn sanitize_loaded(playlists: Vec<Playlist>) -> Vec<Playlist> {
    let mut seen = HashSet::new();

    playlists
        .into_iter()
        .filter(|p| {
            if p.name.is_empty() {
                log::warn!("Dropping unnamed playlist with id {}", p.id);
                return false;
            }

            let fresh = seen.insert(p.id.clone());
            if !fresh {
                log::warn!("Dropping playlist {} with duplicate id {}", p.name, p.id);
            }
            fresh
        })
        .collect()
}
