//! Playlist state, view projection and configuration

pub mod config;
mod id;
#[allow(clippy::module_inception)]
mod store;
mod view;

pub use config::{StoreConfig, DEFAULT_PLACEHOLDER_THUMBNAIL, DEFAULT_PLAYLIST_NAME};
pub use id::IdGenerator;
pub use store::PlaylistStore;
pub use view::{ActionKind, PlaylistAction, ViewRecord};
