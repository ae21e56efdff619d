//! Playlist data model
//!
//! These structures are shared by the store, the capabilities that feed it
//! and the view projection. They serialize with the same camelCase field
//! names the web client exchanges.

mod collection;
mod playlist;
mod video;

pub use collection::PlaylistCollection;
pub use playlist::Playlist;
pub use video::VideoRef;
