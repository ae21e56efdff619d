//! Media Hub - session playlist store
//!
//! This library holds the playlists of a Media Hub session, validates the
//! playlist form and projects the collection into view records for
//! whatever display surface is plugged in.

pub mod capability;
pub mod error;
pub mod model;
pub mod store;

pub use error::PlaylistError;
pub use store::{PlaylistStore, StoreConfig};
