use show_playlist_models::ShowId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    /// A show reached an episode-date ordering without any episodes. This is
    /// an upstream invariant violation and is never papered over.
    #[error("Show {0} has no episodes")]
    ShowHasNoEpisodes(ShowId),

    #[error("Show {0} has no watch history")]
    ShowNeverWatched(ShowId),

    #[error("Show {0} is not in the library")]
    UnknownShow(ShowId),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("only_started_shows and only_new_shows cannot both be enabled")]
    ConflictingFilters,

    #[error("Failed to access library file {path}: {source}")]
    LibraryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Library file {path} is not valid: {source}")]
    LibraryFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
