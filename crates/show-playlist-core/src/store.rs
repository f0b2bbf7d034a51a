use show_playlist_config::PathManager;
use show_playlist_models::Library;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use crate::error::{PlaylistError, Result};

/// JSON file holding the scraped library, its watch log and playlists
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured library path, or the data directory default
    pub fn from_paths(path_manager: &PathManager, configured: Option<&Path>) -> Self {
        match configured {
            Some(path) => Self::new(path),
            None => Self::new(path_manager.library_file()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Library> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| PlaylistError::LibraryIo {
            path: self.path.clone(),
            source,
        })?;
        let library: Library = serde_json::from_str(&content).map_err(|source| PlaylistError::LibraryFormat {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Loaded library {}: {} shows, {} watches, {} playlists",
            self.path.display(),
            library.shows.len(),
            library.watches.len(),
            library.playlists.len()
        );
        Ok(library)
    }

    /// Load the library, or start an empty one when the file does not exist yet
    pub fn load_or_default(&self) -> Result<Library> {
        if self.exists() {
            self.load()
        } else {
            debug!("Library file {} does not exist, using an empty library", self.path.display());
            Ok(Library::default())
        }
    }

    pub fn save(&self, library: &Library) -> Result<()> {
        let io_error = |source| PlaylistError::LibraryIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(library).map_err(|source| PlaylistError::LibraryFormat {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(io_error)?;

        debug!("Library saved to {} ({} shows)", self.path.display(), library.shows.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{day, LibraryBuilder};
    use show_playlist_models::Playlist;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = LibraryStore::new(temp_dir.path().join("nested").join("library.json"));
        let library = LibraryBuilder::new()
            .show("A", 2)
            .watched("A", 1, day(4))
            .playlist(Playlist::new("Evening"))
            .build();

        store.save(&library).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.shows.len(), 1);
        assert_eq!(loaded.shows[0].episode_count(), 2);
        assert_eq!(loaded.watches.len(), 1);
        assert!(loaded.playlist("Evening").is_some());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = LibraryStore::new(temp_dir.path().join("missing.json"));
        assert!(matches!(store.load(), Err(PlaylistError::LibraryIo { .. })));
        assert!(store.load_or_default().unwrap().shows.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_a_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = LibraryStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, PlaylistError::LibraryFormat { .. }));
        assert!(err.to_string().contains("library.json"));
    }

    #[test]
    fn test_from_paths_prefers_configured_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(temp_dir.path().to_path_buf());
        let default = LibraryStore::from_paths(&paths, None);
        assert_eq!(default.path(), paths.library_file());

        let custom = temp_dir.path().join("custom.json");
        assert_eq!(LibraryStore::from_paths(&paths, Some(&custom)).path(), custom);
    }
}
