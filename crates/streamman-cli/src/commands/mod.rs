pub mod build;
pub mod config;
pub mod random;
pub mod strategies;

use color_eyre::Result;
use show_playlist_config::{Config, PathManager};
use show_playlist_core::LibraryStore;
use show_playlist_core::query::EpisodeRef;
use serde::Serialize;
use std::path::PathBuf;

/// Library store chosen by `--library`, then `[library] path`, then the data directory
pub fn library_store(cli_path: Option<PathBuf>, config: &Config, path_manager: &PathManager) -> LibraryStore {
    match cli_path {
        Some(path) => LibraryStore::new(path),
        None => LibraryStore::from_paths(path_manager, config.library.path.as_deref()),
    }
}

/// One playlist line, shared by the table and JSON renderings
#[derive(Debug, Serialize)]
pub struct EpisodeRow {
    pub position: usize,
    pub show_id: String,
    pub show: String,
    pub season: String,
    pub episode_id: String,
    pub episode: String,
    pub release_date: String,
    pub duration: String,
}

impl EpisodeRow {
    pub fn new(position: usize, episode: &EpisodeRef<'_>) -> Self {
        Self {
            position,
            show_id: episode.show_id().to_string(),
            show: episode.show.name.clone(),
            season: episode.season.name.clone(),
            episode_id: episode.episode.episode_id.clone(),
            episode: episode.episode.name.clone(),
            release_date: episode.episode.release_date.format("%Y-%m-%d").to_string(),
            duration: episode.episode.duration_string(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.show.clone(),
            self.season.clone(),
            self.episode.clone(),
            self.release_date.clone(),
            self.duration.clone(),
        ]
    }
}

pub const EPISODE_HEADER: [&str; 6] = ["#", "Show", "Season", "Episode", "Released", "Duration"];

pub fn ensure_library(store: &LibraryStore) -> Result<()> {
    if !store.exists() {
        return Err(color_eyre::eyre::eyre!(
            "Library file not found at {}. Point --library or [library] path at a scraped library.",
            store.path().display()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use show_playlist_core::EpisodeQuery;
    use show_playlist_models::{Episode, Library, Season, Show, ShowId};
    use tempfile::TempDir;

    #[test]
    fn test_episode_row() {
        let release = Utc.with_ymd_and_hms(2023, 4, 2, 9, 0, 0).unwrap();
        let show = Show::new(ShowId::new("HIDIVE", "oshi"), "Oshi").with_season(
            Season::new("s1", "Season 1", Some(1)).with_episode(Episode::new("e1", "Mother and Children", Some(1), release, 5400)),
        );
        let mut library = Library::new();
        library.upsert_show(show);

        let episodes = EpisodeQuery::all(&library).into_vec();
        let row = EpisodeRow::new(1, &episodes[0]);
        assert_eq!(row.show_id, "HIDIVE:oshi");
        assert_eq!(row.release_date, "2023-04-02");
        assert_eq!(row.duration, "90:00");
        assert_eq!(row.cells().len(), EPISODE_HEADER.len());
    }

    #[test]
    fn test_library_store_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(temp_dir.path().to_path_buf());
        let mut config = Config::default();

        assert_eq!(library_store(None, &config, &paths).path(), paths.library_file());

        config.library.path = Some(temp_dir.path().join("configured.json"));
        assert_eq!(library_store(None, &config, &paths).path(), temp_dir.path().join("configured.json"));

        let cli = temp_dir.path().join("cli.json");
        assert_eq!(library_store(Some(cli.clone()), &config, &paths).path(), cli);
        assert!(ensure_library(&library_store(Some(cli), &config, &paths)).is_err());
    }
}
