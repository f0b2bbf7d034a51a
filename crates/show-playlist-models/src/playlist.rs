use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::show::ShowId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub shows: Vec<PlaylistShow>,
}

/// A show in a playlist. Some websites publish dubs as separate seasons, so
/// individual seasons can be skipped without removing the show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistShow {
    pub show: ShowId,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub skipped_seasons: BTreeSet<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shows: Vec::new(),
        }
    }

    pub fn contains(&self, show: &ShowId) -> bool {
        self.shows.iter().any(|entry| &entry.show == show)
    }

    /// Add a show; returns false if it was already in the playlist
    pub fn add_show(&mut self, show: ShowId) -> bool {
        if self.contains(&show) {
            return false;
        }
        self.shows.push(PlaylistShow {
            show,
            skipped_seasons: BTreeSet::new(),
        });
        true
    }

    pub fn remove_show(&mut self, show: &ShowId) -> bool {
        let before = self.shows.len();
        self.shows.retain(|entry| &entry.show != show);
        self.shows.len() != before
    }

    /// Mark a season as skipped (or un-skip it). Returns false if the show is
    /// not part of the playlist.
    pub fn set_season_skipped(&mut self, show: &ShowId, season_id: &str, skip: bool) -> bool {
        match self.shows.iter_mut().find(|entry| &entry.show == show) {
            Some(entry) => {
                if skip {
                    entry.skipped_seasons.insert(season_id.to_string());
                } else {
                    entry.skipped_seasons.remove(season_id);
                }
                true
            }
            None => false,
        }
    }

    pub fn is_season_skipped(&self, show: &ShowId, season_id: &str) -> bool {
        self.shows
            .iter()
            .find(|entry| &entry.show == show)
            .map(|entry| entry.skipped_seasons.contains(season_id))
            .unwrap_or(false)
    }
}
