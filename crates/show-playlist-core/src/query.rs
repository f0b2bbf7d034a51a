// Episode selection: which episodes of the library are candidates for a playlist

use show_playlist_models::{Episode, EpisodeKey, Library, Playlist, Season, Show, ShowId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// An episode together with the season and show that own it
#[derive(Debug, Clone, Copy)]
pub struct EpisodeRef<'a> {
    pub show: &'a Show,
    pub season: &'a Season,
    pub episode: &'a Episode,
}

impl<'a> EpisodeRef<'a> {
    pub fn show_id(&self) -> &'a ShowId {
        &self.show.id
    }

    pub fn key(&self) -> EpisodeKey {
        EpisodeKey::new(
            self.show.id.clone(),
            self.season.season_id.clone(),
            self.episode.episode_id.clone(),
        )
    }
}

/// A filtered, fully materialised collection of episodes.
///
/// Filters consume and return the query so they chain like a query set.
pub struct EpisodeQuery<'a> {
    library: &'a Library,
    episodes: Vec<EpisodeRef<'a>>,
}

impl<'a> EpisodeQuery<'a> {
    /// Every episode in the library
    pub fn all(library: &'a Library) -> Self {
        let episodes = library
            .shows
            .iter()
            .flat_map(|show| {
                show.episodes()
                    .map(move |(season, episode)| EpisodeRef { show, season, episode })
            })
            .collect();
        Self { library, episodes }
    }

    /// Episodes of the playlist's shows, minus any skipped seasons
    pub fn for_playlist(library: &'a Library, playlist: &Playlist) -> Self {
        let mut episodes = Vec::new();
        for entry in &playlist.shows {
            let Some(show) = library.show(&entry.show) else {
                warn!("Playlist '{}' references unknown show {}", playlist.name, entry.show);
                continue;
            };
            for (season, episode) in show.episodes() {
                if entry.skipped_seasons.contains(&season.season_id) {
                    continue;
                }
                episodes.push(EpisodeRef { show, season, episode });
            }
        }

        debug!(
            "for_playlist: playlist={}, shows={}, episodes={}",
            playlist.name,
            playlist.shows.len(),
            episodes.len()
        );

        Self { library, episodes }
    }

    /// Keep only shows from the given websites; an empty list keeps everything
    pub fn websites(mut self, websites: &[String]) -> Self {
        if websites.is_empty() {
            return self;
        }
        self.episodes
            .retain(|episode| websites.iter().any(|website| website == &episode.show.id.website));
        self
    }

    /// Drop every episode with at least one watch-log entry
    pub fn unwatched(mut self) -> Self {
        let watched = self.watched_keys();
        self.episodes
            .retain(|episode| !watched.contains(&episode.key()));
        self
    }

    /// Keep only shows with at least one watched episode
    pub fn only_started_shows(mut self) -> Self {
        let started = self.started_shows();
        self.episodes.retain(|episode| started.contains(episode.show_id()));
        self
    }

    /// Keep only shows that have never been watched
    pub fn only_new_shows(mut self) -> Self {
        let started = self.started_shows();
        self.episodes.retain(|episode| !started.contains(episode.show_id()));
        self
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Number of distinct shows still in the collection
    pub fn show_count(&self) -> usize {
        self.episodes
            .iter()
            .map(|episode| episode.show_id())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn into_vec(self) -> Vec<EpisodeRef<'a>> {
        self.episodes
    }

    fn watched_keys(&self) -> HashSet<&'a EpisodeKey> {
        self.library.watches.iter().map(|watch| &watch.episode).collect()
    }

    fn started_shows(&self) -> HashSet<&'a ShowId> {
        self.library.watches.iter().map(|watch| &watch.episode.show).collect()
    }
}
