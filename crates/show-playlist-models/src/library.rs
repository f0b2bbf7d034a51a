use serde::{Deserialize, Serialize};
use crate::episode::EpisodeKey;
use crate::playlist::Playlist;
use crate::show::{Show, ShowId};
use crate::watch::EpisodeWatch;

/// Everything scraped so far plus the user's watch log and playlists.
///
/// This is the materialised form of the scraped catalog; playlist building
/// only ever reads from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Library {
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub watches: Vec<EpisodeWatch>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, id: &ShowId) -> Option<&Show> {
        self.shows.iter().find(|show| &show.id == id)
    }

    /// Insert a show, replacing (and returning) any show with the same id
    pub fn upsert_show(&mut self, show: Show) -> Option<Show> {
        match self.shows.iter_mut().find(|existing| existing.id == show.id) {
            Some(existing) => Some(std::mem::replace(existing, show)),
            None => {
                self.shows.push(show);
                None
            }
        }
    }

    /// Record a watch. Returns false when the episode was already logged for
    /// that date.
    pub fn record_watch(&mut self, watch: EpisodeWatch) -> bool {
        if self.watches.contains(&watch) {
            return false;
        }
        self.watches.push(watch);
        true
    }

    pub fn watches_for_show<'a>(&'a self, show: &'a ShowId) -> impl Iterator<Item = &'a EpisodeWatch> + 'a {
        self.watches.iter().filter(move |watch| &watch.episode.show == show)
    }

    pub fn watches_for_episode<'a>(&'a self, episode: &'a EpisodeKey) -> impl Iterator<Item = &'a EpisodeWatch> + 'a {
        self.watches.iter().filter(move |watch| &watch.episode == episode)
    }

    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.name == name)
    }

    /// Add a playlist; names are unique so an existing name is rejected
    pub fn add_playlist(&mut self, playlist: Playlist) -> bool {
        if self.playlist(&playlist.name).is_some() {
            return false;
        }
        self.playlists.push(playlist);
        true
    }
}
