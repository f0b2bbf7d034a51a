// Small in-memory libraries for unit tests

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use show_playlist_models::{Episode, EpisodeKey, EpisodeWatch, Library, Playlist, Season, Show, ShowId};
use crate::query::EpisodeRef;

pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
}

pub(crate) fn at(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, d, 12, 0, 0).unwrap()
}

/// Show `name` on website "Test" with one season of `episodes` episodes
/// named `{name}1..`, released one per day and 20 minutes long
pub(crate) fn show(name: &str, episodes: u16) -> Show {
    released_show("Test", name, &(1..=u32::from(episodes)).collect::<Vec<_>>())
}

/// Like [`show`] but with explicit release days and website
pub(crate) fn released_show(website: &str, name: &str, release_days: &[u32]) -> Show {
    let mut season = Season::new(format!("{}-s1", name), "Season 1", Some(1));
    for (index, release) in release_days.iter().enumerate() {
        let number = u16::try_from(index + 1).unwrap();
        season.episodes.push(Episode::new(
            format!("{}{}", name, number),
            format!("{} episode {}", name, number),
            Some(number),
            at(*release),
            20 * 60,
        ));
    }
    Show::new(ShowId::new(website, name), name).with_season(season)
}

pub(crate) struct LibraryBuilder {
    library: Library,
}

impl LibraryBuilder {
    pub(crate) fn new() -> Self {
        Self { library: Library::new() }
    }

    pub(crate) fn show(self, name: &str, episodes: u16) -> Self {
        self.with_show(show(name, episodes))
    }

    pub(crate) fn with_show(mut self, show: Show) -> Self {
        self.library.upsert_show(show);
        self
    }

    /// Log a watch of episode `{name}{episode}` in the show's first season
    pub(crate) fn watched(mut self, name: &str, episode: u16, date: NaiveDate) -> Self {
        let show = self
            .library
            .shows
            .iter()
            .find(|show| show.name == name)
            .unwrap();
        let season = &show.seasons[0];
        let key = EpisodeKey::new(show.id.clone(), season.season_id.clone(), format!("{}{}", name, episode));
        self.library.record_watch(EpisodeWatch::new(key, date));
        self
    }

    pub(crate) fn playlist(mut self, playlist: Playlist) -> Self {
        self.library.add_playlist(playlist);
        self
    }

    pub(crate) fn build(self) -> Library {
        self.library
    }
}

pub(crate) fn ids(episodes: &[EpisodeRef<'_>]) -> Vec<String> {
    episodes.iter().map(|episode| episode.episode.episode_id.clone()).collect()
}
