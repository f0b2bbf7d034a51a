// Show- and episode-level dates derived from the library and its watch log

use chrono::{DateTime, NaiveDate, Utc};
use show_playlist_models::{EpisodeKey, Library, ShowId};
use crate::error::{PlaylistError, Result};

/// Date used for shows that were never watched when a lazy lookup is requested
pub fn epoch_date() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Per-show dates that ordering strategies rank shows by.
///
/// Strategies only see this trait, never the storage behind it.
pub trait ShowTimeline {
    /// Most recent watch date of any episode of the show.
    ///
    /// With `lazy` a never-watched show reports [`epoch_date`] instead of an
    /// error, which sorts it ahead of everything that has been watched.
    fn last_watched_date(&self, show: &ShowId, lazy: bool) -> Result<NaiveDate>;

    /// Release date of the show's newest episode. Errors when the show has no
    /// episodes at all.
    fn latest_episode_date(&self, show: &ShowId) -> Result<DateTime<Utc>>;
}

impl ShowTimeline for Library {
    fn last_watched_date(&self, show: &ShowId, lazy: bool) -> Result<NaiveDate> {
        match self.watches_for_show(show).map(|watch| watch.watch_date).max() {
            Some(date) => Ok(date),
            None if lazy => Ok(epoch_date()),
            None => Err(PlaylistError::ShowNeverWatched(show.clone())),
        }
    }

    fn latest_episode_date(&self, show: &ShowId) -> Result<DateTime<Utc>> {
        let entry = self
            .show(show)
            .ok_or_else(|| PlaylistError::UnknownShow(show.clone()))?;
        entry
            .episodes()
            .map(|(_, episode)| episode.release_date)
            .max()
            .ok_or_else(|| PlaylistError::ShowHasNoEpisodes(show.clone()))
    }
}

pub fn is_watched(library: &Library, episode: &EpisodeKey) -> bool {
    library.watches_for_episode(episode).next().is_some()
}

pub fn watch_count(library: &Library, episode: &EpisodeKey) -> usize {
    library.watches_for_episode(episode).count()
}

pub fn last_watched(library: &Library, episode: &EpisodeKey) -> Option<NaiveDate> {
    library.watches_for_episode(episode).map(|watch| watch.watch_date).max()
}

/// A show counts as started once any of its episodes has been watched
pub fn is_started(library: &Library, show: &ShowId) -> bool {
    library.watches_for_show(show).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{day, LibraryBuilder};

    #[test]
    fn test_last_watched_date_uses_newest_watch() {
        let library = LibraryBuilder::new()
            .show("A", 3)
            .watched("A", 1, day(3))
            .watched("A", 2, day(9))
            .watched("A", 1, day(5))
            .build();
        let show = ShowId::new("Test", "A");
        assert_eq!(library.last_watched_date(&show, false).unwrap(), day(9));
    }

    #[test]
    fn test_last_watched_date_lazy_defaults_to_epoch() {
        let library = LibraryBuilder::new().show("A", 1).build();
        let show = ShowId::new("Test", "A");
        assert_eq!(library.last_watched_date(&show, true).unwrap(), epoch_date());
        assert_eq!(epoch_date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(matches!(
            library.last_watched_date(&show, false),
            Err(PlaylistError::ShowNeverWatched(_))
        ));
    }

    #[test]
    fn test_latest_episode_date_errors_without_episodes() {
        let library = LibraryBuilder::new().show("A", 0).show("B", 2).build();
        assert!(matches!(
            library.latest_episode_date(&ShowId::new("Test", "A")),
            Err(PlaylistError::ShowHasNoEpisodes(_))
        ));
        assert!(matches!(
            library.latest_episode_date(&ShowId::new("Test", "missing")),
            Err(PlaylistError::UnknownShow(_))
        ));
        assert!(library.latest_episode_date(&ShowId::new("Test", "B")).is_ok());
    }

    #[test]
    fn test_episode_watch_helpers() {
        let library = LibraryBuilder::new()
            .show("A", 2)
            .watched("A", 1, day(1))
            .watched("A", 1, day(4))
            .build();
        let first = EpisodeKey::new(ShowId::new("Test", "A"), "A-s1", "A1");
        let second = EpisodeKey::new(ShowId::new("Test", "A"), "A-s1", "A2");

        assert!(is_watched(&library, &first));
        assert_eq!(watch_count(&library, &first), 2);
        assert_eq!(last_watched(&library, &first), Some(day(4)));
        assert!(!is_watched(&library, &second));
        assert_eq!(last_watched(&library, &second), None);
        assert!(is_started(&library, &ShowId::new("Test", "A")));
    }
}
