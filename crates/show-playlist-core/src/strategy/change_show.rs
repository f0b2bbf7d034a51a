use serde::{Deserialize, Serialize};
use crate::bucket::Buckets;
use super::StrategyCatalog;

/// Decides, after an episode is emitted, whether to move away from the
/// current show before emitting the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeShow {
    /// Strict round-robin
    #[default]
    #[serde(alias = "always")]
    AfterEveryEpisode,
    /// Exhaust a show before moving on
    #[serde(alias = "never")]
    WhenShowIsComplete,
    MoreThanOneShow,
    /// Only when the next show has a strictly newer remaining episode, so
    /// shows airing at the same time interleave and stale ones are binged
    NewerEpisode,
}

impl StrategyCatalog for ChangeShow {
    const AXIS: &'static str = "change_show";
    const ALL: &'static [Self] = &[
        Self::AfterEveryEpisode,
        Self::WhenShowIsComplete,
        Self::MoreThanOneShow,
        Self::NewerEpisode,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::AfterEveryEpisode => "after_every_episode",
            Self::WhenShowIsComplete => "when_show_is_complete",
            Self::MoreThanOneShow => "more_than_one_show",
            Self::NewerEpisode => "newer_episode",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::AfterEveryEpisode => &["always"],
            Self::WhenShowIsComplete => &["never"],
            _ => &[],
        }
    }
}

super::catalog_str_impls!(ChangeShow);

impl ChangeShow {
    pub fn should_change(self, buckets: &Buckets<'_>) -> bool {
        match self {
            Self::AfterEveryEpisode => true,
            Self::WhenShowIsComplete => false,
            Self::MoreThanOneShow => buckets.len() > 1,
            Self::NewerEpisode => match (buckets.front(), buckets.get(1)) {
                (Some(current), Some(next)) => {
                    match (current.latest_remaining_release(), next.latest_remaining_release()) {
                        (Some(current), Some(next)) => next > current,
                        _ => false,
                    }
                }
                _ => false,
            },
        }
    }

    /// Compares the first two buckets, so it only means something with two
    /// or more shows
    pub fn requires_two_shows(self) -> bool {
        matches!(self, Self::NewerEpisode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::group_by_show;
    use crate::fixtures::{released_show, LibraryBuilder};
    use crate::query::EpisodeQuery;

    #[test]
    fn test_constant_decisions() {
        let library = LibraryBuilder::new().show("A", 2).build();
        let buckets = group_by_show(EpisodeQuery::all(&library).into_vec());
        assert!(ChangeShow::AfterEveryEpisode.should_change(&buckets));
        assert!(!ChangeShow::WhenShowIsComplete.should_change(&buckets));
    }

    #[test]
    fn test_more_than_one_show() {
        let one = LibraryBuilder::new().show("A", 2).build();
        let two = LibraryBuilder::new().show("A", 2).show("B", 1).build();
        assert!(!ChangeShow::MoreThanOneShow.should_change(&group_by_show(EpisodeQuery::all(&one).into_vec())));
        assert!(ChangeShow::MoreThanOneShow.should_change(&group_by_show(EpisodeQuery::all(&two).into_vec())));
    }

    #[test]
    fn test_newer_episode_compares_first_two_buckets() {
        let library = LibraryBuilder::new()
            .with_show(released_show("Test", "Old", &[1, 2]))
            .with_show(released_show("Test", "New", &[5, 6]))
            .build();
        let mut buckets = group_by_show(EpisodeQuery::all(&library).into_vec());
        assert!(ChangeShow::NewerEpisode.should_change(&buckets));

        buckets.swap(0, 1);
        assert!(!ChangeShow::NewerEpisode.should_change(&buckets));
    }

    #[test]
    fn test_newer_episode_requires_strictly_newer() {
        let library = LibraryBuilder::new()
            .with_show(released_show("Test", "A", &[3]))
            .with_show(released_show("Test", "B", &[3]))
            .build();
        let buckets = group_by_show(EpisodeQuery::all(&library).into_vec());
        assert!(!ChangeShow::NewerEpisode.should_change(&buckets));
    }

    #[test]
    fn test_newer_episode_with_single_bucket_is_false() {
        let library = LibraryBuilder::new().show("A", 3).build();
        let buckets = group_by_show(EpisodeQuery::all(&library).into_vec());
        assert!(!ChangeShow::NewerEpisode.should_change(&buckets));
        assert!(ChangeShow::NewerEpisode.requires_two_shows());
    }

    #[test]
    fn test_serde_aliases() {
        let parsed: ChangeShow = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(parsed, ChangeShow::AfterEveryEpisode);
        let parsed: ChangeShow = serde_json::from_str("\"when_show_is_complete\"").unwrap();
        assert_eq!(parsed, ChangeShow::WhenShowIsComplete);
    }
}
