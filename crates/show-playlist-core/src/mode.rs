use serde::{Deserialize, Serialize};
use crate::strategy::{ChangeShow, EpisodeOrder, Resort, ShowOrder, StrategyCatalog, StrategySet};

/// Named presets over the four strategy axes.
///
/// The engine never sees a mode; it only receives the expanded [`StrategySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistMode {
    #[default]
    Normal,
    RoundRobin,
    Binge,
    LeastRecentlyWatched,
    SmartNewestStraight,
    SmartNewestMixed,
    FinishUpMixed,
    FinishUpStraight,
    AiringTogether,
}

impl StrategyCatalog for PlaylistMode {
    const AXIS: &'static str = "mode";
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::RoundRobin,
        Self::Binge,
        Self::LeastRecentlyWatched,
        Self::SmartNewestStraight,
        Self::SmartNewestMixed,
        Self::FinishUpMixed,
        Self::FinishUpStraight,
        Self::AiringTogether,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::RoundRobin => "round_robin",
            Self::Binge => "binge",
            Self::LeastRecentlyWatched => "least_recently_watched",
            Self::SmartNewestStraight => "smart_newest_straight",
            Self::SmartNewestMixed => "smart_newest_mixed",
            Self::FinishUpMixed => "finish_up_mixed",
            Self::FinishUpStraight => "finish_up_straight",
            Self::AiringTogether => "airing_together",
        }
    }
}

crate::strategy::catalog_str_impls!(PlaylistMode);

impl PlaylistMode {
    pub fn strategies(self) -> StrategySet {
        use ChangeShow::*;
        use ShowOrder::*;

        let chronological = EpisodeOrder::Chronological;
        match self {
            Self::Normal => StrategySet::new(Random, chronological, AfterEveryEpisode, Resort::Shuffle),
            Self::RoundRobin => StrategySet::new(Random, EpisodeOrder::Random, AfterEveryEpisode, Resort::Rotate),
            Self::Binge => StrategySet::new(Random, chronological, WhenShowIsComplete, Resort::Rotate),
            Self::LeastRecentlyWatched => {
                StrategySet::new(ShowOrder::LeastRecentlyWatched, chronological, MoreThanOneShow, Resort::Rotate)
            }
            Self::SmartNewestStraight => {
                StrategySet::new(NewestEpisodesFirst, chronological, WhenShowIsComplete, Resort::Swap1And2)
            }
            Self::SmartNewestMixed => {
                StrategySet::new(NewestEpisodesFirst, chronological, AfterEveryEpisode, Resort::Rotate)
            }
            Self::FinishUpMixed => StrategySet::new(FinishUp, chronological, AfterEveryEpisode, Resort::Rotate),
            Self::FinishUpStraight => StrategySet::new(FinishUp, chronological, WhenShowIsComplete, Resort::Rotate),
            Self::AiringTogether => {
                StrategySet::new(NewestEpisodesFirst, chronological, NewerEpisode, Resort::Swap1And2)
            }
        }
    }
}
