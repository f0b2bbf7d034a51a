use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use crate::query::EpisodeRef;
use super::StrategyCatalog;

/// How episodes are ordered before they are grouped by show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeOrder {
    #[default]
    Chronological,
    Random,
}

impl StrategyCatalog for EpisodeOrder {
    const AXIS: &'static str = "episode_order";
    const ALL: &'static [Self] = &[Self::Chronological, Self::Random];

    fn as_str(self) -> &'static str {
        match self {
            Self::Chronological => "chronological",
            Self::Random => "random",
        }
    }
}

super::catalog_str_impls!(EpisodeOrder);

impl EpisodeOrder {
    pub fn apply(self, episodes: &mut [EpisodeRef<'_>], rng: &mut dyn RngCore) {
        match self {
            Self::Chronological => episodes.sort_by_key(|episode| {
                (
                    sort_last(episode.season.sort_order),
                    sort_last(episode.episode.sort_order),
                )
            }),
            Self::Random => episodes.shuffle(rng),
        }
    }
}

// Unnumbered seasons and episodes go after numbered ones
fn sort_last(order: Option<u16>) -> (bool, Option<u16>) {
    (order.is_none(), order)
}
