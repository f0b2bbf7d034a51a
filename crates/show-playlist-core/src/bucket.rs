// Grouping stage: split an ordered episode stream into one queue per show

use chrono::{DateTime, Utc};
use rand::RngCore;
use show_playlist_models::{Show, ShowId};
use std::collections::{HashMap, VecDeque};
use tracing::debug;
use crate::query::EpisodeRef;
use crate::strategy::{EpisodeOrder, StrategyCatalog};

/// A show's not-yet-emitted episodes, in the order they will be emitted
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub show: &'a Show,
    pub episodes: VecDeque<EpisodeRef<'a>>,
}

/// Ordered queue of per-show buckets; the front bucket emits next.
///
/// Each show appears in at most one bucket.
pub type Buckets<'a> = VecDeque<Bucket<'a>>;

impl<'a> Bucket<'a> {
    pub fn new(show: &'a Show) -> Self {
        Self {
            show,
            episodes: VecDeque::new(),
        }
    }

    pub fn show_id(&self) -> &'a ShowId {
        &self.show.id
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Total runtime in seconds of the episodes still queued
    pub fn remaining_duration(&self) -> u64 {
        self.episodes
            .iter()
            .map(|episode| u64::from(episode.episode.duration))
            .sum()
    }

    /// Release date of the newest episode still queued
    pub fn latest_remaining_release(&self) -> Option<DateTime<Utc>> {
        self.episodes
            .iter()
            .map(|episode| episode.episode.release_date)
            .max()
    }
}

/// Partition an already ordered episode stream into per-show buckets.
///
/// Buckets appear in the order each show is first met in the stream and keep
/// the stream's order internally. Nothing is re-sorted by show.
pub fn group_by_show<'a>(episodes: impl IntoIterator<Item = EpisodeRef<'a>>) -> Buckets<'a> {
    let mut buckets: Buckets<'a> = VecDeque::new();
    let mut index: HashMap<&'a ShowId, usize> = HashMap::new();

    for episode in episodes {
        let position = *index.entry(episode.show_id()).or_insert_with(|| {
            buckets.push_back(Bucket::new(episode.show));
            buckets.len() - 1
        });
        buckets[position].episodes.push_back(episode);
    }

    buckets
}

/// Order the whole collection with `episode_order`, optionally reverse it, then
/// group it by show
pub fn episodes_grouped_by_show<'a>(
    mut episodes: Vec<EpisodeRef<'a>>,
    episode_order: EpisodeOrder,
    reverse_episodes: bool,
    rng: &mut dyn RngCore,
) -> Buckets<'a> {
    episode_order.apply(&mut episodes, rng);
    if reverse_episodes {
        episodes.reverse();
    }

    let buckets = group_by_show(episodes);
    debug!(
        "episodes_grouped_by_show: episode_order={}, reverse_episodes={}, buckets={}",
        episode_order.as_str(),
        reverse_episodes,
        buckets.len()
    );
    buckets
}
