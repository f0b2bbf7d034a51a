use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use crate::bucket::{Bucket, Buckets};
use crate::error::Result;
use super::{StrategyCatalog, StrategyContext};

/// How shows are ranked before interleaving starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowOrder {
    #[default]
    Random,
    /// Never-watched shows first, then oldest last watch first
    LeastRecentlyWatched,
    /// Shows with the most recently released episode first
    NewestEpisodesFirst,
    /// Least remaining runtime first, to finish shows that are nearly done
    FinishUp,
    /// Keep the order shows were first met in the episode stream
    AsGrouped,
}

impl StrategyCatalog for ShowOrder {
    const AXIS: &'static str = "show_order";
    const ALL: &'static [Self] = &[
        Self::Random,
        Self::LeastRecentlyWatched,
        Self::NewestEpisodesFirst,
        Self::FinishUp,
        Self::AsGrouped,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::LeastRecentlyWatched => "least_recently_watched",
            Self::NewestEpisodesFirst => "newest_episodes_first",
            Self::FinishUp => "finish_up",
            Self::AsGrouped => "as_grouped",
        }
    }
}

super::catalog_str_impls!(ShowOrder);

impl ShowOrder {
    /// Reorder `buckets` in place.
    ///
    /// Sorts are stable, so shows that tie keep their grouped order.
    pub fn apply(self, buckets: &mut Buckets<'_>, ctx: &mut StrategyContext<'_>) -> Result<()> {
        match self {
            Self::Random => buckets.make_contiguous().shuffle(&mut *ctx.rng),
            Self::LeastRecentlyWatched => {
                let timeline = ctx.timeline;
                sort_buckets_by_key(buckets, |bucket| timeline.last_watched_date(bucket.show_id(), true))?;
            }
            Self::NewestEpisodesFirst => {
                let timeline = ctx.timeline;
                sort_buckets_by_key(buckets, |bucket| {
                    timeline.latest_episode_date(bucket.show_id()).map(Reverse)
                })?;
            }
            Self::FinishUp => {
                sort_buckets_by_key(buckets, |bucket| Ok(bucket.remaining_duration()))?;
            }
            Self::AsGrouped => {}
        }
        Ok(())
    }
}

/// Stable sort by a fallible key, computing each key once
fn sort_buckets_by_key<'a, K: Ord>(
    buckets: &mut Buckets<'a>,
    mut key: impl FnMut(&Bucket<'a>) -> Result<K>,
) -> Result<()> {
    let mut keyed = Vec::with_capacity(buckets.len());
    for bucket in buckets.drain(..) {
        keyed.push((key(&bucket)?, bucket));
    }
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    buckets.extend(keyed.into_iter().map(|(_, bucket)| bucket));
    Ok(())
}
