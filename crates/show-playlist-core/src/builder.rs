// Sequencing engine: drain per-show buckets into one ordered episode list

use rand::RngCore;
use tracing::debug;
use crate::bucket::{episodes_grouped_by_show, Buckets};
use crate::error::Result;
use crate::query::EpisodeRef;
use crate::strategy::{ChangeShow, Resort, StrategyCatalog, StrategyContext, StrategySet};

/// Turn a filtered episode collection into a single viewing order.
///
/// The result is always a permutation of `episodes`. The only failure is a
/// show-order strategy hitting a data error in the timeline.
pub fn build_list<'a>(
    episodes: Vec<EpisodeRef<'a>>,
    strategies: &StrategySet,
    ctx: &mut StrategyContext<'_>,
) -> Result<Vec<EpisodeRef<'a>>> {
    if episodes.is_empty() {
        return Ok(Vec::new());
    }

    let mut buckets = episodes_grouped_by_show(
        episodes,
        strategies.episode_order,
        strategies.reverse_episodes,
        &mut *ctx.rng,
    );
    strategies.show_order.apply(&mut buckets, ctx)?;
    if strategies.reverse_shows {
        buckets.make_contiguous().reverse();
    }

    debug!(
        "build_list: show_order={}, shows={}, reverse_shows={}",
        strategies.show_order.as_str(),
        buckets.len(),
        strategies.reverse_shows
    );

    Ok(sequence(buckets, strategies.change_show, strategies.resort, &mut *ctx.rng))
}

/// Run the interleaving loop until every bucket is drained.
///
/// Each pass emits the front bucket's next episode. An exhausted bucket is
/// dropped for good; otherwise `change_show` decides whether `resort` runs.
pub fn sequence<'a>(
    mut buckets: Buckets<'a>,
    change_show: ChangeShow,
    resort: Resort,
    rng: &mut dyn RngCore,
) -> Vec<EpisodeRef<'a>> {
    let total = buckets.iter().map(|bucket| bucket.len()).sum();
    let mut output = Vec::with_capacity(total);
    let mut changes = 0usize;

    while let Some(front) = buckets.front_mut() {
        match front.episodes.pop_front() {
            Some(episode) => output.push(episode),
            None => {
                // Only reachable for a bucket that was built empty
                buckets.pop_front();
                continue;
            }
        }

        if front.episodes.is_empty() {
            buckets.pop_front();
        } else if change_show.should_change(&buckets) {
            resort.apply(&mut buckets, rng);
            changes += 1;
        }
    }

    debug!(
        "sequence: change_show={}, resort={}, episodes={}, changes={}",
        change_show.as_str(),
        resort.as_str(),
        output.len(),
        changes
    );
    output
}
