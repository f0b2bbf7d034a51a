// Filter/config layer: turn user options into a filtered episode collection and
// a resolved strategy set, then run the engine

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use show_playlist_config::PlaylistOptions;
use show_playlist_models::Library;
use tracing::{debug, info, warn};
use crate::builder::build_list;
use crate::error::{PlaylistError, Result};
use crate::mode::PlaylistMode;
use crate::query::{EpisodeQuery, EpisodeRef};
use crate::strategy::{ChangeShow, Resort, StrategyCatalog, StrategyContext, StrategySet};

/// Random source for a run: reproducible when a seed is given
pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Resolve option names into concrete strategies.
///
/// The mode seeds all four axes and any axis named explicitly overrides it.
/// Absent names use the default; unrecognised names do too, with a warning.
pub fn resolve_strategies(options: &PlaylistOptions) -> StrategySet {
    let mode = resolve_name(options.mode.as_deref(), PlaylistMode::default());
    let base = mode.strategies();

    StrategySet {
        show_order: resolve_name(options.show_order.as_deref(), base.show_order),
        episode_order: resolve_name(options.episode_order.as_deref(), base.episode_order),
        change_show: resolve_name(options.change_show.as_deref(), base.change_show),
        resort: resolve_name(options.resort.as_deref(), base.resort),
        reverse_shows: options.reverse_shows,
        reverse_episodes: options.reverse_episodes,
    }
}

fn resolve_name<T: StrategyCatalog>(name: Option<&str>, fallback: T) -> T {
    match name {
        None => fallback,
        Some(name) => match T::lookup(name) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("{}, using {}", e, fallback.as_str());
                fallback
            }
        },
    }
}

/// Swap out strategies that compare the first two shows when fewer than two
/// shows are left to compare
fn guard_two_show_strategies(mut strategies: StrategySet, show_count: usize) -> StrategySet {
    if show_count >= 2 {
        return strategies;
    }
    if strategies.change_show.requires_two_shows() {
        warn!(
            "change_show {} needs at least two shows, found {}; using {}",
            strategies.change_show.as_str(),
            show_count,
            ChangeShow::default().as_str()
        );
        strategies.change_show = ChangeShow::default();
    }
    if strategies.resort.requires_two_shows() {
        warn!(
            "resort {} needs at least two shows, found {}; using {}",
            strategies.resort.as_str(),
            show_count,
            Resort::default().as_str()
        );
        strategies.resort = Resort::default();
    }
    strategies
}

/// The candidate collection: a playlist's episodes minus skipped seasons, or
/// the whole library when no playlist is named
fn source_episodes<'a>(library: &'a Library, playlist: Option<&str>) -> Result<EpisodeQuery<'a>> {
    match playlist {
        None => Ok(EpisodeQuery::all(library)),
        Some(name) => {
            let playlist = library
                .playlist(name)
                .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
            Ok(EpisodeQuery::for_playlist(library, playlist))
        }
    }
}

/// A finished playlist and the strategies that actually produced it, after
/// any two-show fallback
#[derive(Debug, Clone)]
pub struct SortedEpisodes<'a> {
    pub strategies: StrategySet,
    pub episodes: Vec<EpisodeRef<'a>>,
}

/// Build the ordered episode list for `playlist` (or the whole library) with
/// a random source derived from `options.seed`
pub fn sorted_episodes<'a>(
    library: &'a Library,
    playlist: Option<&str>,
    options: &PlaylistOptions,
) -> Result<SortedEpisodes<'a>> {
    let mut rng = rng_for(options.seed);
    sorted_episodes_with_rng(library, playlist, options, &mut rng)
}

/// Filters, then grouping and sequencing, then the final reversal, then
/// truncation to `options.number_of_episodes`
pub fn sorted_episodes_with_rng<'a>(
    library: &'a Library,
    playlist: Option<&str>,
    options: &PlaylistOptions,
    rng: &mut dyn RngCore,
) -> Result<SortedEpisodes<'a>> {
    if options.only_started_shows && options.only_new_shows {
        return Err(PlaylistError::ConflictingFilters);
    }

    let mut query = source_episodes(library, playlist)?;
    if !options.include_watched {
        query = query.unwatched();
    }
    if options.only_started_shows {
        query = query.only_started_shows();
    }
    if options.only_new_shows {
        query = query.only_new_shows();
    }
    query = query.websites(&options.websites);

    let strategies = guard_two_show_strategies(resolve_strategies(options), query.show_count());
    debug!(
        "sorted_episodes: playlist={}, candidates={}, shows={}, strategies={:?}",
        playlist.unwrap_or("<library>"),
        query.len(),
        query.show_count(),
        strategies
    );

    let mut ctx = StrategyContext::new(library, rng);
    let mut episodes = build_list(query.into_vec(), &strategies, &mut ctx)?;

    if options.reverse {
        episodes.reverse();
    }
    episodes.truncate(options.number_of_episodes);

    info!(
        "Built playlist {} with {} episodes",
        playlist.unwrap_or("<library>"),
        episodes.len()
    );
    Ok(SortedEpisodes { strategies, episodes })
}

/// A uniformly random episode of the playlist after season skips, or `None`
/// when nothing is left to pick from
pub fn random_episode<'a>(
    library: &'a Library,
    playlist: Option<&str>,
    rng: &mut dyn RngCore,
) -> Result<Option<EpisodeRef<'a>>> {
    let episodes = source_episodes(library, playlist)?.into_vec();
    Ok(episodes.choose(rng).copied())
}

#[cfg(test)]
mod tests;
