pub mod bucket;
pub mod builder;
pub mod error;
pub mod mode;
pub mod playlist;
pub mod query;
pub mod store;
pub mod strategy;
pub mod timeline;

#[cfg(test)]
mod fixtures;

pub use bucket::{episodes_grouped_by_show, group_by_show, Bucket, Buckets};
pub use builder::{build_list, sequence};
pub use error::{PlaylistError, Result};
pub use mode::PlaylistMode;
pub use playlist::{
    random_episode, resolve_strategies, rng_for, sorted_episodes, sorted_episodes_with_rng, SortedEpisodes,
};
pub use query::{EpisodeQuery, EpisodeRef};
pub use store::LibraryStore;
pub use strategy::{
    ChangeShow, EpisodeOrder, Resort, ShowOrder, StrategyCatalog, StrategyContext, StrategySet, UnknownStrategy,
};
pub use timeline::{epoch_date, is_started, is_watched, last_watched, watch_count, ShowTimeline};
