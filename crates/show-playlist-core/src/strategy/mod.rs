//! Pluggable strategies for playlist sequencing.
//!
//! A playlist's shape is the product of four independent axes:
//!
//! * [`ShowOrder`] ranks shows once before interleaving starts
//! * [`EpisodeOrder`] orders episodes before they are grouped by show
//! * [`ChangeShow`] decides, after each emitted episode, whether to move on
//! * [`Resort`] rearranges the remaining shows when a change fires
//!
//! Every axis is a closed enum with an explicit [`StrategyCatalog::ALL`] table
//! and stable snake_case names, so user-facing option strings map onto
//! strategies without any reflection.

mod change_show;
mod episode_order;
mod resort;
mod show_order;

pub use change_show::ChangeShow;
pub use episode_order::EpisodeOrder;
pub use resort::Resort;
pub use show_order::ShowOrder;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use crate::timeline::ShowTimeline;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {axis} strategy: {name}")]
pub struct UnknownStrategy {
    pub axis: &'static str,
    pub name: String,
}

/// A fixed, enumerable set of named choices
pub trait StrategyCatalog: Copy + Default + FromStr<Err = UnknownStrategy> + 'static {
    /// Option name this catalog is selected by (e.g. `"show_order"`)
    const AXIS: &'static str;
    const ALL: &'static [Self];

    /// Stable snake_case name
    fn as_str(self) -> &'static str;

    /// Alternative names accepted when parsing
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Human readable name, e.g. "Least Recently Watched"
    fn title(self) -> String {
        title_case(self.as_str())
    }

    /// Look a name up in [`Self::ALL`], accepting aliases and any case
    fn lookup(name: &str) -> Result<Self, UnknownStrategy> {
        let wanted = name.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str() == wanted || choice.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| UnknownStrategy {
                axis: Self::AXIS,
                name: name.to_string(),
            })
    }
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Implements `FromStr` and `Display` for a catalog through its table
macro_rules! catalog_str_impls {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = $crate::strategy::UnknownStrategy;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$ty as $crate::strategy::StrategyCatalog>::lookup(s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::strategy::StrategyCatalog::as_str(*self))
            }
        }
    };
}
pub(crate) use catalog_str_impls;

/// What show-ordering strategies may consult besides the buckets themselves
pub struct StrategyContext<'c> {
    pub timeline: &'c dyn ShowTimeline,
    pub rng: &'c mut dyn RngCore,
}

impl<'c> StrategyContext<'c> {
    pub fn new(timeline: &'c dyn ShowTimeline, rng: &'c mut dyn RngCore) -> Self {
        Self { timeline, rng }
    }
}

/// One choice per axis plus the grouping-time reversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategySet {
    pub show_order: ShowOrder,
    pub episode_order: EpisodeOrder,
    pub change_show: ChangeShow,
    pub resort: Resort,
    /// Reverse the show order after ranking
    #[serde(default)]
    pub reverse_shows: bool,
    /// Reverse the episode stream after ordering, before grouping
    #[serde(default)]
    pub reverse_episodes: bool,
}

impl StrategySet {
    pub fn new(show_order: ShowOrder, episode_order: EpisodeOrder, change_show: ChangeShow, resort: Resort) -> Self {
        Self {
            show_order,
            episode_order,
            change_show,
            resort,
            reverse_shows: false,
            reverse_episodes: false,
        }
    }

    /// Whether any chosen strategy compares the first two shows
    pub fn requires_two_shows(&self) -> bool {
        self.change_show.requires_two_shows() || self.resort.requires_two_shows()
    }
}
