use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::episode::EpisodeKey;

/// One entry of the watch log. An episode can be watched many times, but at
/// most once per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EpisodeWatch {
    pub episode: EpisodeKey,
    pub watch_date: NaiveDate,
}

impl EpisodeWatch {
    pub fn new(episode: EpisodeKey, watch_date: NaiveDate) -> Self {
        Self { episode, watch_date }
    }
}
