use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::show::ShowId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub episode_id: String,
    pub name: String,
    /// Kept as a string because some websites number episodes like "136C"
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub sort_order: Option<u16>,
    pub release_date: DateTime<Utc>,
    pub duration: u32, // Seconds
}

impl Episode {
    pub fn new(
        episode_id: impl Into<String>,
        name: impl Into<String>,
        sort_order: Option<u16>,
        release_date: DateTime<Utc>,
        duration: u32,
    ) -> Self {
        Self {
            episode_id: episode_id.into(),
            name: name.into(),
            number: sort_order.map(|order| order.to_string()).unwrap_or_default(),
            sort_order,
            release_date,
            duration,
        }
    }

    /// Duration formatted as `minutes:seconds`, e.g. `23:05`
    pub fn duration_string(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// Fully qualified identity of an episode across the whole library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeKey {
    pub show: ShowId,
    pub season_id: String,
    pub episode_id: String,
}

impl EpisodeKey {
    pub fn new(show: ShowId, season_id: impl Into<String>, episode_id: impl Into<String>) -> Self {
        Self {
            show,
            season_id: season_id.into(),
            episode_id: episode_id.into(),
        }
    }
}

impl fmt::Display for EpisodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.show, self.season_id, self.episode_id)
    }
}
