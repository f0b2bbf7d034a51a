use serde::{Deserialize, Serialize};
use crate::episode::Episode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub season_id: String,
    pub name: String,
    /// Websites number seasons inconsistently ("S1", "1.0", "P1"), so the
    /// number is kept verbatim and `sort_order` is used for ordering
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub sort_order: Option<u16>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn new(season_id: impl Into<String>, name: impl Into<String>, sort_order: Option<u16>) -> Self {
        Self {
            season_id: season_id.into(),
            name: name.into(),
            number: sort_order.map(|order| order.to_string()).unwrap_or_default(),
            sort_order,
            episodes: Vec::new(),
        }
    }

    pub fn with_episode(mut self, episode: Episode) -> Self {
        self.episodes.push(episode);
        self
    }
}
