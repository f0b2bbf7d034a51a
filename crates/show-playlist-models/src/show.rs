use serde::{Deserialize, Serialize};
use std::fmt;
use crate::episode::Episode;
use crate::season::Season;

/// Stable identity of a show: the website it was scraped from plus that
/// website's own identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShowId {
    pub website: String, // Website the show is from (e.g. "Crunchyroll", "HIDIVE")
    pub show_id: String,
}

impl ShowId {
    pub fn new(website: impl Into<String>, show_id: impl Into<String>) -> Self {
        Self {
            website: website.into(),
            show_id: show_id.into(),
        }
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.website, self.show_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl Show {
    pub fn new(id: ShowId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            media_type: None,
            description: String::new(),
            seasons: Vec::new(),
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.seasons.push(season);
        self
    }

    pub fn season(&self, season_id: &str) -> Option<&Season> {
        self.seasons.iter().find(|season| season.season_id == season_id)
    }

    /// Every episode of every season, in storage order
    pub fn episodes(&self) -> impl Iterator<Item = (&Season, &Episode)> {
        self.seasons
            .iter()
            .flat_map(|season| season.episodes.iter().map(move |episode| (season, episode)))
    }

    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|season| season.episodes.len()).sum()
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
