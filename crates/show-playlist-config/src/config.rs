use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub playlist: PlaylistOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LibraryConfig {
    /// Scraped library file; falls back to the data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Options controlling how a playlist's episodes are filtered and ordered.
///
/// Strategy fields hold catalog names (e.g. `"least_recently_watched"`) rather
/// than typed values so that a stale or misspelled name in a config file falls
/// back to the default instead of refusing to load.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaylistOptions {
    /// Only include shows from these websites (empty = all websites)
    #[serde(default)]
    pub websites: Vec<String>,
    #[serde(default)]
    pub include_watched: bool,
    #[serde(default)]
    pub only_started_shows: bool,
    #[serde(default)]
    pub only_new_shows: bool,
    #[serde(default = "default_number_of_episodes")]
    pub number_of_episodes: usize,

    /// Named preset that seeds the four strategy axes
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub show_order: Option<String>,
    #[serde(default)]
    pub episode_order: Option<String>,
    #[serde(default)]
    pub change_show: Option<String>,
    #[serde(default)]
    pub resort: Option<String>,

    #[serde(default)]
    pub reverse_shows: bool,
    #[serde(default)]
    pub reverse_episodes: bool,
    /// Reverse the finished playlist (applied before truncation)
    #[serde(default)]
    pub reverse: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

pub fn default_number_of_episodes() -> usize {
    100
}

impl Default for PlaylistOptions {
    fn default() -> Self {
        Self {
            websites: Vec::new(),
            include_watched: false,
            only_started_shows: false,
            only_new_shows: false,
            number_of_episodes: default_number_of_episodes(),
            mode: None,
            show_order: None,
            episode_order: None,
            change_show: None,
            resort: None,
            reverse_shows: false,
            reverse_episodes: false,
            reverse: false,
            seed: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json_logging")]
    pub json: bool,
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json_logging() -> bool {
    use std::io::IsTerminal;
    !std::io::stdout().is_terminal()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json_logging(),
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.playlist.only_started_shows && self.playlist.only_new_shows {
            return Err(anyhow::anyhow!("only_started_shows and only_new_shows cannot both be enabled"));
        }

        if self.playlist.number_of_episodes == 0 {
            return Err(anyhow::anyhow!("number_of_episodes must be greater than zero"));
        }

        if let Some(path) = &self.library.path {
            if path.as_os_str().is_empty() {
                return Err(anyhow::anyhow!("library.path cannot be empty"));
            }
        }

        Ok(())
    }

    /// Library file to read, honouring `[library] path`
    pub fn library_path(&self, default: PathBuf) -> PathBuf {
        self.library.path.clone().unwrap_or(default)
    }
}
