pub mod config;
pub mod paths;

pub use config::{Config, LibraryConfig, LoggingConfig, PlaylistOptions, default_number_of_episodes};
pub use paths::{PathManager, container_base_path};
