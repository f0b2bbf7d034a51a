pub mod episode;
pub mod library;
pub mod playlist;
pub mod season;
pub mod show;
pub mod watch;

pub use episode::{Episode, EpisodeKey};
pub use library::Library;
pub use playlist::{Playlist, PlaylistShow};
pub use season::Season;
pub use show::{Show, ShowId};
pub use watch::EpisodeWatch;
