use super::{ensure_library, library_store, EpisodeRow, EPISODE_HEADER};
use crate::output::{new_table, Output};
use color_eyre::Result;
use show_playlist_config::{Config, PathManager};
use show_playlist_core::{random_episode, rng_for};
use std::path::PathBuf;

pub fn run_random(
    playlist: Option<String>,
    seed: Option<u64>,
    library_path: Option<PathBuf>,
    config: &Config,
    path_manager: &PathManager,
    output: &Output,
) -> Result<()> {
    let store = library_store(library_path, config, path_manager);
    ensure_library(&store)?;
    let library = store.load()?;

    let mut rng = rng_for(seed.or(config.playlist.seed));
    let picked = random_episode(&library, playlist.as_deref(), &mut rng)?;
    let row = picked.as_ref().map(|episode| EpisodeRow::new(1, episode));

    if !output.is_human() {
        output.data(&serde_json::json!({ "playlist": playlist, "episode": row }));
        return Ok(());
    }

    match row {
        Some(row) => {
            let mut table = new_table(EPISODE_HEADER);
            table.add_row(row.cells());
            output.table(table);
        }
        None => output.warn(format!(
            "{} has no episodes to pick from",
            playlist.as_deref().unwrap_or("The library")
        )),
    }
    Ok(())
}
