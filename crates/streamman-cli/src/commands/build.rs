use super::{ensure_library, library_store, EpisodeRow, EPISODE_HEADER};
use crate::output::{new_table, Output};
use crate::BuildArgs;
use color_eyre::Result;
use show_playlist_config::{Config, PathManager, PlaylistOptions};
use show_playlist_core::{sorted_episodes, StrategyCatalog};
use std::path::PathBuf;
use tracing::info;

/// Command-line flags layered over the `[playlist]` config table. Switches
/// only ever turn a config option on.
fn merge_options(args: BuildArgs, defaults: &PlaylistOptions) -> PlaylistOptions {
    let mut options = defaults.clone();

    if !args.websites.is_empty() {
        options.websites = args.websites;
    }
    options.include_watched |= args.include_watched;
    options.reverse_shows |= args.reverse_shows;
    options.reverse_episodes |= args.reverse_episodes;
    options.reverse |= args.reverse;

    // The two show filters exclude each other, so a flag replaces the config choice
    if args.only_started_shows || args.only_new_shows {
        options.only_started_shows = args.only_started_shows;
        options.only_new_shows = args.only_new_shows;
    }

    if let Some(count) = args.number_of_episodes {
        options.number_of_episodes = count;
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    // An explicit mode starts the axes over from that mode
    if args.mode.is_some() {
        options.mode = args.mode;
        options.show_order = None;
        options.episode_order = None;
        options.change_show = None;
        options.resort = None;
    }
    options.show_order = args.show_order.or(options.show_order);
    options.episode_order = args.episode_order.or(options.episode_order);
    options.change_show = args.change_show.or(options.change_show);
    options.resort = args.resort.or(options.resort);

    options
}

pub fn run_build(
    args: BuildArgs,
    library_path: Option<PathBuf>,
    config: &Config,
    path_manager: &PathManager,
    output: &Output,
) -> Result<()> {
    let playlist = args.playlist.clone();
    let options = merge_options(args, &config.playlist);
    if options.number_of_episodes == 0 {
        return Err(color_eyre::eyre::eyre!("--number-of-episodes must be greater than zero"));
    }

    let store = library_store(library_path, config, path_manager);
    ensure_library(&store)?;
    let library = store.load()?;

    let sorted = sorted_episodes(&library, playlist.as_deref(), &options)?;
    let strategies = sorted.strategies;
    info!(
        "Built {} with {} / {} / {} / {}",
        playlist.as_deref().unwrap_or("library playlist"),
        strategies.show_order.as_str(),
        strategies.episode_order.as_str(),
        strategies.change_show.as_str(),
        strategies.resort.as_str()
    );

    let rows: Vec<EpisodeRow> = sorted
        .episodes
        .iter()
        .enumerate()
        .map(|(index, episode)| EpisodeRow::new(index + 1, episode))
        .collect();

    if !output.is_human() {
        output.data(&serde_json::json!({
            "playlist": playlist,
            "strategies": strategies,
            "episodes": rows,
        }));
        return Ok(());
    }

    if rows.is_empty() {
        output.warn("No episodes matched the playlist filters");
        return Ok(());
    }

    output.heading(&format!(
        "{} ({} episodes)",
        playlist.as_deref().unwrap_or("Library"),
        rows.len()
    ));
    let mut table = new_table(EPISODE_HEADER);
    for row in &rows {
        table.add_row(row.cells());
    }
    output.table(table);
    output.success(format!(
        "Ordered by {}, {}, change show {}, resort {}",
        strategies.show_order.title(),
        strategies.episode_order.title(),
        strategies.change_show.title(),
        strategies.resort.title()
    ));
    Ok(())
}
