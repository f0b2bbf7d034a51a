use clap::{ArgAction, Args, Parser, Subcommand};
use commands::{build, config, random, strategies};
use show_playlist_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "streamman")]
#[command(about = "StreamMan - Build watch playlists from your scraped show library")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Library file to read (overrides `[library] path`)
    #[arg(long, global = true, value_name = "FILE")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an ordered playlist
    #[command(long_about = "Build an ordered list of episodes from a playlist (or the whole library). Options not given on the command line come from the [playlist] table of the config file. A mode seeds all four strategy axes; any axis named explicitly overrides it.")]
    Build(BuildArgs),

    /// Pick a random episode
    #[command(long_about = "Pick a uniformly random episode from a playlist (skipped seasons excluded) or from the whole library.")]
    Random {
        /// Playlist to pick from
        #[arg(long, short)]
        playlist: Option<String>,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List playlist modes and ordering strategies
    Strategies,

    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Args)]
pub struct BuildArgs {
    /// Playlist to build (defaults to every show in the library)
    #[arg(long, short)]
    playlist: Option<String>,

    /// Named preset (see `streamman strategies`)
    #[arg(long)]
    mode: Option<String>,

    #[arg(long, value_name = "STRATEGY")]
    show_order: Option<String>,

    #[arg(long, value_name = "STRATEGY")]
    episode_order: Option<String>,

    #[arg(long, value_name = "STRATEGY")]
    change_show: Option<String>,

    #[arg(long, value_name = "STRATEGY")]
    resort: Option<String>,

    /// Only include shows from this website (repeatable)
    #[arg(long = "website", value_name = "WEBSITE")]
    websites: Vec<String>,

    /// Include episodes that have already been watched
    #[arg(long, action = ArgAction::SetTrue)]
    include_watched: bool,

    /// Only include shows with at least one watched episode
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "only_new_shows")]
    only_started_shows: bool,

    /// Only include shows that have never been watched
    #[arg(long, action = ArgAction::SetTrue)]
    only_new_shows: bool,

    /// Maximum number of episodes to list
    #[arg(long, short = 'n')]
    number_of_episodes: Option<usize>,

    /// Reverse the show order after ranking
    #[arg(long, action = ArgAction::SetTrue)]
    reverse_shows: bool,

    /// Reverse the episode order before grouping
    #[arg(long, action = ArgAction::SetTrue)]
    reverse_episodes: bool,

    /// Reverse the finished playlist
    #[arg(long, action = ArgAction::SetTrue)]
    reverse: bool,

    /// Seed for reproducible random strategies
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let loaded = Config::load_or_default(&path_manager.config_file());

    // Logging comes up even when the config is broken so the failure is reported
    let logging_config = loaded.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
    logging::init_logging(cli.verbose, cli.quiet, &logging_config)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let config = loaded.map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", path_manager.config_file().display(), e)
    })?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Build(args) => build::run_build(args, cli.library, &config, &path_manager, &output),
        Commands::Random { playlist, seed } => {
            random::run_random(playlist, seed, cli.library, &config, &path_manager, &output)
        }
        Commands::Strategies => strategies::run_strategies(&output),
        Commands::Config { cmd } => config::run_config(cmd, &config, &path_manager, &output),
    }
}
