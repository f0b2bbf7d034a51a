use crate::output::{new_table, Output};
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use owo_colors::OwoColorize;
use show_playlist_config::{Config, PathManager, PlaylistOptions};
use std::path::Path;

pub fn run_config(cmd: ConfigCommands, config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, path_manager, output),
        ConfigCommands::Init { force } => {
            path_manager
                .ensure_directories()
                .map_err(|e| color_eyre::eyre::eyre!("Failed to create StreamMan directories: {}", e))?;
            init_config(&path_manager.config_file(), force, output)
        }
    }
}

fn or_unset(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| "(default)".bright_black().to_string())
}

fn check(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

fn playlist_table(options: &PlaylistOptions) -> Table {
    let mut table = new_table(["Playlist Defaults", ""]);
    let websites = if options.websites.is_empty() {
        "all".to_string()
    } else {
        options.websites.join(", ")
    };
    table.add_row(vec![Cell::new("Websites"), Cell::new(websites)]);
    table.add_row(vec![Cell::new("Include watched"), Cell::new(check(options.include_watched))]);
    table.add_row(vec![Cell::new("Only started shows"), Cell::new(check(options.only_started_shows))]);
    table.add_row(vec![Cell::new("Only new shows"), Cell::new(check(options.only_new_shows))]);
    table.add_row(vec![Cell::new("Number of episodes"), Cell::new(options.number_of_episodes)]);
    table.add_row(vec![Cell::new("Mode"), Cell::new(or_unset(options.mode.as_deref()))]);
    table.add_row(vec![Cell::new("Show order"), Cell::new(or_unset(options.show_order.as_deref()))]);
    table.add_row(vec![Cell::new("Episode order"), Cell::new(or_unset(options.episode_order.as_deref()))]);
    table.add_row(vec![Cell::new("Change show"), Cell::new(or_unset(options.change_show.as_deref()))]);
    table.add_row(vec![Cell::new("Resort"), Cell::new(or_unset(options.resort.as_deref()))]);
    table.add_row(vec![Cell::new("Reverse shows"), Cell::new(check(options.reverse_shows))]);
    table.add_row(vec![Cell::new("Reverse episodes"), Cell::new(check(options.reverse_episodes))]);
    table.add_row(vec![Cell::new("Reverse playlist"), Cell::new(check(options.reverse))]);
    let seed = options.seed.map(|seed| seed.to_string());
    table.add_row(vec![Cell::new("Seed"), Cell::new(or_unset(seed.as_deref()))]);
    table
}

fn show_config(config: &Config, path_manager: &PathManager, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    let library_file = config.library_path(path_manager.library_file());

    if !output.is_human() {
        output.data(&serde_json::json!({
            "config_file": config_file,
            "config_file_exists": config_file.exists(),
            "library_file": library_file,
            "config": config,
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at {}; showing defaults. Run 'streamman config init' to create it.",
            config_file.display()
        ));
    }

    output.heading("Configuration");
    let mut files = new_table(["Files", ""]);
    files.add_row(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(config_file.display()),
    ]);
    files.add_row(vec![
        Cell::new("Library File").add_attribute(Attribute::Bold),
        Cell::new(library_file.display()),
    ]);
    output.table(files);

    output.table(playlist_table(&config.playlist));

    let mut logging = new_table(["Logging", ""]);
    logging.add_row(vec![Cell::new("Level"), Cell::new(&config.logging.level)]);
    logging.add_row(vec![Cell::new("JSON"), Cell::new(check(config.logging.json))]);
    let file = config.logging.file.as_ref().map(|path| path.display().to_string());
    logging.add_row(vec![Cell::new("File"), Cell::new(or_unset(file.as_deref()))]);
    output.table(logging);

    if let Err(e) = config.validate() {
        output.warn(format!("Configuration is invalid: {}", e));
    }
    Ok(())
}

fn init_config(config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
