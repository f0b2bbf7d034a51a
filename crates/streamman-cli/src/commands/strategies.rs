use crate::output::{new_table, Output};
use color_eyre::Result;
use serde::Serialize;
use show_playlist_core::{ChangeShow, EpisodeOrder, PlaylistMode, Resort, ShowOrder, StrategyCatalog};

#[derive(Debug, Serialize)]
struct CatalogEntry {
    axis: &'static str,
    name: &'static str,
    title: String,
    aliases: &'static [&'static str],
    default: bool,
}

fn entries<T: StrategyCatalog + PartialEq>() -> Vec<CatalogEntry> {
    T::ALL
        .iter()
        .map(|choice| CatalogEntry {
            axis: T::AXIS,
            name: choice.as_str(),
            title: choice.title(),
            aliases: choice.aliases(),
            default: *choice == T::default(),
        })
        .collect()
}

fn catalog() -> Vec<CatalogEntry> {
    let mut all = entries::<ShowOrder>();
    all.extend(entries::<EpisodeOrder>());
    all.extend(entries::<ChangeShow>());
    all.extend(entries::<Resort>());
    all
}

pub fn run_strategies(output: &Output) -> Result<()> {
    let strategies = catalog();
    let modes: Vec<_> = PlaylistMode::ALL
        .iter()
        .map(|mode| serde_json::json!({ "mode": mode.as_str(), "strategies": mode.strategies() }))
        .collect();

    if !output.is_human() {
        output.data(&serde_json::json!({ "strategies": strategies, "modes": modes }));
        return Ok(());
    }

    output.heading("Playlist modes");
    let mut mode_table = new_table(["Mode", "Show order", "Episode order", "Change show", "Resort"]);
    for mode in PlaylistMode::ALL {
        let set = mode.strategies();
        mode_table.add_row(vec![
            mode.as_str(),
            set.show_order.as_str(),
            set.episode_order.as_str(),
            set.change_show.as_str(),
            set.resort.as_str(),
        ]);
    }
    output.table(mode_table);

    output.heading("Strategies");
    let mut table = new_table(["Axis", "Name", "Title", "Aliases", "Default"]);
    for entry in &strategies {
        table.add_row(vec![
            entry.axis.to_string(),
            entry.name.to_string(),
            entry.title.clone(),
            entry.aliases.join(", "),
            if entry.default { "✓".to_string() } else { String::new() },
        ]);
    }
    output.table(table);
    Ok(())
}
