use super::*;
use crate::fixtures::{at, day, ids, released_show, LibraryBuilder};
use crate::strategy::{EpisodeOrder, ShowOrder};
use show_playlist_models::{Episode, Playlist, Season, Show, ShowId};

fn options() -> PlaylistOptions {
    PlaylistOptions {
        show_order: Some("as_grouped".to_string()),
        change_show: Some("always".to_string()),
        resort: Some("rotate".to_string()),
        seed: Some(1),
        ..PlaylistOptions::default()
    }
}

fn build(library: &Library, playlist: Option<&str>, options: &PlaylistOptions) -> Vec<String> {
    ids(&sorted_episodes(library, playlist, options).unwrap().episodes)
}

#[test]
fn test_defaults_resolve_to_normal_mode() {
    let strategies = resolve_strategies(&PlaylistOptions::default());
    assert_eq!(strategies, PlaylistMode::Normal.strategies());
    assert_eq!(strategies.resort, Resort::Shuffle);
}

#[test]
fn test_explicit_axes_override_mode() {
    let options = PlaylistOptions {
        mode: Some("binge".to_string()),
        change_show: Some("after-every-episode".to_string()),
        reverse_shows: true,
        ..PlaylistOptions::default()
    };
    let strategies = resolve_strategies(&options);
    assert_eq!(strategies.change_show, ChangeShow::AfterEveryEpisode);
    assert_eq!(strategies.episode_order, EpisodeOrder::Chronological);
    assert_eq!(strategies.resort, Resort::Rotate);
    assert!(strategies.reverse_shows);
}

#[test]
fn test_unknown_names_fall_back() {
    let options = PlaylistOptions {
        mode: Some("chaos".to_string()),
        show_order: Some("alphabetical".to_string()),
        resort: Some("reverse".to_string()),
        ..PlaylistOptions::default()
    };
    assert_eq!(resolve_strategies(&options), PlaylistMode::Normal.strategies());

    let options = PlaylistOptions {
        mode: Some("finish_up_straight".to_string()),
        show_order: Some("nope".to_string()),
        ..PlaylistOptions::default()
    };
    assert_eq!(resolve_strategies(&options).show_order, ShowOrder::FinishUp);
}

#[test]
fn test_conflicting_filters() {
    let library = LibraryBuilder::new().show("A", 1).build();
    let options = PlaylistOptions {
        only_started_shows: true,
        only_new_shows: true,
        ..options()
    };
    assert!(matches!(
        sorted_episodes(&library, None, &options),
        Err(PlaylistError::ConflictingFilters)
    ));
}

#[test]
fn test_unknown_playlist() {
    let library = LibraryBuilder::new().show("A", 1).build();
    let result = sorted_episodes(&library, Some("Missing"), &options());
    assert!(matches!(result, Err(PlaylistError::PlaylistNotFound(name)) if name == "Missing"));
    assert!(matches!(
        random_episode(&library, Some("Missing"), &mut rng_for(Some(1))),
        Err(PlaylistError::PlaylistNotFound(_))
    ));
}

#[test]
fn test_watched_episodes_hidden_by_default() {
    let library = LibraryBuilder::new()
        .show("A", 3)
        .show("B", 2)
        .watched("A", 1, day(1))
        .build();

    // B1 now sorts ahead of A2, so B is grouped first
    assert_eq!(build(&library, None, &options()), vec!["B1", "A2", "B2", "A3"]);

    let with_watched = PlaylistOptions {
        include_watched: true,
        ..options()
    };
    assert_eq!(build(&library, None, &with_watched), vec!["A1", "B1", "A2", "B2", "A3"]);
}

#[test]
fn test_started_and_new_show_filters() {
    let library = LibraryBuilder::new()
        .show("A", 2)
        .show("B", 2)
        .watched("A", 1, day(1))
        .build();

    let started = PlaylistOptions {
        only_started_shows: true,
        ..options()
    };
    assert_eq!(build(&library, None, &started), vec!["A2"]);

    let new = PlaylistOptions {
        only_new_shows: true,
        ..options()
    };
    assert_eq!(build(&library, None, &new), vec!["B1", "B2"]);
}

#[test]
fn test_website_filter() {
    let library = LibraryBuilder::new()
        .with_show(released_show("HIDIVE", "A", &[1, 2]))
        .with_show(released_show("Netflix", "B", &[1, 2]))
        .build();
    let options = PlaylistOptions {
        websites: vec!["HIDIVE".to_string()],
        ..options()
    };
    assert_eq!(build(&library, None, &options), vec!["A1", "A2"]);
}

#[test]
fn test_skipped_seasons_never_appear() {
    let id = ShowId::new("Test", "Dub");
    let show = Show::new(id.clone(), "Dub")
        .with_season(
            Season::new("sub", "Subbed", Some(1))
                .with_episode(Episode::new("sub1", "", Some(1), at(1), 60))
                .with_episode(Episode::new("sub2", "", Some(2), at(2), 60)),
        )
        .with_season(
            Season::new("dub", "Dubbed", Some(2))
                .with_episode(Episode::new("dub1", "", Some(1), at(3), 60)),
        );
    let mut playlist = Playlist::new("Evening");
    playlist.add_show(id.clone());
    playlist.set_season_skipped(&id, "dub", true);

    let library = LibraryBuilder::new()
        .with_show(show)
        .show("Other", 2)
        .playlist(playlist)
        .build();

    let output = build(&library, Some("Evening"), &options());
    assert_eq!(output, vec!["sub1", "sub2"]);

    let mut rng = rng_for(Some(3));
    for _ in 0..20 {
        let picked = random_episode(&library, Some("Evening"), &mut rng).unwrap().unwrap();
        assert_eq!(picked.season.season_id, "sub");
    }
}

#[test]
fn test_reverse_then_truncate() {
    let library = LibraryBuilder::new().show("A", 3).show("B", 2).build();
    let reversed = PlaylistOptions {
        reverse: true,
        number_of_episodes: 3,
        ..options()
    };
    // Sequenced order is A1 B1 A2 B2 A3
    assert_eq!(build(&library, None, &reversed), vec!["A3", "B2", "A2"]);

    let truncated = PlaylistOptions {
        number_of_episodes: 2,
        ..options()
    };
    assert_eq!(build(&library, None, &truncated), vec!["A1", "B1"]);
}

#[test]
fn test_two_show_strategies_fall_back_with_one_show() {
    let strategies = StrategySet::new(
        ShowOrder::NewestEpisodesFirst,
        EpisodeOrder::Chronological,
        ChangeShow::NewerEpisode,
        Resort::Swap1And2,
    );
    let guarded = guard_two_show_strategies(strategies, 1);
    assert_eq!(guarded.change_show, ChangeShow::default());
    assert_eq!(guarded.resort, Resort::default());
    assert_eq!(guarded.show_order, ShowOrder::NewestEpisodesFirst);
    assert_eq!(guard_two_show_strategies(strategies, 2), strategies);

    let library = LibraryBuilder::new().show("A", 3).build();
    let airing = PlaylistOptions {
        mode: Some("airing_together".to_string()),
        ..PlaylistOptions::default()
    };
    assert_eq!(build(&library, None, &airing), vec!["A1", "A2", "A3"]);
}

#[test]
fn test_reports_strategies_actually_used() {
    let library = LibraryBuilder::new().show("A", 3).build();
    let airing = PlaylistOptions {
        mode: Some("airing_together".to_string()),
        ..PlaylistOptions::default()
    };
    let sorted = sorted_episodes(&library, None, &airing).unwrap();
    assert_eq!(sorted.strategies.show_order, ShowOrder::NewestEpisodesFirst);
    assert_eq!(sorted.strategies.change_show, ChangeShow::AfterEveryEpisode);
    assert_eq!(sorted.strategies.resort, Resort::Rotate);
    assert_ne!(sorted.strategies, resolve_strategies(&airing));

    let two_shows = LibraryBuilder::new().show("A", 2).show("B", 2).build();
    let sorted = sorted_episodes(&two_shows, None, &airing).unwrap();
    assert_eq!(sorted.strategies, resolve_strategies(&airing));
}

#[test]
fn test_airing_together_mode() {
    let library = LibraryBuilder::new()
        .with_show(released_show("Test", "Old", &[1, 2]))
        .with_show(released_show("Test", "New", &[10, 11]))
        .build();
    let options = PlaylistOptions {
        mode: Some("airing_together".to_string()),
        ..PlaylistOptions::default()
    };
    assert_eq!(build(&library, None, &options), vec!["New1", "New2", "Old1", "Old2"]);
}

#[test]
fn test_seeded_playlists_are_reproducible() {
    let library = LibraryBuilder::new().show("A", 6).show("B", 6).show("C", 6).build();
    let options = PlaylistOptions {
        mode: Some("round_robin".to_string()),
        seed: Some(99),
        ..PlaylistOptions::default()
    };
    let first = build(&library, None, &options);
    assert_eq!(first.len(), 18);
    assert_eq!(first, build(&library, None, &options));
}

#[test]
fn test_random_episode_of_empty_playlist() {
    let library = LibraryBuilder::new()
        .show("A", 2)
        .playlist(Playlist::new("Empty"))
        .build();
    let mut rng = rng_for(Some(5));
    assert!(random_episode(&library, Some("Empty"), &mut rng).unwrap().is_none());
    assert!(random_episode(&library, None, &mut rng).unwrap().is_some());
}
