use chartboard::models::{FlagData, NO_SCORE};
use chartboard::{
    ClearStatus, DifficultyName, FilterState, LookupError, PlayStatus, PlayedResult,
    RatingThresholds, RenderableEntry, Song, SongCatalog, SortKey, TagIndex, derive_unplayed,
    process,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

const TAB: DifficultyName = DifficultyName::Hard;

fn scenario_songs() -> SongCatalog {
    SongCatalog::from(vec![Song::new(1, "Song One"), Song::new(2, "Song Two")])
}

fn scenario_played() -> Vec<PlayedResult> {
    vec![PlayedResult {
        username: "me".into(),
        ..PlayedResult::new(100, 1, 1, 10, 50_000, 1)
    }]
}

fn scenario_others() -> Vec<PlayedResult> {
    vec![
        PlayedResult {
            username: "them".into(),
            ..PlayedResult::new(200, 2, 1, 10, 80_000, 1)
        },
        PlayedResult {
            username: "them".into(),
            ..PlayedResult::new(201, 2, 2, 5, 30_000, 0)
        },
    ]
}

fn run(filter: &FilterState) -> Result<Vec<RenderableEntry>, LookupError> {
    process(
        &scenario_played(),
        &scenario_others(),
        filter,
        &scenario_songs(),
        &TagIndex::default(),
        TAB,
    )
}

fn played_row() -> RenderableEntry {
    RenderableEntry {
        id: 100,
        song_id: 1,
        score: "50000".into(),
        difficulty: 10,
        difficulty_name: TAB,
        flags: FlagData { cleared: true },
        username: Some("me".into()),
    }
}

fn unplayed_row() -> RenderableEntry {
    RenderableEntry {
        id: 201,
        song_id: 2,
        score: NO_SCORE.into(),
        difficulty: 5,
        difficulty_name: TAB,
        flags: FlagData { cleared: false },
        username: None,
    }
}

#[test]
fn default_filter_merges_played_and_unplayed_by_difficulty() {
    let rows = run(&FilterState::default()).unwrap();
    assert_eq!(rows, vec![unplayed_row(), played_row()]);
}

#[test]
fn score_ceiling_drops_played_but_keeps_unplayed() {
    let filter = FilterState {
        score_range: [0, 49_999],
        ..FilterState::default()
    };
    assert_eq!(run(&filter).unwrap(), vec![unplayed_row()]);
}

#[test]
fn cleared_filter_never_keeps_unplayed() {
    let filter = FilterState {
        clear_status: ClearStatus::Cleared,
        ..FilterState::default()
    };
    assert_eq!(run(&filter).unwrap(), vec![played_row()]);
}

#[test]
fn star_lookup_matches_threshold_cut() {
    let ratings = RatingThresholds::new(vec![10_000, 30_000, 60_000]);
    assert_eq!(ratings.exact_low_stars([0, 29_999]), Some(3));
    assert_eq!(ratings.exact_low_stars([0, 15_000]), None);
}

#[test]
fn score_ties_fall_back_to_ascending_title() {
    let songs = SongCatalog::from(vec![Song::new(1, "B-song"), Song::new(2, "A-song")]);
    let others = vec![
        PlayedResult::new(1, 9, 1, 4, 10_000, 0),
        PlayedResult::new(2, 9, 2, 4, 20_000, 0),
    ];
    let filter = FilterState {
        primary: SortKey::Score,
        primary_asc: false,
        secondary: SortKey::Title,
        secondary_asc: true,
        ..FilterState::default()
    };

    let rows = process(&[], &others, &filter, &songs, &TagIndex::default(), TAB).unwrap();
    let order: Vec<_> = rows.iter().map(|row| row.song_id).collect();
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn tags_restrict_both_populations() {
    let tags = TagIndex::from_iter([("Boss", vec![2])]);
    let mut filter = FilterState::default();
    filter.tags.insert("Boss".to_string());

    let rows = process(
        &scenario_played(),
        &scenario_others(),
        &filter,
        &scenario_songs(),
        &tags,
        TAB,
    )
    .unwrap();
    assert_eq!(rows, vec![unplayed_row()]);
}

#[test]
fn missing_title_aborts_the_pass() {
    let songs = SongCatalog::from(vec![Song::new(1, "Song One")]);
    let result = process(
        &scenario_played(),
        &scenario_others(),
        &FilterState::default(),
        &songs,
        &TagIndex::default(),
        TAB,
    );
    assert_eq!(
        result,
        Err(LookupError::MissingSong {
            song_id: 2,
            entry_id: 201
        })
    );
}

const SONG_IDS: std::ops::RangeInclusive<u32> = 1..=5;

fn catalog() -> SongCatalog {
    SONG_IDS
        .map(|id| Song::new(id, format!("Song {}", (b'A' + id as u8) as char)))
        .collect()
}

fn results(first_id: u32, gamer_id: u32) -> impl Strategy<Value = Vec<PlayedResult>> {
    prop::collection::vec((SONG_IDS, 1u8..=6, 0u32..=100_000, 0u32..4), 0..12).prop_map(
        move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (song_id, difficulty, score, flags))| PlayedResult {
                    username: format!("gamer{}", gamer_id),
                    ..PlayedResult::new(first_id + i as u32, gamer_id, song_id, difficulty, score, flags)
                })
                .collect()
        },
    )
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::Title), Just(SortKey::Score), Just(SortKey::Difficulty)]
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        (0u32..=100_000, 0u32..=100_000),
        (1u8..=6, 1u8..=6),
        prop_oneof![
            Just(PlayStatus::All),
            Just(PlayStatus::Played),
            Just(PlayStatus::Unplayed)
        ],
        prop_oneof![
            Just(ClearStatus::All),
            Just(ClearStatus::Cleared),
            Just(ClearStatus::Failed)
        ],
        sort_key(),
        sort_key(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |((a, b), (c, d), play_status, clear_status, primary, secondary, primary_asc, secondary_asc)| {
                let mut filter = FilterState {
                    score_range: [a.min(b), a.max(b)],
                    difficulty_range: [c.min(d), c.max(d)],
                    play_status,
                    clear_status,
                    primary_asc,
                    secondary_asc,
                    ..FilterState::default()
                };
                filter.set_primary(primary);
                filter.set_secondary(secondary);
                filter
            },
        )
}

proptest! {
    #[test]
    fn repeated_runs_are_identical(
        played in results(1, 1),
        others in results(1_000, 2),
        filter in filter_state(),
    ) {
        let songs = catalog();
        let tags = TagIndex::default();
        let first = process(&played, &others, &filter, &songs, &tags, TAB);
        let second = process(&played, &others, &filter, &songs, &tags, TAB);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn view_modes_are_exclusive(
        played in results(1, 1),
        others in results(1_000, 2),
        filter in filter_state(),
    ) {
        let rows = process(&played, &others, &filter, &catalog(), &TagIndex::default(), TAB).unwrap();
        match filter.play_status {
            PlayStatus::Played => prop_assert!(rows.iter().all(|row| row.username.is_some())),
            PlayStatus::Unplayed => prop_assert!(rows.iter().all(|row| row.username.is_none())),
            PlayStatus::All => {}
        }
    }

    #[test]
    fn unplayed_rows_are_synthesized(
        played in results(1, 1),
        others in results(1_000, 2),
        filter in filter_state(),
    ) {
        let rows = process(&played, &others, &filter, &catalog(), &TagIndex::default(), TAB).unwrap();
        for row in rows.iter().filter(|row| row.username.is_none()) {
            prop_assert_eq!(row.score.as_str(), NO_SCORE);
            prop_assert_eq!(row.flags, FlagData { cleared: false });
            prop_assert!(row.id >= 1_000);
        }
    }

    #[test]
    fn one_unplayed_row_per_qualifying_result(
        played in results(1, 1),
        others in results(1_000, 2),
    ) {
        let played_charts: HashSet<_> = played.iter().map(PlayedResult::chart_key).collect();
        let expected: Vec<_> = others
            .iter()
            .filter(|result| !played_charts.contains(&result.chart_key()))
            .map(|result| (result.id, result.chart_key()))
            .collect();

        let derived: Vec<_> = derive_unplayed(&played, &others)
            .iter()
            .map(|chart| (chart.id, chart.chart_key()))
            .collect();
        prop_assert_eq!(derived, expected);
    }

    #[test]
    fn equal_keys_keep_played_then_unplayed_order(
        scores in prop::collection::vec(0u32..=100_000, 0..8),
        other_count in 0usize..8,
        difficulty in 1u8..=27,
    ) {
        // Both songs share a title, so Title and Difficulty tie for every row.
        let songs = SongCatalog::from(vec![Song::new(1, "Twin"), Song::new(2, "Twin")]);
        let played: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| PlayedResult::new(i as u32, 1, 1, difficulty, score, 1))
            .collect();
        let others: Vec<_> = (0..other_count)
            .map(|i| PlayedResult::new(500 + i as u32, 2, 2, difficulty, 42, 0))
            .collect();
        let filter = FilterState {
            primary: SortKey::Title,
            primary_asc: false,
            secondary: SortKey::Difficulty,
            ..FilterState::default()
        };

        let rows = process(&played, &others, &filter, &songs, &TagIndex::default(), TAB).unwrap();
        let ids: Vec<u32> = rows.iter().map(|row| row.id).collect();
        let expected: Vec<u32> = played.iter().chain(&others).map(|result| result.id).collect();
        prop_assert_eq!(ids, expected);
    }
}
