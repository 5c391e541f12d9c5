//! Merging of the filtered populations, ordering and normalization.

use super::flags::decode_flags;
use crate::error::LookupError;
use crate::models::{
    ChartEntry, DifficultyName, FilterState, NO_SCORE, PlayStatus, RenderableEntry, SongCatalog,
    SortKey,
};
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct SortItem<'a> {
    entry: ChartEntry<'a>,
    title: Option<&'a str>,
}

/// Root locale collation at tertiary strength: accents and case are secondary
/// to the base letters, lowercase sorts first.
fn title_collator() -> Result<CollatorBorrowed<'static>, LookupError> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(CollatorPreferences::default(), options)
        .map_err(|err| LookupError::Collation(err.to_string()))
}

/// Concatenates the populations selected by the view mode, played rows first.
pub fn select<'a>(
    played: Vec<ChartEntry<'a>>,
    unplayed: Vec<ChartEntry<'a>>,
    status: PlayStatus,
) -> Vec<ChartEntry<'a>> {
    match status {
        PlayStatus::All => {
            let mut all = played;
            all.extend(unplayed);
            all
        }
        PlayStatus::Played => played,
        PlayStatus::Unplayed => unplayed,
    }
}

fn compare_by<'a>(
    key: SortKey,
    collator: Option<&CollatorBorrowed<'_>>,
    a: &SortItem<'a>,
    b: &SortItem<'a>,
) -> Ordering {
    match key {
        SortKey::Title => match (collator, a.title, b.title) {
            // Raw text only separates titles the collator considers identical.
            (Some(collator), Some(left), Some(right)) => collator
                .compare(left, right)
                .then_with(|| left.cmp(right)),
            // Titles are resolved for every item whenever Title is an active key.
            _ => Ordering::Equal,
        },
        SortKey::Difficulty => a.entry.difficulty().cmp(&b.entry.difficulty()),
        SortKey::Score => a.entry.effective_score().cmp(&b.entry.effective_score()),
    }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

/// Stable two-level sort by the filter's primary then secondary key.
pub fn sort_entries<'a>(
    entries: Vec<ChartEntry<'a>>,
    filter: &FilterState,
    songs: &'a SongCatalog,
) -> Result<Vec<ChartEntry<'a>>, LookupError> {
    let needs_titles = filter.primary == SortKey::Title || filter.secondary == SortKey::Title;
    let collator = if needs_titles {
        Some(title_collator()?)
    } else {
        None
    };

    let mut items = entries
        .into_iter()
        .map(|entry| {
            let title = if needs_titles {
                Some(songs.title(entry.song_id()).ok_or(LookupError::MissingSong {
                    song_id: entry.song_id(),
                    entry_id: entry.id(),
                })?)
            } else {
                None
            };
            Ok(SortItem { entry, title })
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    let collator = collator.as_ref();
    items.sort_by(|a, b| {
        directed(compare_by(filter.primary, collator, a, b), filter.primary_asc).then_with(|| {
            directed(
                compare_by(filter.secondary, collator, a, b),
                filter.secondary_asc,
            )
        })
    });

    Ok(items.into_iter().map(|item| item.entry).collect())
}

/// Maps an entry to its display row. `tab` is the active difficulty tab.
pub fn to_renderable(entry: ChartEntry<'_>, tab: DifficultyName) -> RenderableEntry {
    let (score, username) = match entry {
        ChartEntry::Played(result) => (result.score.to_string(), Some(result.username.clone())),
        ChartEntry::Unplayed(_) => (NO_SCORE.to_string(), None),
    };

    RenderableEntry {
        id: entry.id(),
        song_id: entry.song_id(),
        score,
        difficulty: entry.difficulty(),
        // Compatibility shim: the score service labels difficulties inconsistently,
        // so the tab the rows were loaded for wins over the stored label.
        difficulty_name: tab,
        flags: decode_flags(entry.flags()),
        username,
    }
}

/// Merges, sorts and normalizes the filtered populations.
pub fn rank<'a>(
    played: Vec<ChartEntry<'a>>,
    unplayed: Vec<ChartEntry<'a>>,
    filter: &FilterState,
    songs: &'a SongCatalog,
    tab: DifficultyName,
) -> Result<Vec<RenderableEntry>, LookupError> {
    let merged = select(played, unplayed, filter.play_status);
    let sorted = sort_entries(merged, filter, songs)?;
    Ok(sorted
        .into_iter()
        .map(|entry| to_renderable(entry, tab))
        .collect())
}
