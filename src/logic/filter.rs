//! Filter predicates over played and unplayed entries.

use super::flags::decode_flags;
use super::tags::TagIndex;
use crate::models::{ChartEntry, ClearStatus, FilterState, PlayedResult, UnplayedChart};

/// Returns true if the entry survives the filter.
///
/// Unplayed charts are judged as score 0 and never cleared, so a raised score
/// floor or a "cleared" selection removes them.
pub fn matches(entry: ChartEntry<'_>, filter: &FilterState, tags: &TagIndex) -> bool {
    if !filter.score_contains(entry.effective_score()) {
        return false;
    }
    if !filter.difficulty_contains(entry.difficulty()) {
        return false;
    }

    let clear_ok = match entry {
        ChartEntry::Played(result) => {
            let cleared = decode_flags(result.flags).cleared;
            match filter.clear_status {
                ClearStatus::All => true,
                ClearStatus::Cleared => cleared,
                ClearStatus::Failed => !cleared,
            }
        }
        ChartEntry::Unplayed(_) => filter.clear_status != ClearStatus::Cleared,
    };
    if !clear_ok {
        return false;
    }

    tags.has_any_tag(&filter.tags, entry.song_id())
}

pub fn filter_played<'a>(
    played: &'a [PlayedResult],
    filter: &FilterState,
    tags: &TagIndex,
) -> Vec<ChartEntry<'a>> {
    played
        .iter()
        .map(ChartEntry::Played)
        .filter(|entry| matches(*entry, filter, tags))
        .collect()
}

pub fn filter_unplayed<'a>(
    unplayed: &'a [UnplayedChart],
    filter: &FilterState,
    tags: &TagIndex,
) -> Vec<ChartEntry<'a>> {
    unplayed
        .iter()
        .map(ChartEntry::Unplayed)
        .filter(|entry| matches(*entry, filter, tags))
        .collect()
}
