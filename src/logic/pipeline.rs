//! End-to-end pass from raw score sets to display rows.

use super::filter::{filter_played, filter_unplayed};
use super::rank::rank;
use super::tags::TagIndex;
use super::unplayed::derive_unplayed;
use crate::error::LookupError;
use crate::models::{
    DifficultyName, FilterState, PlayedResult, RenderableEntry, SongCatalog, UnplayedChart,
};

/// What the score list should show for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartView {
    /// Some input has not arrived yet.
    Loading,
    /// Everything was filtered out.
    Empty,
    Entries(Vec<RenderableEntry>),
}

/// Filters and ranks the player's results together with an already derived unplayed set.
pub fn rank_charts(
    played: &[PlayedResult],
    unplayed: &[UnplayedChart],
    filter: &FilterState,
    songs: &SongCatalog,
    tags: &TagIndex,
    tab: DifficultyName,
) -> Result<Vec<RenderableEntry>, LookupError> {
    let played_kept = filter_played(played, filter, tags);
    let unplayed_kept = filter_unplayed(unplayed, filter, tags);
    log::trace!(
        "BOARD: filter kept {}/{} played and {}/{} unplayed",
        played_kept.len(),
        played.len(),
        unplayed_kept.len(),
        unplayed.len()
    );

    rank(played_kept, unplayed_kept, filter, songs, tab).inspect_err(|err| {
        log::warn!("BOARD: ranking aborted: {}", err);
    })
}

/// Derives unplayed charts from `others`, then filters and ranks everything.
pub fn process(
    played: &[PlayedResult],
    others: &[PlayedResult],
    filter: &FilterState,
    songs: &SongCatalog,
    tags: &TagIndex,
    tab: DifficultyName,
) -> Result<Vec<RenderableEntry>, LookupError> {
    let unplayed = derive_unplayed(played, others);
    rank_charts(played, &unplayed, filter, songs, tags, tab)
}

/// Runs the pipeline only once the catalog and both score sets are present.
pub fn chart_view(
    songs: Option<&SongCatalog>,
    played: Option<&[PlayedResult]>,
    others: Option<&[PlayedResult]>,
    filter: &FilterState,
    tags: &TagIndex,
    tab: DifficultyName,
) -> Result<ChartView, LookupError> {
    let (Some(songs), Some(played), Some(others)) = (songs, played, others) else {
        return Ok(ChartView::Loading);
    };

    let entries = process(played, others, filter, songs, tags, tab)?;
    if entries.is_empty() {
        Ok(ChartView::Empty)
    } else {
        Ok(ChartView::Entries(entries))
    }
}
