//! Discovery of charts the selected player has not attempted.

use crate::models::{ChartKey, PlayedResult, UnplayedChart};
use std::collections::HashSet;

/// Emits one unplayed row per result in `others` whose chart the player never played.
///
/// Several other players on the same chart each produce their own row, in input order.
pub fn derive_unplayed(played: &[PlayedResult], others: &[PlayedResult]) -> Vec<UnplayedChart> {
    let played_charts: HashSet<ChartKey> = played.iter().map(PlayedResult::chart_key).collect();

    let unplayed: Vec<UnplayedChart> = others
        .iter()
        .filter(|result| !played_charts.contains(&result.chart_key()))
        .map(UnplayedChart::from)
        .collect();

    log::debug!(
        "BOARD: {} unplayed rows from {} results by others ({} charts played)",
        unplayed.len(),
        others.len(),
        played_charts.len()
    );
    unplayed
}

/// Keeps only the first row for each chart.
pub fn collapse_unplayed(unplayed: Vec<UnplayedChart>) -> Vec<UnplayedChart> {
    let mut seen: HashSet<ChartKey> = HashSet::new();
    unplayed
        .into_iter()
        .filter(|chart| seen.insert(chart.chart_key()))
        .collect()
}
