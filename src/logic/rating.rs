//! Star control mapping for the score range filter.
//!
//! The "less than" and "at least" star controls can only express a cut at one
//! of the rating thresholds. Stars 0 and 1 are reserved, so star `n` maps to
//! threshold `n - 2`:
//!
//! - less than star `n`: score range `[0, threshold - 1]`
//! - at least star `n`: score range `[threshold, SCORE_MAX]`
//!
//! The `exact_*` functions go the other way and report which star, if any,
//! the current range corresponds to.

use crate::models::{FilterState, SCORE_MAX};
use serde::{Deserialize, Serialize};

/// Stars below this index are not selectable.
const FIRST_SELECTABLE_STAR: u8 = 2;

/// Ascending score values delimiting star boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingThresholds(Vec<u32>);

impl RatingThresholds {
    pub fn new(thresholds: Vec<u32>) -> Self {
        Self(thresholds)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    fn star_for(&self, score: u32) -> Option<u8> {
        let index = self.0.iter().position(|&threshold| threshold == score)?;
        u8::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(FIRST_SELECTABLE_STAR))
    }

    fn threshold_for(&self, star: u8) -> Option<u32> {
        let index = star.checked_sub(FIRST_SELECTABLE_STAR)?;
        self.0.get(usize::from(index)).copied()
    }

    /// Star matching a `[0, threshold - 1]` range, if the range is exactly that.
    pub fn exact_low_stars(&self, range: [u32; 2]) -> Option<u8> {
        let [low, high] = range;
        if low != 0 {
            return None;
        }
        self.star_for(high.checked_add(1)?)
    }

    /// Star matching a `[threshold, SCORE_MAX]` range, if the range is exactly that.
    pub fn exact_high_stars(&self, range: [u32; 2]) -> Option<u8> {
        let [low, high] = range;
        if high != SCORE_MAX {
            return None;
        }
        self.star_for(low)
    }

    /// Range selected by clicking "less than" star `star`. Reserved stars select nothing.
    pub fn low_star_range(&self, star: u8) -> Option<[u32; 2]> {
        let threshold = self.threshold_for(star)?;
        Some([0, threshold.checked_sub(1)?])
    }

    /// Range selected by clicking "at least" star `star`. Reserved stars select nothing.
    pub fn high_star_range(&self, star: u8) -> Option<[u32; 2]> {
        let threshold = self.threshold_for(star)?;
        Some([threshold, SCORE_MAX])
    }

    /// Applies a "less than" star click to the filter. Returns false on a no-op.
    pub fn apply_low_star(&self, filter: &mut FilterState, star: u8) -> bool {
        match self.low_star_range(star) {
            Some(range) => {
                filter.score_range = range;
                true
            }
            None => false,
        }
    }

    /// Applies an "at least" star click to the filter. Returns false on a no-op.
    pub fn apply_high_star(&self, filter: &mut FilterState, star: u8) -> bool {
        match self.high_star_range(star) {
            Some(range) => {
                filter.score_range = range;
                true
            }
            None => false,
        }
    }
}
