//! Chart reconciliation, filtering and ranking.
//!
//! Every function here is a pure computation over immutable snapshots. Static
//! lookup data (tag index, rating thresholds, song catalog) is passed in by the
//! caller on each call.

pub mod filter;
pub mod flags;
pub mod pipeline;
pub mod rank;
pub mod rating;
pub mod tags;
pub mod unplayed;

pub use filter::{filter_played, filter_unplayed, matches};
pub use flags::decode_flags;
pub use pipeline::{ChartView, chart_view, process, rank_charts};
pub use rank::{rank, select, sort_entries, to_renderable};
pub use rating::RatingThresholds;
pub use tags::TagIndex;
pub use unplayed::{collapse_unplayed, derive_unplayed};
