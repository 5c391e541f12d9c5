//! Score browser engine for a rhythm game chart catalog.
//!
//! Given a player's results, the results of everyone else on the same
//! difficulty tab and a [`FilterState`], the engine derives the charts the
//! player never attempted, applies the filters to both populations, merges them
//! by view mode and returns a sorted list of [`RenderableEntry`] rows.
//!
//! ```
//! use chartboard::{DifficultyName, FilterState, PlayedResult, Song, SongCatalog, TagIndex};
//!
//! let songs = SongCatalog::from(vec![Song::new(1, "Opening"), Song::new(2, "Finale")]);
//! let mine = vec![PlayedResult::new(10, 1, 1, 10, 50_000, 1)];
//! let others = vec![
//!     PlayedResult::new(20, 2, 1, 10, 70_000, 1),
//!     PlayedResult::new(21, 2, 2, 5, 40_000, 0),
//! ];
//!
//! let rows = chartboard::process(
//!     &mine,
//!     &others,
//!     &FilterState::default(),
//!     &songs,
//!     &TagIndex::default(),
//!     DifficultyName::Hard,
//! )
//! .unwrap();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].score, "No score");
//! assert_eq!(rows[1].score, "50000");
//! ```

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::BoardConfig;
pub use error::{ConfigError, LookupError};
pub use logic::{
    ChartView, RatingThresholds, TagIndex, chart_view, collapse_unplayed, decode_flags,
    derive_unplayed, process, rank_charts,
};
pub use models::{
    ChartEntry, ClearStatus, DifficultyName, FilterState, FlagData, PlayStatus, PlayedResult,
    RenderableEntry, Song, SongCatalog, SortKey, UnplayedChart,
};
