//! Value types consumed and produced by the engine.

pub mod api;
pub mod difficulty;
pub mod entry;
pub mod filter;
pub mod score;
pub mod song;

pub use api::{ScoreQuery, ScoresResponse, SongsResponse, User, UsersResponse};
pub use difficulty::{DifficultyName, UnknownDifficulty};
pub use entry::{FlagData, NO_SCORE, RenderableEntry};
pub use filter::{
    ClearStatus, DIFFICULTY_MAX, DIFFICULTY_MIN, FilterState, PlayStatus, SCORE_MAX,
    SortKey,
};
pub use score::{ChartEntry, ChartKey, Judgements, PlayedResult, UnplayedChart};
pub use song::{Song, SongCatalog};
