//! Command line front end: runs the score pipeline over an exported snapshot.

use chartboard::config::{self, BoardConfig};
use chartboard::models::{DifficultyName, FilterState, PlayedResult, RenderableEntry, Song};
use chartboard::{ConfigError, LookupError, SongCatalog, collapse_unplayed, derive_unplayed};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "chartboard", version, about = "Browse a player's scores and unplayed charts")]
struct Args {
    /// JSON snapshot with `songs`, `played` and `others` arrays.
    #[arg(long)]
    snapshot: PathBuf,

    /// Static data: rating thresholds and tag index.
    #[arg(long, default_value = "board.toml")]
    config: PathBuf,

    /// Saved filter. The reset filter is used when the file does not exist.
    #[arg(long)]
    filter: Option<PathBuf>,

    /// Difficulty tab the snapshot was exported for.
    #[arg(long, default_value = "beginner")]
    tab: DifficultyName,

    /// Apply a "less than" star selection to the score range.
    #[arg(long, conflicts_with = "at_least_star")]
    less_than_star: Option<u8>,

    /// Apply an "at least" star selection to the score range.
    #[arg(long)]
    at_least_star: Option<u8>,

    /// Write the effective filter back to the filter file.
    #[arg(long, requires = "filter")]
    save_filter: bool,

    /// Show one unplayed row per chart instead of one per other player's result.
    #[arg(long)]
    distinct_unplayed: bool,

    /// Print rows as JSON instead of text cards.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    songs: Vec<Song>,
    played: Vec<PlayedResult>,
    #[serde(default)]
    others: Vec<PlayedResult>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read snapshot {path:?}: {source}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("failed to encode rows: {0}")]
    Output(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

fn load_snapshot(path: &Path) -> Result<Snapshot, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn effective_filter(args: &Args, board: &BoardConfig) -> Result<FilterState, CliError> {
    let mut filter = match &args.filter {
        Some(path) => config::load_filter(path)?,
        None => FilterState::default(),
    };

    if let Some(star) = args.less_than_star
        && !board.ratings.apply_low_star(&mut filter, star)
    {
        log::warn!("MAIN: star {} does not select a score range", star);
    }
    if let Some(star) = args.at_least_star
        && !board.ratings.apply_high_star(&mut filter, star)
    {
        log::warn!("MAIN: star {} does not select a score range", star);
    }

    if args.save_filter
        && let Some(path) = &args.filter
    {
        config::save_filter(path, &filter)?;
    }
    Ok(filter)
}

fn card_line(entry: &RenderableEntry, songs: &SongCatalog) -> String {
    let title = songs.title(entry.song_id).unwrap_or("No song found");
    let cleared = if entry.flags.cleared { "" } else { " (not cleared)" };
    format!(
        "{} {:<2}  {}  {}{}  {}",
        entry.difficulty_name.label(),
        entry.difficulty,
        title,
        entry.score,
        cleared,
        entry.username.as_deref().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

fn run(args: &Args) -> Result<(), CliError> {
    let board = BoardConfig::load(&args.config)?;
    let filter = effective_filter(args, &board)?;
    let snapshot = load_snapshot(&args.snapshot)?;
    let songs = SongCatalog::from(snapshot.songs);

    log::info!(
        "MAIN: {} songs, {} played, {} by others on {}",
        songs.len(),
        snapshot.played.len(),
        snapshot.others.len(),
        args.tab
    );

    let mut unplayed = derive_unplayed(&snapshot.played, &snapshot.others);
    if args.distinct_unplayed {
        unplayed = collapse_unplayed(unplayed);
    }
    let entries = chartboard::rank_charts(
        &snapshot.played,
        &unplayed,
        &filter,
        &songs,
        &board.tags,
        args.tab,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries).map_err(CliError::Output)?);
    } else if entries.is_empty() {
        println!("No scores found.");
    } else {
        for entry in &entries {
            println!("{}", card_line(entry, &songs));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("MAIN: {}", err);
            ExitCode::FAILURE
        }
    }
}
