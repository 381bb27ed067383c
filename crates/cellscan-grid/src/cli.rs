//! The `cellscan` command line.
//!
//! Loads a grid, runs one query through the search plugin, renders the grid
//! and formats the outcome.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use cellscan_core::{GridError, GridHandle, GridSettings, SettingsError, SettingsUpdate};
use cellscan_search::SearchMatch;

use crate::grid::Grid;

/// Search a grid for a phrase and show the matching cells.
#[derive(Debug, Parser)]
#[command(name = "cellscan", version)]
pub struct Args {
    /// Phrase to search for (case-insensitive, literal).
    pub phrase: String,

    /// JSON file holding an array of rows.
    #[arg(long, conflicts_with = "sample")]
    pub data: Option<PathBuf>,

    /// Generate spreadsheet sample data of the given size, e.g. `5x5`.
    #[arg(long, value_parser = parse_dimensions, default_value = "5x5")]
    pub sample: (usize, usize),

    /// TOML settings file (`search`, `searchResultClass`, `searchDisablePolicy`).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Class applied to matched cells, overriding the settings.
    #[arg(long)]
    pub class: Option<String>,

    /// Print matches as JSON instead of the rendered grid.
    #[arg(long)]
    pub json: bool,
}

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search is disabled by the settings file")]
    SearchDisabled,
}

/// Parse `ROWSxCOLS`.
pub fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{}'", s))?;
    let rows = rows
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row count '{}': {}", rows, e))?;
    let cols = cols
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column count '{}': {}", cols, e))?;
    Ok((rows, cols))
}

/// Run one search and return the text to print.
pub fn run(args: &Args) -> Result<String, CliError> {
    let settings = match &args.settings {
        Some(path) => {
            let settings = GridSettings::load(path)?;
            if !settings.search {
                return Err(CliError::SearchDisabled);
            }
            settings
        }
        None => GridSettings::default().with_search(true),
    };

    let mut grid = match &args.data {
        Some(path) => Grid::from_json(&std::fs::read_to_string(path)?, settings)?,
        None => Grid::sample(args.sample.0, args.sample.1, settings),
    };
    tracing::info!("Loaded {}x{} grid", grid.row_count(), grid.col_count());

    if let Some(class) = &args.class {
        grid.update_settings(SettingsUpdate::search_result_class(class.clone()));
    }

    let Some(mut search) = grid.search() else {
        return Err(CliError::SearchDisabled);
    };
    let matches = search.query(&args.phrase);
    let class = search.search_result_class();
    tracing::info!("Query '{}' matched {} cells", args.phrase, matches.len());

    if args.json {
        return Ok(serde_json::to_string_pretty(&matches)?);
    }

    grid.render();
    Ok(format_report(&grid, &args.phrase, &matches, &class))
}

/// Matches summary followed by the rendered grid, decorated cells in brackets.
pub fn format_report(grid: &Grid, phrase: &str, matches: &[SearchMatch], class: &str) -> String {
    let mut out = format!("{} match(es) for \"{}\"\n", matches.len(), phrase);
    for m in matches {
        out.push_str(&format!("  ({}, {}) {}\n", m.row, m.col, m.data));
    }
    out.push('\n');

    for row in 0..grid.row_count() {
        let cells: Vec<String> = (0..grid.col_count())
            .filter_map(|col| grid.cell(row, col))
            .map(|cell| {
                if cell.has_class(class) {
                    format!("[{}]", cell.text())
                } else {
                    format!(" {} ", cell.text())
                }
            })
            .collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
    }
    out
}
