// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::options::RunOptions,
    core::net::{Fetch, HttpFetcher},
    error::Result,
    progress::Progress,
    roster::Character,
    scrape,
    store::Store,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub db_path: PathBuf,
    pub written: usize,
    pub killers: usize,
    pub survivors: usize,
}

/// Top-level runner: collect everything, then persist in one batch.
/// The store is only opened once collection has fully succeeded.
pub fn run(
    options: &RunOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let roster = scrape::collect_characters(fetcher, &options.scrape, progress)?;
    let (killers, survivors) = (roster.killer_count(), roster.survivor_count());

    logf!("Store: Opening {}", options.db_path.display());
    let mut store = Store::open(&options.db_path)?;
    store.ensure_schema()?;
    let written = store.write_all(roster.characters())?;

    Ok(RunSummary {
        db_path: options.db_path.clone(),
        written,
        killers,
        survivors,
    })
}

/// `run` with the real HTTP client built from `options.fetch`.
pub fn run_http(options: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(options.fetch.clone());
    run(options, &fetcher, progress)
}

/// Everything already stored in `db_path`. A missing file is an error,
/// not a new empty database.
pub fn list(db_path: &Path) -> Result<Vec<Character>> {
    let store = Store::open_existing(db_path)?;
    store.load_all()
}
