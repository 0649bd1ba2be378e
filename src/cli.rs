// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{DEFAULT_DB_FILE, DEFAULT_WORKERS, FEED_URL};
use crate::config::options::RunOptions;
use crate::progress::Progress;
use crate::runner;

/// Scrape the Dead by Daylight character roster into SQLite.
/// With no arguments: default feed, written to `db.db`.
#[derive(Debug, Parser)]
#[command(name = "dbd_scrape", version, about)]
pub struct Args {
    /// Page-data feed to read characters from
    #[arg(long, value_name = "URL", default_value = FEED_URL)]
    pub feed_url: String,

    /// SQLite file to write (created if missing)
    #[arg(short = 'o', long = "db", value_name = "PATH", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Headshot fetch workers (1 = sequential)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Extra request header, `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Proxy for all requests
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print stored characters as JSON lines and exit
    #[arg(long)]
    pub list: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> Result<RunOptions, String> {
        let mut opts = RunOptions::default()
            .with_feed_url(self.feed_url.clone())
            .with_db_path(&self.db);

        opts.scrape.workers = self.workers;
        for line in &self.headers {
            opts.fetch.push_header_line(line)?;
        }
        opts.fetch.proxy = self.proxy.clone();
        opts.fetch.timeout = self.timeout.map(Duration::from_secs);
        Ok(opts)
    }
}

/// Progress lines on stderr.
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for CliProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Found {total} characters");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _id: &str, name: &str) {
        self.done += 1;
        eprintln!("Fetched {} ({}/{})", name, self.done, self.total);
    }
    fn item_failed(&mut self, id: &str, name: &str) {
        eprintln!("Failed {name} [{id}]");
    }
    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Fetch complete ({}/{})", self.done, self.total);
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    if args.list {
        let out = io::stdout();
        let mut out = out.lock();
        for c in runner::list(&args.db)? {
            serde_json::to_writer(&mut out, &c)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let opts = args.to_options().map_err(color_eyre::eyre::Report::msg)?;
    let mut prog = CliProgress::new();
    let summary = runner::run_http(&opts, Some(&mut prog))?;

    println!(
        "Wrote {} characters ({} killers, {} survivors) to {}",
        summary.written,
        summary.killers,
        summary.survivors,
        summary.db_path.display()
    );
    Ok(())
}
