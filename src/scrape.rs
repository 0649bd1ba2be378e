// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use crate::{
    config::options::ScrapeOptions,
    config::consts::{ REQUEST_PAUSE_MS, JITTER_MS },
    core::{ image, net::Fetch },
    error::{ Result, ScrapeError },
    progress::{ NullProgress, Progress },
    roster::Roster,
    specs::characters::{ self, CharacterEntry },
};

/// Fetch the feed, then every headshot, and build the roster in feed order.
/// The first failure aborts the whole collection.
pub fn collect_characters(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Roster> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let result = collect(fetcher, scrape, &mut *progress);
    progress.finish();
    result
}

fn collect(fetcher: &dyn Fetch, scrape: &ScrapeOptions, progress: &mut dyn Progress) -> Result<Roster> {
    logf!("Scrape: Fetching feed {}", scrape.feed_url);
    progress.log("Fetching character feed…");

    let doc = fetcher.fetch_json(&scrape.feed_url)?;
    let entries = characters::parse_feed(&doc).inspect_err(|e| loge!("Scrape: {e}"))?;

    let workers = scrape.effective_workers(entries.len());
    logf!("Scrape: {} characters, workers={}", entries.len(), workers);
    progress.begin(entries.len());

    if workers <= 1 {
        fetch_sequential(fetcher, entries, progress)
    } else {
        fetch_pooled(fetcher, entries, workers, progress)
    }
}

/// GET one headshot and encode it.
fn fetch_headshot(fetcher: &dyn Fetch, entry: &CharacterEntry) -> Result<String> {
    logd!("Scrape: headshot {} ← {}", entry.id, entry.headshot_url);
    let bytes = fetcher.fetch_bytes(&entry.headshot_url)?;
    Ok(image::to_base64(&bytes))
}

fn fetch_sequential(
    fetcher: &dyn Fetch,
    entries: Vec<CharacterEntry>,
    progress: &mut dyn Progress,
) -> Result<Roster> {
    let mut roster = Roster::new();

    for entry in entries {
        match fetch_headshot(fetcher, &entry) {
            Ok(image) => {
                let character = entry.into_character(image);
                progress.item_done(&character.id, &character.name);
                roster.push(character);
            }
            Err(e) => {
                loge!("Scrape: {} ({}): {e}", entry.id, entry.name);
                progress.item_failed(&entry.id, &entry.name);
                return Err(e);
            }
        }
    }

    Ok(roster)
}

/// Same result as `fetch_sequential`, with up to `workers` headshots in flight.
/// Workers claim indices from a shared counter; results are put back in feed order.
fn fetch_pooled(
    fetcher: &dyn Fetch,
    entries: Vec<CharacterEntry>,
    workers: usize,
    progress: &mut dyn Progress,
) -> Result<Roster> {
    let n = entries.len();
    let next = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<String>)>();

    let mut images: Vec<Option<String>> = vec![None; n];
    // Earliest failing index wins, so errors are deterministic
    let mut failure: Option<(usize, ScrapeError)> = None;

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (next, abort, entries) = (&next, &abort, &entries);

            scope.spawn(move || {
                loop {
                    if abort.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= n {
                        break;
                    }
                    let result = fetch_headshot(fetcher, &entries[i]);
                    let failed = result.is_err();
                    if tx.send((i, result)).is_err() || failed {
                        break;
                    }
                    let jitter = (i as u64 * 17) % JITTER_MS;
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, result) in res_rx {
            let entry = &entries[i];
            match result {
                Ok(image) => {
                    images[i] = Some(image);
                    progress.item_done(&entry.id, &entry.name);
                }
                Err(e) => {
                    abort.store(true, Ordering::Relaxed);
                    loge!("Scrape: {} ({}): {e}", entry.id, entry.name);
                    progress.item_failed(&entry.id, &entry.name);
                    if failure.as_ref().is_none_or(|(j, _)| i < *j) {
                        failure = Some((i, e));
                    }
                }
            }
        }
    });

    if let Some((_, e)) = failure {
        return Err(e);
    }

    let mut roster = Roster::new();
    for (entry, image) in entries.into_iter().zip(images) {
        match image {
            Some(image) => roster.push(entry.into_character(image)),
            None => {
                // Only reachable if a worker stopped without reporting
                return Err(ScrapeError::network(&entry.headshot_url, "headshot worker ended early"));
            }
        }
    }
    Ok(roster)
}
