// tests/pipeline.rs
//
// End-to-end runs of the runner against an in-memory fetcher and a temp SQLite file.
//
use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::{json, Value};

use dbd_scrape::config::options::RunOptions;
use dbd_scrape::core::{image, net::Fetch};
use dbd_scrape::progress::RecordingProgress;
use dbd_scrape::runner;
use dbd_scrape::store::Store;
use dbd_scrape::{Result, ScrapeError};

const FEED: &str = "https://feed.test/page-data.json";

#[derive(Default)]
struct StubFetcher {
    json: HashMap<String, Value>,
    bytes: HashMap<String, Vec<u8>>,
}

impl Fetch for StubFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        self.json.get(url).cloned().ok_or_else(|| ScrapeError::network(url, "connection refused"))
    }
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.bytes.get(url).cloned().ok_or_else(|| ScrapeError::network(url, "connection refused"))
    }
}

struct Node<'a> {
    id: &'a str,
    role: &'a str,
    description: Option<&'a str>,
}

fn stub(nodes: &[Node<'_>]) -> StubFetcher {
    let mut f = StubFetcher::default();
    let edges: Vec<Value> = nodes
        .iter()
        .map(|n| {
            let url = format!("https://img.test/{}.png", n.id);
            // distinct, non-UTF-8 bytes per character
            let mut png = vec![0x89, b'P', b'N', b'G', 0xff, 0x00];
            png.extend_from_slice(n.id.as_bytes());
            f.bytes.insert(url.clone(), png);
            json!({ "node": {
                "id": n.id,
                "title": format!("Title {}", n.id),
                "slug": format!("slug-{}", n.id),
                "role": n.role,
                "difficulty": "intermediate",
                "inclusion": "dlc",
                "description": n.description,
                "releaseDate": "2019-12-03",
                "headshot": { "url": url }
            }})
        })
        .collect();
    f.json.insert(
        FEED.to_string(),
        json!({ "result": { "pageContext": { "postsData": { "characters": { "edges": edges } } } } }),
    );
    f
}

fn options(dir: &tempfile::TempDir) -> RunOptions {
    RunOptions::default()
        .with_feed_url(FEED)
        .with_db_path(dir.path().join("characters.db"))
}

fn db_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("characters.db")
}

#[test]
fn persists_every_character_in_feed_order() {
    let dir = tempfile::tempdir().unwrap();
    let f = stub(&[
        Node { id: "k1", role: "killer", description: Some("The Trapper") },
        Node { id: "s1", role: "survivor", description: None },
        Node { id: "x1", role: "mystery", description: Some("") },
        Node { id: "k2", role: "killer", description: Some("  verbatim  ") },
    ]);

    let mut prog = RecordingProgress::default();
    let summary = runner::run(&options(&dir), &f, Some(&mut prog)).unwrap();
    assert_eq!(summary.written, 4);
    assert_eq!(summary.killers, 2);
    assert_eq!(summary.survivors, 2);
    assert_eq!(summary.db_path, db_path(&dir));
    assert_eq!(prog.done, vec!["k1", "s1", "x1", "k2"]);

    let rows = runner::list(&db_path(&dir)).unwrap();
    let ids: Vec<_> = rows.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["k1", "s1", "x1", "k2"]);

    assert_eq!(rows[0].name, "Title k1");
    assert_eq!(rows[0].slug, "slug-k1");
    assert_eq!(rows[0].release_date, "2019-12-03");
    assert_eq!(rows[0].description, "The Trapper");
    assert_eq!(rows[1].description, "");
    assert_eq!(rows[3].description, "  verbatim  ");
    // role stored as given, even when it's neither killer nor survivor
    assert_eq!(rows[2].role, "mystery");

    let png = image::from_base64(&rows[0].image_data).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    assert!(png.ends_with(b"k1"));
}

#[test]
fn empty_feed_still_creates_table() {
    let dir = tempfile::tempdir().unwrap();
    let f = stub(&[]);

    let summary = runner::run(&options(&dir), &f, None).unwrap();
    assert_eq!(summary.written, 0);

    let store = Store::open(db_path(&dir)).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn failed_headshot_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut f = stub(&[
        Node { id: "a", role: "killer", description: None },
        Node { id: "b", role: "survivor", description: None },
        Node { id: "c", role: "survivor", description: None },
    ]);
    f.bytes.remove("https://img.test/c.png");

    let err = runner::run(&options(&dir), &f, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Network { .. }));
    // the store is never opened, so not even the file exists
    assert!(!db_path(&dir).exists());
}

#[test]
fn failed_headshot_with_workers_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut f = stub(&[
        Node { id: "a", role: "killer", description: None },
        Node { id: "b", role: "survivor", description: None },
        Node { id: "c", role: "survivor", description: None },
    ]);
    f.bytes.remove("https://img.test/a.png");

    let mut opts = options(&dir);
    opts.scrape.workers = 3;
    assert!(runner::run(&opts, &f, None).is_err());
    assert!(!db_path(&dir).exists());
}

#[test]
fn schema_error_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut f = StubFetcher::default();
    f.json.insert(FEED.to_string(), json!({ "result": { "pageContext": { "postsData": {} } } }));

    let err = runner::run(&options(&dir), &f, None).unwrap_err();
    match err {
        ScrapeError::Schema { path } => assert_eq!(path, "result.pageContext.postsData.characters"),
        other => panic!("expected schema error, got {other:?}"),
    }
    assert!(!db_path(&dir).exists());
}

#[test]
fn second_run_with_known_id_is_a_constraint_error() {
    let dir = tempfile::tempdir().unwrap();
    let first = stub(&[Node { id: "a", role: "killer", description: Some("original") }]);
    runner::run(&options(&dir), &first, None).unwrap();

    let second = stub(&[
        Node { id: "b", role: "survivor", description: None },
        Node { id: "a", role: "survivor", description: Some("overwritten?") },
    ]);
    let err = runner::run(&options(&dir), &second, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Constraint { ref id } if id == "a"));

    let rows = runner::list(&db_path(&dir)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "a");
    assert_eq!(rows[0].description, "original");
    assert_eq!(rows[0].role, "killer");
}

#[test]
fn roster_views_partition_the_feed() {
    let f = stub(&[
        Node { id: "1", role: "killer", description: None },
        Node { id: "2", role: "survivor", description: None },
        Node { id: "3", role: "KILLER", description: None },
        Node { id: "4", role: "", description: None },
        Node { id: "5", role: "killer", description: None },
    ]);
    let opts = RunOptions::default().with_feed_url(FEED);
    let roster = dbd_scrape::scrape::collect_characters(&f, &opts.scrape, None).unwrap();

    let killers: Vec<_> = roster.killers().map(|c| c.id.as_str()).collect();
    let survivors: Vec<_> = roster.survivors().map(|c| c.id.as_str()).collect();
    assert_eq!(killers, vec!["1", "5"]);
    assert_eq!(survivors, vec!["2", "3", "4"]);
    assert_eq!(killers.len() + survivors.len(), roster.len());
    assert!(killers.iter().all(|k| !survivors.contains(k)));
}

#[test]
fn listing_a_missing_database_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let typo = dir.path().join("typo.db");

    assert!(matches!(runner::list(&typo), Err(ScrapeError::Storage(_))));
    assert!(!typo.exists());
}
