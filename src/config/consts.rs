// src/config/consts.rs

// Net config
pub const FEED_URL: &str = "https://deadbydaylight.com/page-data/news/page-data.json";
pub const USER_AGENT: &str = concat!("dbd_scrape/", env!("CARGO_PKG_VERSION"));

// Feed layout: result.pageContext.postsData.characters.edges[].node
pub const FEED_EDGES_PATH: [&str; 5] = ["result", "pageContext", "postsData", "characters", "edges"];

// Local store
pub const DEFAULT_DB_FILE: &str = "db.db";
pub const TABLE: &str = "characters";

// Concurrency (opt-in; 1 = sequential)
pub const DEFAULT_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
