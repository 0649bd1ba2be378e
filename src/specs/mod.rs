// src/specs/mod.rs
//! # Feed “specs” module
//!
//! Each spec knows *where the ground truth lives* in one remote document and
//! how to lift it into plain Rust values.
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched documents (`serde_json::Value`).
//! - **Named failures**: a missing key reports its full dotted path, e.g.
//!   `result.pageContext.postsData.characters.edges[4].node.slug`.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **image fetching** (`scrape`).
//! - **Persistence** (`store`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::collect_characters → core::net::Fetch::fetch_json
//!                                         → specs::characters::parse_feed
//!                                         → Fetch::fetch_bytes per headshot
//!             → store::Store::write_all
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline `serde_json::json!` fixtures.
pub mod characters;

pub use characters::{CharacterEntry, parse_feed};
