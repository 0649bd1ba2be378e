// src/specs/characters.rs
//! Feed *spec* for Characters.
//!
//! Purpose:
//! - Walk the Gatsby `page-data.json` document down to
//!   `result.pageContext.postsData.characters.edges[].node`.
//! - Lift each node into a flat `CharacterEntry` (text fields + headshot URL).
//!
//! Responsibilities:
//! - Name the exact dotted path of anything missing or mistyped (`ScrapeError::Schema`).
//!
//! Non-Responsibilities:
//! - **No networking.** The caller fetches the document and the headshots.
//! - **No persistence.**

use serde_json::{Map, Value};

use crate::config::consts::FEED_EDGES_PATH;
use crate::error::{Result, ScrapeError};
use crate::roster::Character;

/// One `node` from the feed, before its headshot has been fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub role: String,
    pub difficulty: String,
    pub inclusion: String,
    pub description: String,
    pub release_date: String,
    pub headshot_url: String,
}

impl CharacterEntry {
    /// Attach the encoded headshot and produce the final record.
    pub fn into_character(self, image_data: String) -> Character {
        Character {
            id: self.id,
            name: self.name,
            slug: self.slug,
            role: self.role,
            difficulty: self.difficulty,
            inclusion: self.inclusion,
            description: self.description,
            release_date: self.release_date,
            image_data,
        }
    }
}

/// Parse the whole feed document. Entries come back in feed order.
/// Any missing piece fails the lot; there is no partial result.
pub fn parse_feed(doc: &Value) -> Result<Vec<CharacterEntry>> {
    let mut path = s!();
    let mut cur = doc;
    for key in FEED_EDGES_PATH {
        path = if path.is_empty() { s!(key) } else { dotted!(&path, key) };
        cur = object(cur, &path)?
            .get(key)
            .ok_or_else(|| ScrapeError::schema(&path))?;
    }

    let edges = cur.as_array().ok_or_else(|| ScrapeError::schema(&path))?;

    edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let edge_path = format!("{path}[{i}]");
            let node_path = dotted!(&edge_path, "node");
            let node = object(edge, &edge_path)?
                .get("node")
                .ok_or_else(|| ScrapeError::schema(&node_path))?;
            parse_node(object(node, &node_path)?, &node_path)
        })
        .collect()
}

fn parse_node(node: &Map<String, Value>, path: &str) -> Result<CharacterEntry> {
    let headshot_path = dotted!(path, "headshot");
    let headshot = node
        .get("headshot")
        .ok_or_else(|| ScrapeError::schema(&headshot_path))?;
    let headshot_url = text(object(headshot, &headshot_path)?, "url", &headshot_path)?;

    Ok(CharacterEntry {
        id: text(node, "id", path)?,
        name: text(node, "title", path)?,
        slug: text(node, "slug", path)?,
        role: text(node, "role", path)?,
        difficulty: text(node, "difficulty", path)?,
        inclusion: text(node, "inclusion", path)?,
        description: optional_text(node, "description", path)?,
        release_date: text(node, "releaseDate", path)?,
        headshot_url,
    })
}

fn object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| ScrapeError::schema(path))
}

/// Required scalar. Strings pass through verbatim; numbers and bools are
/// rendered as text. Missing, null, arrays and objects are schema errors.
fn text(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<String> {
    match obj.get(key) {
        Some(v) => scalar(v).ok_or_else(|| ScrapeError::schema(dotted!(parent, key))),
        None => Err(ScrapeError::schema(dotted!(parent, key))),
    }
}

/// Like `text`, but absent or null becomes `""`.
fn optional_text(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(s!()),
        Some(_) => text(obj, key, parent),
    }
}

fn scalar(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
