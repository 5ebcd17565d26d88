//! Listing positions for the CLI.
//!
//! Record ids are opaque caller-assigned strings (UUIDs in practice), too
//! unwieldy to type. Listings therefore number records newest-first, and
//! per-record commands take those positions. Favorites get a second,
//! `f`-prefixed block at the top of the listing, so a favorite record
//! appears twice: once as `fN` and once under its regular number.

use crate::model::ImageRecord;
use std::str::FromStr;

/// A user-facing position for a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Favorite(usize),
    Regular(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Favorite(i) => write!(f, "f{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('f') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Favorite(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Regular(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub record: ImageRecord,
    pub index: DisplayIndex,
}

/// Assigns canonical display indexes to a list of records.
///
/// Records are ordered newest-first. Favorites appear **twice**: once with a
/// `Favorite` index and once with a `Regular` one, so the regular numbering
/// stays stable whether or not a record is favorited.
pub fn index_records(mut records: Vec<ImageRecord>) -> Vec<DisplayRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut results = Vec::new();

    let mut favorite_idx = 1;
    for record in &records {
        if record.is_favorite {
            results.push(DisplayRecord {
                record: record.clone(),
                index: DisplayIndex::Favorite(favorite_idx),
            });
            favorite_idx += 1;
        }
    }

    let mut regular_idx = 1;
    for record in records {
        results.push(DisplayRecord {
            index: DisplayIndex::Regular(regular_idx),
            record,
        });
        regular_idx += 1;
    }

    results
}
