use crate::commands::CmdResult;
use crate::error::Result;
use crate::gallery::{GalleryFilter, GalleryIndex, KindFilter, SortKey};
use crate::index::{DisplayIndex, DisplayRecord};
use crate::store::KeyValueStore;
use std::collections::HashMap;

use super::helpers::indexed_records;

/// List records matching `filter`.
///
/// The plain listing (no search, no kind filter, newest sort) is the
/// canonical one: a favorites block on top, then every record under its
/// regular number. Any other query lists matches in query order, each
/// carrying its canonical regular number so positions stay valid across
/// differently-sorted listings.
pub fn run<S: KeyValueStore>(
    gallery: &GalleryIndex<S>,
    filter: &GalleryFilter,
) -> Result<CmdResult> {
    let canonical = indexed_records(gallery);

    let blank_search = filter
        .search
        .as_deref()
        .is_none_or(|s| s.trim().is_empty());
    if blank_search && filter.kind == KindFilter::All && filter.sort == SortKey::Newest {
        return Ok(CmdResult::default().with_listed_records(canonical));
    }

    let regular_positions: HashMap<&str, DisplayIndex> = canonical
        .iter()
        .filter(|dr| matches!(dr.index, DisplayIndex::Regular(_)))
        .map(|dr| (dr.record.id.as_str(), dr.index.clone()))
        .collect();

    let listed = gallery
        .query(filter)
        .into_iter()
        .filter_map(|record| {
            let index = regular_positions.get(record.id.as_str())?.clone();
            Some(DisplayRecord { index, record })
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}
