use crate::error::{GalleryError, Result};
use crate::gallery::GalleryIndex;
use crate::index::{index_records, DisplayIndex, DisplayRecord};
use crate::store::KeyValueStore;

pub fn indexed_records<S: KeyValueStore>(gallery: &GalleryIndex<S>) -> Vec<DisplayRecord> {
    index_records(gallery.records().to_vec())
}

/// Map user-facing positions to record ids against the canonical listing.
pub fn resolve_indexes<S: KeyValueStore>(
    gallery: &GalleryIndex<S>,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, String)>> {
    let indexed = indexed_records(gallery);

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dr| &dr.index == idx)
                .map(|dr| (idx.clone(), dr.record.id.clone()))
                .ok_or_else(|| GalleryError::Api(format!("Index {} not found in gallery", idx)))
        })
        .collect()
}
