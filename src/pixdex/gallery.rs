//! The gallery core: an in-memory collection of [`ImageRecord`]s kept in
//! lockstep with a single serialized blob in the key-value store.
//!
//! Mutations are write-through: the new collection is durably written before
//! the operation reports success, and a failed write leaves the in-memory
//! copy exactly as it was. The read path is the opposite — a missing,
//! unreadable, or malformed blob degrades to an empty (or partial)
//! collection and is reported, never fatal.

use crate::error::{GalleryError, Result};
use crate::model::{ImageKind, ImageRecord};
use crate::store::KeyValueStore;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The fixed store key the collection blob lives under, unless configured
/// otherwise.
pub const DEFAULT_COLLECTION_KEY: &str = "images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Favorites,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Favorites => "favorites",
        };
        f.write_str(s)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "favorites" => Ok(SortKey::Favorites),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Kind filter with an `all` sentinel that disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(ImageKind),
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            return Ok(KindFilter::All);
        }
        s.parse::<ImageKind>().map(KindFilter::Only)
    }
}

/// A query against the collection. Plain data; [`GalleryIndex::query`]
/// interprets it without touching persistence.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    pub search: Option<String>,
    pub kind: KindFilter,
    pub sort: SortKey,
}

/// What `load` found. `dropped` counts records quarantined for schema
/// violations (unparseable entry, unknown kind, duplicate id); `error`
/// carries the reason the blob as a whole was unusable, if it was.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub restored: usize,
    pub dropped: usize,
    pub error: Option<String>,
}

/// The authoritative in-memory collection, synchronized with durable storage.
pub struct GalleryIndex<S: KeyValueStore> {
    store: S,
    key: String,
    records: Vec<ImageRecord>,
    loaded: bool,
}

impl<S: KeyValueStore> GalleryIndex<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_COLLECTION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            records: Vec::new(),
            loaded: false,
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read the blob from the store and replace the in-memory collection.
    ///
    /// Never fails: an absent key is an empty gallery, an unreadable store or
    /// undecodable blob degrades to empty, and individually malformed records
    /// are dropped while their neighbors load. The report says what happened.
    pub fn load(&mut self) -> LoadReport {
        self.loaded = true;
        self.records.clear();

        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return LoadReport::default(),
            Err(e) => {
                return LoadReport {
                    error: Some(e.to_string()),
                    ..LoadReport::default()
                }
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(e) => {
                return LoadReport {
                    error: Some(format!("stored collection is not valid JSON: {}", e)),
                    ..LoadReport::default()
                }
            }
        };

        let mut report = LoadReport::default();
        let mut seen: HashSet<String> = HashSet::new();
        for entry in entries {
            match serde_json::from_value::<ImageRecord>(entry) {
                Ok(record) if seen.insert(record.id.clone()) => {
                    self.records.push(record);
                    report.restored += 1;
                }
                // Unparseable entry or a duplicate id: quarantine, keep going.
                _ => report.dropped += 1,
            }
        }
        report
    }

    /// Pure query over the current collection.
    pub fn query(&self, filter: &GalleryFilter) -> Vec<ImageRecord> {
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let mut hits: Vec<ImageRecord> = self
            .records
            .iter()
            .filter(|r| match filter.kind {
                KindFilter::All => true,
                KindFilter::Only(kind) => r.kind == kind,
            })
            .filter(|r| {
                if term.is_empty() {
                    return true;
                }
                r.prompt.to_lowercase().contains(&term)
                    || r.filename
                        .as_deref()
                        .is_some_and(|f| f.to_lowercase().contains(&term))
            })
            .cloned()
            .collect();

        // Vec::sort_by is stable, so equal keys keep their relative order.
        match filter.sort {
            SortKey::Newest => hits.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Oldest => hits.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::Favorites => hits.sort_by(|a, b| {
                b.is_favorite
                    .cmp(&a.is_favorite)
                    .then_with(|| b.created_at.cmp(&a.created_at))
            }),
        }
        hits
    }

    /// Append a pre-formed record and write through.
    pub fn insert(&mut self, record: ImageRecord) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(GalleryError::DuplicateId(record.id));
        }
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Flip `is_favorite` on the matching record and write through.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<ImageRecord> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| GalleryError::RecordNotFound(id.to_string()))?;

        self.records[pos].is_favorite = !self.records[pos].is_favorite;
        if let Err(e) = self.persist() {
            self.records[pos].is_favorite = !self.records[pos].is_favorite;
            return Err(e);
        }
        Ok(self.records[pos].clone())
    }

    /// Remove the matching record and write through. Deleting an absent id is
    /// a no-op (and performs no write); returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        let removed = self.records.remove(pos);
        if let Err(e) = self.persist() {
            self.records.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Rewrite the durable blob from the in-memory collection. The doctor
    /// path uses this to compact out quarantined records after a `load`.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.store.set(&self.key, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{record, ReadOnlyStore, UnavailableStore};
    use crate::store::memory::InMemoryStore;

    fn seeded_gallery() -> GalleryIndex<InMemoryStore> {
        // "1" is the older, plain record; "2" is newer and a favorite.
        let mut gallery = GalleryIndex::new(InMemoryStore::new());
        gallery
            .insert(record("1", "a cat", ImageKind::Generated, 60))
            .unwrap();
        let mut dog = record("2", "a dog", ImageKind::Upscaled, 10);
        dog.is_favorite = true;
        gallery.insert(dog).unwrap();
        gallery
    }

    fn ids(records: &[ImageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_search_and_all_filter_return_everything() {
        let gallery = seeded_gallery();
        for sort in [SortKey::Newest, SortKey::Oldest, SortKey::Favorites] {
            let result = gallery.query(&GalleryFilter {
                search: Some("   ".into()),
                kind: KindFilter::All,
                sort,
            });
            assert_eq!(result.len(), 2);
        }
    }

    #[test]
    fn search_matches_prompt_substring_case_insensitively() {
        let gallery = seeded_gallery();
        let result = gallery.query(&GalleryFilter {
            search: Some("CAT".into()),
            ..GalleryFilter::default()
        });
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn search_matches_filename() {
        let mut gallery = GalleryIndex::new(InMemoryStore::new());
        let r = record("1", "a cove", ImageKind::Generated, 5).with_filename("Sunset-Final.png");
        gallery.insert(r).unwrap();

        let result = gallery.query(&GalleryFilter {
            search: Some("sunset".into()),
            ..GalleryFilter::default()
        });
        assert_eq!(ids(&result), vec!["1"]);

        let miss = gallery.query(&GalleryFilter {
            search: Some("sunrise".into()),
            ..GalleryFilter::default()
        });
        assert!(miss.is_empty());
    }

    #[test]
    fn kind_filter_returns_only_matching_records_in_sort_order() {
        let mut gallery = seeded_gallery();
        gallery
            .insert(record("3", "another dog", ImageKind::Upscaled, 30))
            .unwrap();

        let result = gallery.query(&GalleryFilter {
            kind: KindFilter::Only(ImageKind::Upscaled),
            sort: SortKey::Newest,
            ..GalleryFilter::default()
        });
        assert_eq!(ids(&result), vec!["2", "3"]);
    }

    #[test]
    fn newest_reversed_equals_oldest() {
        let mut gallery = seeded_gallery();
        gallery
            .insert(record("3", "a heron", ImageKind::Batch, 240))
            .unwrap();

        let mut newest = gallery.query(&GalleryFilter {
            sort: SortKey::Newest,
            ..GalleryFilter::default()
        });
        let oldest = gallery.query(&GalleryFilter {
            sort: SortKey::Oldest,
            ..GalleryFilter::default()
        });
        newest.reverse();
        assert_eq!(ids(&newest), ids(&oldest));
    }

    #[test]
    fn favorites_sort_puts_all_favorites_first() {
        let mut gallery = seeded_gallery();
        let mut fav = record("3", "a heron", ImageKind::Generated, 240);
        fav.is_favorite = true;
        gallery.insert(fav).unwrap();

        let result = gallery.query(&GalleryFilter {
            sort: SortKey::Favorites,
            ..GalleryFilter::default()
        });
        let favorite_flags: Vec<bool> = result.iter().map(|r| r.is_favorite).collect();
        assert_eq!(favorite_flags, vec![true, true, false]);
        // Favorites tie-break on recency.
        assert_eq!(ids(&result), vec!["2", "3", "1"]);
    }

    #[test]
    fn spec_scenario_favorites_search_delete() {
        let mut gallery = seeded_gallery();

        let favorites = gallery.query(&GalleryFilter {
            search: Some("".into()),
            kind: KindFilter::All,
            sort: SortKey::Favorites,
        });
        assert_eq!(ids(&favorites), vec!["2", "1"]);

        let cats = gallery.query(&GalleryFilter {
            search: Some("cat".into()),
            kind: KindFilter::All,
            sort: SortKey::Newest,
        });
        assert_eq!(ids(&cats), vec!["1"]);

        gallery.delete("1").unwrap();
        let remaining = gallery.query(&GalleryFilter::default());
        assert_eq!(ids(&remaining), vec!["2"]);
    }

    #[test]
    fn query_does_not_mutate_the_collection() {
        let gallery = seeded_gallery();
        let before: Vec<ImageRecord> = gallery.records().to_vec();
        gallery.query(&GalleryFilter {
            search: Some("dog".into()),
            kind: KindFilter::Only(ImageKind::Upscaled),
            sort: SortKey::Oldest,
        });
        assert_eq!(gallery.records(), before.as_slice());
    }

    #[test]
    fn toggle_favorite_twice_is_an_involution() {
        let mut gallery = seeded_gallery();
        let original = gallery.records()[0].is_favorite;

        let once = gallery.toggle_favorite("1").unwrap();
        assert_eq!(once.is_favorite, !original);
        let twice = gallery.toggle_favorite("1").unwrap();
        assert_eq!(twice.is_favorite, original);
    }

    #[test]
    fn toggle_favorite_of_unknown_id_is_not_found() {
        let mut gallery = seeded_gallery();
        let err = gallery.toggle_favorite("nope").unwrap_err();
        assert!(matches!(err, GalleryError::RecordNotFound(_)));
    }

    #[test]
    fn double_delete_is_a_silent_no_op() {
        let mut gallery = seeded_gallery();
        assert!(gallery.delete("1").unwrap());
        assert!(!gallery.delete("1").unwrap());
        assert_eq!(gallery.records().len(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut gallery = seeded_gallery();
        let err = gallery
            .insert(record("1", "an impostor", ImageKind::Generated, 1))
            .unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateId(_)));
        assert_eq!(gallery.records().len(), 2);
    }

    #[test]
    fn insert_then_load_round_trips_with_timestamps() {
        let mut store = InMemoryStore::new();
        let mut original = Vec::new();
        {
            let mut gallery = GalleryIndex::new(&mut store);
            gallery
                .insert(record("1", "a cat", ImageKind::Generated, 60))
                .unwrap();
            gallery
                .insert(
                    record("2", "a dog", ImageKind::Unblurred, 10).with_filename("dog-fixed.png"),
                )
                .unwrap();
            original.extend_from_slice(gallery.records());
        }

        let mut reloaded = GalleryIndex::new(&mut store);
        let report = reloaded.load();
        assert_eq!(report.restored, 2);
        assert_eq!(report.dropped, 0);
        assert!(report.error.is_none());
        assert_eq!(reloaded.records(), original.as_slice());
    }

    #[test]
    fn load_of_absent_blob_is_an_empty_gallery() {
        let mut gallery = GalleryIndex::new(InMemoryStore::new());
        let report = gallery.load();
        assert_eq!(report.restored, 0);
        assert!(report.error.is_none());
        assert!(gallery.is_loaded());
        assert!(gallery.records().is_empty());
    }

    #[test]
    fn load_degrades_when_storage_is_unavailable() {
        let mut gallery = GalleryIndex::new(UnavailableStore);
        let report = gallery.load();
        assert!(report.error.is_some());
        assert!(gallery.records().is_empty());
    }

    #[test]
    fn load_degrades_when_blob_is_not_json() {
        let mut store = InMemoryStore::new();
        store.set(DEFAULT_COLLECTION_KEY, "not json at all").unwrap();

        let mut gallery = GalleryIndex::new(store);
        let report = gallery.load();
        assert!(report.error.is_some());
        assert!(gallery.records().is_empty());
    }

    #[test]
    fn malformed_records_are_dropped_without_losing_neighbors() {
        let good = serde_json::to_value(record("1", "a cat", ImageKind::Generated, 60)).unwrap();
        let unknown_kind = serde_json::json!({
            "id": "2",
            "url": "https://cdn.example/2.png",
            "prompt": "a dog",
            "kind": "colorized",
            "created_at": "2026-08-01T12:00:00Z",
            "is_favorite": false
        });
        let missing_fields = serde_json::json!({ "id": "3" });
        let blob =
            serde_json::to_string(&vec![good, unknown_kind, missing_fields]).unwrap();

        let mut store = InMemoryStore::new();
        store.set(DEFAULT_COLLECTION_KEY, &blob).unwrap();

        let mut gallery = GalleryIndex::new(store);
        let report = gallery.load();
        assert_eq!(report.restored, 1);
        assert_eq!(report.dropped, 2);
        assert!(report.error.is_none());
        assert_eq!(ids(gallery.records()), vec!["1"]);
    }

    #[test]
    fn duplicate_ids_in_stored_blob_are_quarantined() {
        let a = serde_json::to_value(record("1", "first", ImageKind::Generated, 60)).unwrap();
        let b = serde_json::to_value(record("1", "second", ImageKind::Generated, 10)).unwrap();
        let blob = serde_json::to_string(&vec![a, b]).unwrap();

        let mut store = InMemoryStore::new();
        store.set(DEFAULT_COLLECTION_KEY, &blob).unwrap();

        let mut gallery = GalleryIndex::new(store);
        let report = gallery.load();
        assert_eq!(report.restored, 1);
        assert_eq!(report.dropped, 1);
        assert_eq!(gallery.records()[0].prompt, "first");
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let seed = vec![record("1", "a cat", ImageKind::Generated, 60)];
        let blob = serde_json::to_string(&seed).unwrap();
        let store = ReadOnlyStore::seeded(DEFAULT_COLLECTION_KEY, &blob);

        let mut gallery = GalleryIndex::new(store);
        gallery.load();

        assert!(gallery
            .insert(record("2", "a dog", ImageKind::Generated, 5))
            .is_err());
        assert_eq!(gallery.records().len(), 1);

        assert!(gallery.toggle_favorite("1").is_err());
        assert!(!gallery.records()[0].is_favorite);

        assert!(gallery.delete("1").is_err());
        assert_eq!(gallery.records().len(), 1);
    }

    #[test]
    fn kind_filter_parses_sentinel_and_kinds() {
        assert_eq!("all".parse::<KindFilter>(), Ok(KindFilter::All));
        assert_eq!(
            "upscaled".parse::<KindFilter>(),
            Ok(KindFilter::Only(ImageKind::Upscaled))
        );
        assert!("everything".parse::<KindFilter>().is_err());
    }

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!("newest".parse::<SortKey>(), Ok(SortKey::Newest));
        assert_eq!("oldest".parse::<SortKey>(), Ok(SortKey::Oldest));
        assert_eq!("favorites".parse::<SortKey>(), Ok(SortKey::Favorites));
        assert!("best".parse::<SortKey>().is_err());
    }
}
