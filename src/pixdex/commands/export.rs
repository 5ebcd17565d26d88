use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GalleryError, Result};
use crate::gallery::GalleryIndex;
use crate::index::{DisplayIndex, DisplayRecord};
use crate::model::ImageRecord;
use crate::store::KeyValueStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use super::helpers::{indexed_records, resolve_indexes};

/// Export records to a tar.gz archive of per-record JSON documents.
///
/// Only record metadata is exported; the image assets stay with the external
/// object store, referenced by url.
pub fn run<S: KeyValueStore>(
    gallery: &GalleryIndex<S>,
    indexes: &[DisplayIndex],
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let records = resolve_records(gallery, indexes)?;

    if records.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No images to export."));
        return Ok(res);
    }

    let path = output.unwrap_or_else(|| {
        let now = Utc::now();
        PathBuf::from(format!("pixdex-{}.tar.gz", now.format("%Y-%m-%d_%H%M%S")))
    });
    let file = File::create(&path).map_err(GalleryError::Io)?;
    write_archive(file, &records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} image(s) to {}",
        records.len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

fn resolve_records<S: KeyValueStore>(
    gallery: &GalleryIndex<S>,
    indexes: &[DisplayIndex],
) -> Result<Vec<ImageRecord>> {
    if indexes.is_empty() {
        // The regular block covers every record exactly once.
        Ok(indexed_records(gallery)
            .into_iter()
            .filter(|dr| matches!(dr.index, DisplayIndex::Regular(_)))
            .map(|dr: DisplayRecord| dr.record)
            .collect())
    } else {
        let resolved = resolve_indexes(gallery, indexes)?;
        let mut records = Vec::with_capacity(resolved.len());
        for (_, id) in resolved {
            if let Some(record) = gallery.records().iter().find(|r| r.id == id) {
                records.push(record.clone());
            }
        }
        Ok(records)
    }
}

fn write_archive<W: Write>(writer: W, records: &[ImageRecord]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for record in records {
        let safe_name = sanitize_filename(record.display_name());
        let id_tail: String = record.id.chars().take(8).collect();
        let entry_name = format!("gallery/{}-{}.json", safe_name, id_tail);

        let content =
            serde_json::to_string_pretty(record).map_err(GalleryError::Serialization)?;

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(GalleryError::Io)?;
    }

    tar.finish().map_err(GalleryError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    let mut safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();
    safe.truncate(48);
    if safe.is_empty() {
        safe.push_str("image");
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageKind;
    use crate::store::memory::fixtures::record;
    use crate::store::memory::InMemoryStore;
    use flate2::read::GzDecoder;

    #[test]
    fn sanitizes_awkward_names() {
        assert_eq!(sanitize_filename("a cat, at dusk!"), "a-cat--at-dusk-");
        assert_eq!(sanitize_filename(""), "image");
    }

    #[test]
    fn exports_all_records_when_no_positions_given() {
        let mut gallery = GalleryIndex::new(InMemoryStore::new());
        let mut starred = record("starred", "a fox", ImageKind::Generated, 60);
        starred.is_favorite = true;
        gallery.insert(starred).unwrap();
        gallery
            .insert(record("plain", "a badger", ImageKind::Upscaled, 5))
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("backup.tar.gz");
        let result = run(&gallery, &[], Some(out.clone())).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(out.as_path()));

        let mut archive = tar::Archive::new(GzDecoder::new(File::open(&out).unwrap()));
        let entries: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().display().to_string())
            .collect();
        // One entry per record, favorites not duplicated.
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|p| p.starts_with("gallery/")));
    }

    #[test]
    fn empty_gallery_exports_nothing() {
        let gallery: GalleryIndex<InMemoryStore> = GalleryIndex::new(InMemoryStore::new());
        let result = run(&gallery, &[], None).unwrap();
        assert!(result.export_path.is_none());
    }
}
