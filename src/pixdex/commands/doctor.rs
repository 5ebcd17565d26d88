use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::store::KeyValueStore;

/// Revalidate the stored collection and compact out quarantined records.
///
/// A blob that cannot be read at all is left in place for inspection; only a
/// readable blob with invalid entries gets rewritten.
pub fn run<S: KeyValueStore>(gallery: &mut GalleryIndex<S>) -> Result<CmdResult> {
    let report = gallery.load();
    let mut result = CmdResult::default();

    if let Some(error) = report.error {
        result.add_message(CmdMessage::warning(format!(
            "Stored collection is unreadable, leaving it untouched: {}",
            error
        )));
        return Ok(result);
    }

    if report.dropped > 0 {
        gallery.flush()?;
        result.add_message(CmdMessage::success(format!(
            "Dropped {} invalid record(s), rewrote collection with {} record(s)",
            report.dropped, report.restored
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Collection is clean ({} record(s))",
            report.restored
        )));
    }

    Ok(result)
}
