use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::index::DisplayIndex;
use crate::store::KeyValueStore;

use super::helpers::resolve_indexes;

/// Remove the records at the given positions. Deletion is permanent; the
/// image asset itself stays with the external object store.
pub fn run<S: KeyValueStore>(
    gallery: &mut GalleryIndex<S>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(gallery, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let name = gallery
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.display_name().to_string())
            .unwrap_or_else(|| id.clone());

        gallery.delete(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Image deleted ({}): {}",
            display_index, name
        )));
    }

    Ok(result)
}
