use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::index::DisplayIndex;
use crate::store::KeyValueStore;

use super::helpers::resolve_indexes;

/// Toggle the favorite flag on the records at the given positions.
pub fn toggle<S: KeyValueStore>(
    gallery: &mut GalleryIndex<S>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(gallery, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let record = gallery.toggle_favorite(&id)?;
        let verb = if record.is_favorite {
            "favorited"
        } else {
            "unfavorited"
        };
        result.add_message(CmdMessage::success(format!(
            "Image {} ({}): {}",
            verb,
            display_index,
            record.display_name()
        )));
        result.affected_records.push(record);
    }

    Ok(result)
}
