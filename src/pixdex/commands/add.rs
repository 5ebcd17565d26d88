use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::model::ImageRecord;
use crate::store::KeyValueStore;
use crate::tools::ToolOutput;
use uuid::Uuid;

/// Register a finished tool result as a gallery record.
///
/// This is the one place records come into being: the id is minted here and
/// the gallery receives the record pre-formed.
pub fn run<S: KeyValueStore>(
    gallery: &mut GalleryIndex<S>,
    output: ToolOutput,
) -> Result<CmdResult> {
    let mut record = ImageRecord::new(
        Uuid::new_v4().to_string(),
        output.url,
        output.prompt,
        output.kind,
    );
    if let Some(filename) = output.filename {
        record = record.with_filename(filename);
    }

    gallery.insert(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} image: {}",
        record.kind,
        record.display_name()
    )));
    result.affected_records.push(record);
    Ok(result)
}
