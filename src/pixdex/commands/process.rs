use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::model::ImageRecord;
use crate::store::KeyValueStore;
use crate::tools::{ImageTool, ToolRequest};
use uuid::Uuid;

/// Run a single hosted operation and register its results.
///
/// The tool call is sequential and unretried; every output it hands back
/// becomes one gallery record.
pub fn run<S: KeyValueStore, T: ImageTool>(
    gallery: &mut GalleryIndex<S>,
    tool: &T,
    request: &ToolRequest,
) -> Result<CmdResult> {
    let outputs = tool.invoke(request)?;

    let mut result = CmdResult::default();
    if outputs.is_empty() {
        result.add_message(CmdMessage::warning("Tool returned no images."));
        return Ok(result);
    }

    for output in outputs {
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
        result.affected_records.push(record);
    }

    result.add_message(CmdMessage::success(format!(
        "Added {} {} image(s)",
        result.affected_records.len(),
        request.result_kind()
    )));
    Ok(result)
}
