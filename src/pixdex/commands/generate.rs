use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::GalleryIndex;
use crate::model::{ImageKind, ImageRecord};
use crate::store::KeyValueStore;
use crate::tools::{BatchRun, BatchStatus, ImageTool, ToolRequest};
use uuid::Uuid;

/// Run the batch-generation loop: one generation call per prompt variation,
/// in order, accumulating whatever succeeds.
///
/// A failed tool call is reported and the loop moves on; a failed insert
/// (write path) aborts and surfaces. Records produced here carry the `batch`
/// kind regardless of the tool's own labeling.
pub fn run<S: KeyValueStore, T: ImageTool>(
    gallery: &mut GalleryIndex<S>,
    tool: &T,
    variations: &[String],
) -> Result<CmdResult> {
    let mut batch = BatchRun {
        status: BatchStatus::Idle,
        completed: 0,
        total: variations.len(),
    };
    let mut result = CmdResult::default();

    batch.status = BatchStatus::Running;
    for prompt in variations {
        let request = ToolRequest::Generate {
            prompt: prompt.clone(),
        };
        match tool.invoke(&request) {
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Generation failed for \"{}\": {}",
                    prompt, e
                )));
            }
            Ok(outputs) => {
                for output in outputs {
                    let mut record = ImageRecord::new(
                        Uuid::new_v4().to_string(),
                        output.url,
                        output.prompt,
                        ImageKind::Batch,
                    );
                    if let Some(filename) = output.filename {
                        record = record.with_filename(filename);
                    }
                    gallery.insert(record.clone())?;
                    result.affected_records.push(record);
                }
                batch.completed += 1;
            }
        }
    }
    batch.status = BatchStatus::Done;

    result.add_message(CmdMessage::success(format!(
        "Batch done: {}/{} variation(s) succeeded",
        batch.completed, batch.total
    )));
    result.batch = Some(batch);
    Ok(result)
}
