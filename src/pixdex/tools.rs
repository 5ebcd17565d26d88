//! The seam to the hosted AI image operations.
//!
//! The operations themselves are remote calls owned by the embedding
//! application; this crate only fixes the request/response shapes and the
//! sequencing around them. A tool is anything implementing [`ImageTool`]:
//! given a request it returns zero or more finished outputs, each pointing at
//! an asset in external object storage. Conversion of outputs into gallery
//! records (id minting, timestamping) happens in the command layer.

use crate::error::Result;
use crate::model::ImageKind;

/// One hosted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    Generate { prompt: String },
    Unblur { url: String },
    Upscale { url: String },
    RemoveBackground { url: String, replacement: Option<String> },
}

impl ToolRequest {
    /// The record kind a successful run of this request produces.
    pub fn result_kind(&self) -> ImageKind {
        match self {
            ToolRequest::Generate { .. } => ImageKind::Generated,
            ToolRequest::Unblur { .. } => ImageKind::Unblurred,
            ToolRequest::Upscale { .. } => ImageKind::Upscaled,
            ToolRequest::RemoveBackground { .. } => ImageKind::BackgroundRemoved,
        }
    }
}

/// A finished result handed back by a tool. The asset lives with the
/// external object store; `url` is a reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub url: String,
    pub prompt: String,
    pub kind: ImageKind,
    pub filename: Option<String>,
}

/// An AI processing tool collaborator.
pub trait ImageTool {
    fn invoke(&self, request: &ToolRequest) -> Result<Vec<ToolOutput>>;
}

/// Progress of a batch-generation run. Three states, nothing more: a run is
/// created idle, marked running when the loop starts, and done when it ends
/// (regardless of how many variations succeeded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchStatus {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Debug, Default)]
pub struct BatchRun {
    pub status: BatchStatus,
    pub completed: usize,
    pub total: usize,
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::GalleryError;
    use std::cell::RefCell;

    /// Canned tool: answers every request with one output, recording the
    /// requests it saw. `fail_on` makes the nth call (1-based) error, for
    /// exercising the warn-and-continue batch path.
    #[derive(Default)]
    pub struct ScriptedTool {
        pub calls: RefCell<Vec<ToolRequest>>,
        pub fail_on: Option<usize>,
    }

    impl ScriptedTool {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(call: usize) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: Some(call),
            }
        }
    }

    impl ImageTool for ScriptedTool {
        fn invoke(&self, request: &ToolRequest) -> Result<Vec<ToolOutput>> {
            self.calls.borrow_mut().push(request.clone());
            let n = self.calls.borrow().len();
            if self.fail_on == Some(n) {
                return Err(GalleryError::Api(format!("tool call {} failed", n)));
            }
            let prompt = match request {
                ToolRequest::Generate { prompt } => prompt.clone(),
                ToolRequest::Unblur { url }
                | ToolRequest::Upscale { url }
                | ToolRequest::RemoveBackground { url, .. } => url.clone(),
            };
            Ok(vec![ToolOutput {
                url: format!("https://cdn.example/out-{}.png", n),
                prompt,
                kind: request.result_kind(),
                filename: None,
            }])
        }
    }
}
