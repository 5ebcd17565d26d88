//! # API Facade
//!
//! Thin facade over the command layer — the single entry point for every
//! gallery operation, regardless of the client driving it. It dispatches,
//! normalizes inputs (listing positions → record ids), and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O of its
//! own, no printing: the CLI (or any other embedding) decides what to do
//! with the returned data.
//!
//! `GalleryApi<S: KeyValueStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::gallery::{GalleryFilter, GalleryIndex};
use crate::index::DisplayIndex;
use crate::store::KeyValueStore;
use crate::tools::{ImageTool, ToolOutput, ToolRequest};
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for gallery operations.
pub struct GalleryApi<S: KeyValueStore> {
    gallery: GalleryIndex<S>,
    paths: commands::GalleryPaths,
}

impl<S: KeyValueStore> GalleryApi<S> {
    pub fn new(store: S, config: &GalleryConfig, paths: commands::GalleryPaths) -> Self {
        Self {
            gallery: GalleryIndex::with_key(store, config.store_key.clone()),
            paths,
        }
    }

    /// Read the persisted collection into memory. Degrades to an empty
    /// gallery on read trouble; the returned messages say what happened.
    pub fn load(&mut self) -> commands::CmdResult {
        let report = self.gallery.load();
        let mut result = commands::CmdResult::default();
        if let Some(error) = report.error {
            result.add_message(commands::CmdMessage::warning(format!(
                "Could not read stored gallery, starting empty: {}",
                error
            )));
        }
        if report.dropped > 0 {
            result.add_message(commands::CmdMessage::warning(format!(
                "Skipped {} invalid stored record(s); run doctor to compact them away",
                report.dropped
            )));
        }
        result
    }

    pub fn list(&self, filter: &GalleryFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.gallery, filter)
    }

    pub fn add(&mut self, output: ToolOutput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.gallery, output)
    }

    pub fn toggle_favorite<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let parsed = parse_indexes(indexes)?;
        commands::favorite::toggle(&mut self.gallery, &parsed)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let parsed = parse_indexes(indexes)?;
        commands::delete::run(&mut self.gallery, &parsed)
    }

    pub fn export_records<I: AsRef<str>>(
        &self,
        indexes: &[I],
        output: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        let parsed = parse_indexes(indexes)?;
        commands::export::run(&self.gallery, &parsed, output)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.gallery)
    }

    /// Invoke one hosted operation through the given tool collaborator.
    pub fn process<T: ImageTool>(
        &mut self,
        tool: &T,
        request: &ToolRequest,
    ) -> Result<commands::CmdResult> {
        commands::process::run(&mut self.gallery, tool, request)
    }

    /// Run the batch-generation loop over a list of prompt variations.
    pub fn generate_batch<T: ImageTool>(
        &mut self,
        tool: &T,
        variations: &[String],
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.gallery, tool, variations)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self, store_key: &str) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, store_key)
    }

    pub fn paths(&self) -> &commands::GalleryPaths {
        &self.paths
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs
        .iter()
        .map(|s| {
            DisplayIndex::from_str(s.as_ref())
                .map_err(crate::error::GalleryError::Api)
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, GalleryPaths, MessageLevel};
