use crate::config::GalleryConfig;
use crate::index::DisplayRecord;
use crate::model::ImageRecord;
use crate::tools::BatchRun;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod export;
pub mod favorite;
pub mod generate;
pub mod helpers;
pub mod init;
pub mod list;
pub mod process;

/// Filesystem locations the path-based commands (init, config) operate on.
#[derive(Debug, Clone)]
pub struct GalleryPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ImageRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub export_path: Option<PathBuf>,
    pub batch: Option<BatchRun>,
    pub config: Option<GalleryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ImageRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: GalleryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
