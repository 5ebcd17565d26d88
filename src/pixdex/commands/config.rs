use crate::commands::{CmdMessage, CmdResult, GalleryPaths};
use crate::config::GalleryConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultSort(String),
    SetStoreKey(String),
}

pub fn run(paths: &GalleryPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GalleryConfig::load(&paths.data_dir)?;

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::SetDefaultSort(value) => {
            config.set_default_sort(&value)?;
            config.save(&paths.data_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("default-sort = {}", value)));
            Ok(result)
        }
        ConfigAction::SetStoreKey(value) => {
            config.set_store_key(&value)?;
            config.save(&paths.data_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("store-key = {}", value)));
            Ok(result)
        }
    }
}
