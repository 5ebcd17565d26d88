use clap::Parser;
use directories::ProjectDirs;
use pixdex::api::{ConfigAction, GalleryApi, GalleryPaths};
use pixdex::config::GalleryConfig;
use pixdex::error::{GalleryError, Result};
use pixdex::gallery::{GalleryFilter, KindFilter, SortKey};
use pixdex::model::ImageKind;
use pixdex::store::fs::FileStore;
use pixdex::tools::ToolOutput;
use std::path::PathBuf;

mod args;
mod print;
mod styles;

use args::{Cli, Commands};
use print::{print_messages, print_records};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GalleryApi<FileStore>,
    config: GalleryConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    // Read trouble degrades to an empty gallery; say so before doing anything.
    let loaded = ctx.api.load();
    print_messages(&loaded.messages);

    match cli.command {
        Some(Commands::List { search, kind, sort }) => handle_list(&ctx, search, kind, sort),
        Some(Commands::Add {
            url,
            kind,
            filename,
            prompt,
        }) => handle_add(&mut ctx, url, kind, filename, prompt),
        Some(Commands::Fav { indexes }) => handle_fav(&mut ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Export { output, indexes }) => handle_export(&ctx, output, indexes),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("PIXDEX_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "pixdex", "pixdex")
            .ok_or_else(|| GalleryError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = GalleryConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = GalleryApi::new(store, &config, GalleryPaths { data_dir });

    Ok(AppContext { api, config })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    kind: Option<String>,
    sort: Option<String>,
) -> Result<()> {
    let kind = match kind {
        Some(k) => k.parse::<KindFilter>().map_err(GalleryError::Api)?,
        None => KindFilter::All,
    };
    let sort = match sort {
        Some(s) => s.parse::<SortKey>().map_err(GalleryError::Api)?,
        None => ctx.config.default_sort_key(),
    };

    let result = ctx.api.list(&GalleryFilter { search, kind, sort })?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    url: String,
    kind: String,
    filename: Option<String>,
    prompt: Vec<String>,
) -> Result<()> {
    let kind = kind.parse::<ImageKind>().map_err(GalleryError::Api)?;
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        return Err(GalleryError::Api("Prompt cannot be empty".into()));
    }

    let result = ctx.api.add(ToolOutput {
        url,
        prompt,
        kind,
        filename,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_favorite(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.export_records(&indexes, output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let showing = value.is_none();
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-sort"), None) => ConfigAction::ShowKey("default-sort".to_string()),
        (Some("default-sort"), Some(v)) => ConfigAction::SetDefaultSort(v),
        (Some("store-key"), None) => ConfigAction::ShowKey("store-key".to_string()),
        (Some("store-key"), Some(v)) => ConfigAction::SetStoreKey(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if showing {
        if let Some(config) = &result.config {
            match key.as_deref() {
                Some("default-sort") => println!("default-sort = {}", config.default_sort),
                Some("store-key") => println!("store-key = {}", config.store_key),
                _ => {
                    println!("default-sort = {}", config.default_sort);
                    println!("store-key = {}", config.store_key);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(&ctx.config.store_key)?;
    print_messages(&result.messages);
    Ok(())
}
