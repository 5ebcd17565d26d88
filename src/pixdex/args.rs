use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixdex")]
#[command(about = "Command-line gallery for AI-generated images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List images
    #[command(alias = "ls")]
    List {
        /// Search text, matched against prompt and filename
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by kind (generated, unblurred, upscaled,
        /// background-removed, batch; "all" disables the filter)
        #[arg(short, long)]
        kind: Option<String>,

        /// Sort order (newest, oldest, favorites)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Register a finished image in the gallery
    #[command(alias = "a")]
    Add {
        /// Location of the image asset
        #[arg(long)]
        url: String,

        /// Kind of operation that produced the image
        #[arg(long, default_value = "generated")]
        kind: String,

        /// Original filename, used for search and export naming
        #[arg(long)]
        filename: Option<String>,

        /// Prompt words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Toggle favorite on one or more images
    #[command(alias = "f")]
    Fav {
        /// Positions of the images (e.g. 1 f1)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more images
    #[command(alias = "rm")]
    Delete {
        /// Positions of the images (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Export image records to a tar.gz archive
    Export {
        /// Output path (defaults to pixdex-<timestamp>.tar.gz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Positions of the images - if omitted, exports everything
        #[arg(required = false, num_args = 0..)]
        indexes: Vec<String>,
    },

    /// Check the stored collection and drop invalid records
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, store-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the gallery (optional utility)
    Init,
}
