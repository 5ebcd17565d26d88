//! # Pixdex Architecture
//!
//! Pixdex is a **UI-agnostic gallery library** for AI-generated images. This
//! is not a CLI application that happens to have some library code—it's a
//! library that happens to have a CLI client. The same core is meant to sit
//! under a web front-end, where the hosted AI operations it sequences are
//! actually wired up.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions → record ids)               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the GalleryIndex                │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gallery + Storage (gallery.rs, store/)                     │
//! │  - GalleryIndex: the collection + query engine              │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write-through persistence
//!
//! The whole collection lives as one JSON blob under one store key. Every
//! mutation (insert, favorite toggle, delete) rewrites that blob before the
//! operation reports success; a failed write leaves the in-memory collection
//! untouched. The read path is forgiving instead: missing or malformed data
//! degrades to an empty (or partial) gallery and is reported, never fatal.
//!
//! ## The position system
//!
//! Record ids are opaque strings. The CLI addresses records by listing
//! position, with favorites dual-listed under `f`-prefixed positions. See
//! `index.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`gallery`]: The GalleryIndex core and query types
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ImageRecord`, `ImageKind`)
//! - [`index`]: Display position system (1, f1 notation)
//! - [`tools`]: The seam to the hosted AI operations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gallery;
pub mod index;
pub mod model;
pub mod store;
pub mod tools;
