//! Core library surface for the songbook TUI application: a local catalog of
//! song lyrics with substring search, multi-key sorting, and a grouped
//! overview list.
//!
//! The modules are layered so the search/sort/group pipeline (`listing`) and
//! the storage accessor (`db`) are usable and testable without a terminal.
pub mod db;
pub mod listing;
pub mod models;
pub mod ui;

/// Persistence entry points typically used by `main.rs` to initialize the
/// embedded SQLite store.
pub use db::{data_dir, ensure_schema};

/// The record type other layers manipulate.
pub use models::SongText;

/// Sort (and grouping) key of the overview list.
pub use listing::SortKey;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
