//! # Stockroom Architecture
//!
//! Stockroom keeps a small inventory in memory and persists it as CSV. The
//! library is UI-agnostic; the `stockroom` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Argument parsing, tables, the interactive menu           │
//! │  - The ONLY place that prints or sets exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the store and the active Settings                   │
//! │  - Autosave after changes                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per operation, returns CmdResult + messages │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) and Codec (codec.rs)                        │
//! │  - Ids, CRUD, search, load / save / merge-import            │
//! │  - One record <-> one CSV line                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in the Core
//!
//! The store and codec take plain arguments (file paths included) and return
//! plain data. They never print, never log and never read settings. Not-found
//! is an `Option` or `bool`; only file access failures are errors.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade used by UI clients
//! - [`commands`]: One module per operation
//! - [`store`]: [`store::Inventory`], the record store
//! - [`codec`]: CSV line encoding and decoding
//! - [`model`]: [`model::Item`]
//! - [`view`]: Sorting and paging for display
//! - [`config`]: Settings persisted as JSON
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
