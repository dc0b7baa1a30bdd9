//! # boardapp
//!
//! UI-agnostic core of a local bulletin board: short text posts stored in an
//! embedded SQLite database.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Presentation (CLI, GUI, ...)                │
//! │  - collects raw strings, renders outcomes    │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Controller (controller.rs)                  │
//! │  - one [`Outcome`] per operation             │
//! │  - absorbs store failures, never panics      │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Store (store/)                              │
//! │  - [`PostStore`] trait                       │
//! │  - SQLite backend + in-memory test backend   │
//! │  - validation and author defaulting          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Everything below the presentation layer takes and returns plain Rust
//! values; nothing here knows about terminals, widgets, or process exits.
//!
//! ## Testing Strategy
//!
//! Store semantics are tested against both backends where they are defined;
//! controller logic is tested against [`MemoryStore`] so no filesystem is
//! involved. The on-disk lifecycle (reopen, trigger behavior) lives in the
//! crate's integration tests.

pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;

pub use controller::{Outcome, PostController};
pub use error::{BoardError, Result};
pub use model::{Post, PostSummary, ANONYMOUS_AUTHOR};
pub use store::{MemoryStore, PostStore, SqliteStore, DEFAULT_DB_PATH};
