//! # Storage Layer
//!
//! [`PostStore`] is the storage seam: the controller and any presentation
//! layer only ever see this trait.
//!
//! ## Semantics shared by all backends
//!
//! - `create`/`update` validate and trim title/content before touching
//!   storage; a validation failure leaves the store untouched.
//! - A blank author is replaced with the anonymous label at creation time.
//! - `updated_at` is refreshed by the *storage layer* on every row update,
//!   so the `updated_at >= created_at` invariant holds even for mutations
//!   that bypass the controller.
//! - "Not found" is a normal outcome (`None` / `false`), never an error.
//! - `close` is idempotent; operations on a closed store fail with a store
//!   error.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: production backend, one `rusqlite` connection
//!   for the store's lifetime, schema and trigger created at open.
//! - [`memory::MemoryStore`]: test backend with the same observable
//!   semantics plus fault injection for exercising error paths.

use crate::error::Result;
use crate::model::{Post, PostSummary};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, DEFAULT_DB_PATH};

/// Abstract interface for post storage.
pub trait PostStore {
    /// Create a post from raw input and return the assigned id.
    ///
    /// Ids are monotonically increasing and never reused.
    fn create(&mut self, title: &str, content: &str, author: &str) -> Result<i64>;

    /// List all posts, newest `created_at` first, ties broken newest id
    /// first. Empty store yields an empty vec, not an error.
    fn get_all(&self) -> Result<Vec<PostSummary>>;

    /// Fetch one post including its content body. `None` when no row
    /// matches.
    fn get_by_id(&self, id: i64) -> Result<Option<Post>>;

    /// Replace title and content of an existing post. Returns whether a row
    /// was actually affected; `false` when `id` does not exist.
    fn update(&mut self, id: i64, title: &str, content: &str) -> Result<bool>;

    /// Hard-delete a post. Returns whether a row was actually affected.
    fn delete(&mut self, id: i64) -> Result<bool>;

    /// Release the underlying resources. Safe to call more than once.
    fn close(&mut self) -> Result<()>;
}
