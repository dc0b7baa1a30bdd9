//! # Controller
//!
//! The mediating layer between a presentation front end and the store.
//! Each operation takes raw user input, runs to completion synchronously,
//! and returns exactly one [`Outcome`] — the fixed set of notifications a
//! front end subscribes to. Store failures are absorbed here; no operation
//! returns `Err` or panics, so a broken database never crashes the UI.
//!
//! The controller is stateless between calls: it holds nothing but the
//! store, caches no posts, and performs no author handling (the store owns
//! the anonymous-author substitution).

use crate::model::{Post, PostSummary};
use crate::store::PostStore;

/// The result of a single controller operation.
///
/// Exactly one outcome per invocation. `Error` carries a human-readable
/// message ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PostsLoaded(Vec<PostSummary>),
    PostLoaded(Post),
    Created,
    Updated,
    Deleted,
    Error(String),
}

/// Adapts raw input into store calls and store results into [`Outcome`]s.
pub struct PostController<S: PostStore> {
    store: S,
}

impl<S: PostStore> PostController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch all posts for the list view.
    pub fn load_all(&self) -> Outcome {
        match self.store.get_all() {
            Ok(posts) => Outcome::PostsLoaded(posts),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    /// Fetch one post, content included, for the detail view.
    pub fn load_one(&self, id: i64) -> Outcome {
        match self.store.get_by_id(id) {
            Ok(Some(post)) => Outcome::PostLoaded(post),
            Ok(None) => Outcome::Error("Post not found.".to_string()),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    /// Create a post from raw form input.
    pub fn create(&mut self, title: &str, content: &str, author: &str) -> Outcome {
        match self.store.create(title, content, author) {
            Ok(_) => Outcome::Created,
            Err(e) if e.is_validation() => Outcome::Error(e.to_string()),
            Err(e) => Outcome::Error(format!("Save error: {e}")),
        }
    }

    /// Replace an existing post's title and content.
    pub fn update(&mut self, id: i64, title: &str, content: &str) -> Outcome {
        match self.store.update(id, title, content) {
            Ok(true) => Outcome::Updated,
            Ok(false) => Outcome::Error("Update failed.".to_string()),
            Err(e) if e.is_validation() => Outcome::Error(e.to_string()),
            Err(e) => Outcome::Error(format!("Update error: {e}")),
        }
    }

    /// Delete a post.
    pub fn delete(&mut self, id: i64) -> Outcome {
        match self.store.delete(id) {
            Ok(true) => Outcome::Deleted,
            Ok(false) => Outcome::Error("Delete failed.".to_string()),
            Err(e) => Outcome::Error(format!("Delete error: {e}")),
        }
    }

    /// Release the store. The owning process calls this on shutdown.
    pub fn close(&mut self) -> crate::error::Result<()> {
        self.store.close()
    }
}
