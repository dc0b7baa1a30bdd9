//! In-memory post store for testing logic without a database file.
//!
//! Mirrors the SQLite backend's observable semantics: same validation,
//! same author defaulting, same ordering, and `updated_at` refreshed by
//! the store itself on update. [`MemoryStore::failing`] builds a store
//! whose every operation fails, for exercising error paths.

use chrono::Utc;

use crate::error::{BoardError, Result};
use crate::model::{resolve_author, Post, PostSummary};
use crate::store::PostStore;
use crate::validation::validate_post_input;

#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: Vec<Post>,
    next_id: i64,
    closed: bool,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with the given store error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<()> {
        if self.closed {
            return Err(BoardError::Store("store is closed".to_string()));
        }
        if let Some(message) = &self.failure {
            return Err(BoardError::Store(message.clone()));
        }
        Ok(())
    }
}

impl PostStore for MemoryStore {
    fn create(&mut self, title: &str, content: &str, author: &str) -> Result<i64> {
        let (title, content) = validate_post_input(title, content)?;
        self.guard()?;

        self.next_id += 1;
        let now = Utc::now();
        self.posts.push(Post {
            id: self.next_id,
            title,
            content,
            author: resolve_author(author),
            created_at: now,
            updated_at: now,
        });
        Ok(self.next_id)
    }

    fn get_all(&self) -> Result<Vec<PostSummary>> {
        self.guard()?;
        let mut summaries: Vec<PostSummary> = self.posts.iter().map(Post::summary).collect();
        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(summaries)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        self.guard()?;
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    fn update(&mut self, id: i64, title: &str, content: &str) -> Result<bool> {
        let (title, content) = validate_post_input(title, content)?;
        self.guard()?;

        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.title = title;
                post.content = content;
                post.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        self.guard()?;
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        Ok(self.posts.len() < before)
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
