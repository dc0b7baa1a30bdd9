//! # Domain Model
//!
//! [`Post`] is the fully persisted record; [`PostSummary`] is the listing
//! projection. Summaries carry everything a list view needs and never the
//! content body, so listing a large board does not read post bodies.
//!
//! There is no "unsaved post" type: a post that does not exist yet is just
//! the raw `(title, content, author)` strings handed to
//! [`PostStore::create`](crate::store::PostStore::create). Records only come
//! into existence with an id and timestamps already assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author label substituted when a post is created with a blank author.
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// A persisted board entry.
///
/// Invariants (enforced by the store): `title` and `content` are non-empty
/// after trimming, and `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a [`Post`] without the content body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Store-layer author defaulting: blank or whitespace-only input becomes
/// [`ANONYMOUS_AUTHOR`]. Authors are never rejected, only substituted, and
/// only at creation time.
pub fn resolve_author(author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        ANONYMOUS_AUTHOR.to_string()
    } else {
        author.to_string()
    }
}
