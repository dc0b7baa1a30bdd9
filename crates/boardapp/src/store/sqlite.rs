//! SQLite-backed post store.
//!
//! Owns a single `rusqlite` connection for its lifetime. Opening the store
//! creates the parent directory if missing and runs the idempotent schema
//! setup, so it is safe on every startup.
//!
//! The `updated_at` refresh is an `AFTER UPDATE` trigger, not application
//! code: any `UPDATE` against the `posts` table refreshes the row's
//! timestamp, including raw SQL that bypasses this module's methods.
//!
//! Timestamps are stored as UTC text with millisecond precision
//! (`%Y-%m-%d %H:%M:%f`), so the listing order and the trigger refresh are
//! observable even for operations within the same second.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::error::{BoardError, Result};
use crate::model::{resolve_author, Post, PostSummary};
use crate::store::PostStore;
use crate::validation::validate_post_input;

/// Database filename used when the caller does not supply a path.
pub const DEFAULT_DB_PATH: &str = "board.db";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Post store backed by a single SQLite database file.
pub struct SqliteStore {
    // None once closed; every operation afterwards is a store error.
    conn: Option<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema
    /// exists. The parent directory is created if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "post store opened");
        Ok(Self { conn: Some(conn) })
    }

    /// Open an in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn: Some(conn) })
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| BoardError::Store("store is closed".to_string()))
    }
}

/// Idempotent schema setup: table plus the `updated_at` refresh trigger.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        );

        CREATE TRIGGER IF NOT EXISTS posts_touch_updated_at
        AFTER UPDATE ON posts
        FOR EACH ROW
        BEGIN
            UPDATE posts
            SET updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
            WHERE id = NEW.id;
        END;",
    )?;
    Ok(())
}

fn read_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn read_summary(row: &Row<'_>) -> rusqlite::Result<PostSummary> {
    Ok(PostSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        created_at: read_timestamp(row, 3)?,
        updated_at: read_timestamp(row, 4)?,
    })
}

fn read_post(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author: row.get(3)?,
        created_at: read_timestamp(row, 4)?,
        updated_at: read_timestamp(row, 5)?,
    })
}

impl PostStore for SqliteStore {
    fn create(&mut self, title: &str, content: &str, author: &str) -> Result<i64> {
        let (title, content) = validate_post_input(title, content)?;
        let author = resolve_author(author);

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO posts (title, content, author) VALUES (?1, ?2, ?3)",
            params![title, content, author],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "post created");
        Ok(id)
    }

    fn get_all(&self) -> Result<Vec<PostSummary>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, author, created_at, updated_at
             FROM posts
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| read_summary(row))?;

        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, author, created_at, updated_at
             FROM posts
             WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], |row| read_post(row)) {
            Ok(post) => Ok(Some(post)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn update(&mut self, id: i64, title: &str, content: &str) -> Result<bool> {
        let (title, content) = validate_post_input(title, content)?;

        let conn = self.conn()?;
        let affected = conn.execute(
            "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3",
            params![title, content, id],
        )?;
        debug!(id, affected, "post update");
        Ok(affected > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM posts WHERE id = ?1", params![id])?;
        debug!(id, affected, "post delete");
        Ok(affected > 0)
    }

    fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| BoardError::Sqlite(e))?;
            debug!("post store closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    #[test]
    fn create_assigns_increasing_ids_and_round_trips() {
        let mut store = store();
        let a = store.create("First", "Body A", "alice").unwrap();
        let b = store.create("Second", "Body B", "bob").unwrap();
        assert!(a > 0);
        assert!(b > a);

        let post = store.get_by_id(a).unwrap().unwrap();
        assert_eq!(post.id, a);
        assert_eq!(post.title, "First");
        assert_eq!(post.content, "Body A");
        assert_eq!(post.author, "alice");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn create_trims_title_and_content() {
        let mut store = store();
        let id = store.create("  Padded  ", "\n Body \t", "alice").unwrap();
        let post = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(post.title, "Padded");
        assert_eq!(post.content, "Body");
    }

    #[test]
    fn create_rejects_blank_title_without_inserting() {
        let mut store = store();
        assert!(matches!(
            store.create("", "content", "alice"),
            Err(BoardError::TitleRequired)
        ));
        assert!(matches!(
            store.create("   ", "content", "alice"),
            Err(BoardError::TitleRequired)
        ));
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn create_rejects_blank_content_without_inserting() {
        let mut store = store();
        assert!(matches!(
            store.create("title", "", "alice"),
            Err(BoardError::ContentRequired)
        ));
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn blank_author_becomes_anonymous() {
        let mut store = store();
        let a = store.create("t", "c", "").unwrap();
        let b = store.create("t", "c", "   ").unwrap();
        assert_eq!(store.get_by_id(a).unwrap().unwrap().author, "anonymous");
        assert_eq!(store.get_by_id(b).unwrap().unwrap().author, "anonymous");
    }

    #[test]
    fn get_all_on_empty_store_is_empty() {
        let store = store();
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn get_all_orders_newest_first() {
        let mut store = store();
        let a = store.create("A", "a", "x").unwrap();
        let b = store.create("B", "b", "x").unwrap();

        let posts = store.get_all().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, b);
        assert_eq!(posts[1].id, a);
        assert!(posts[0].created_at >= posts[1].created_at);
    }

    #[test]
    fn get_all_breaks_created_at_ties_by_newest_id() {
        let mut store = store();
        let a = store.create("A", "a", "x").unwrap();
        let b = store.create("B", "b", "x").unwrap();

        // Pin identical creation times; ordering must then fall back to
        // newest id first. The trigger only touches updated_at.
        store
            .conn()
            .unwrap()
            .execute(
                "UPDATE posts SET created_at = '2026-01-01 00:00:00.000'",
                [],
            )
            .unwrap();

        let posts = store.get_all().unwrap();
        assert_eq!(posts[0].created_at, posts[1].created_at);
        assert_eq!(posts[0].id, b);
        assert_eq!(posts[1].id, a);
    }

    #[test]
    fn get_by_id_missing_is_none() {
        let store = store();
        assert!(store.get_by_id(999).unwrap().is_none());
    }

    #[test]
    fn update_changes_row_and_refreshes_updated_at() {
        let mut store = store();
        let id = store.create("Old", "Old body", "alice").unwrap();
        let before = store.get_by_id(id).unwrap().unwrap();

        // Millisecond timestamp resolution; a short pause makes the
        // refresh observable.
        sleep(Duration::from_millis(10));
        assert!(store.update(id, " New ", " New body ").unwrap());

        let after = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(after.title, "New");
        assert_eq!(after.content, "New body");
        assert_eq!(after.author, "alice");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn update_missing_id_returns_false() {
        let mut store = store();
        assert!(!store.update(999, "t", "c").unwrap());
    }

    #[test]
    fn update_with_blank_title_leaves_row_untouched() {
        let mut store = store();
        let id = store.create("Keep", "Keep body", "alice").unwrap();
        let before = store.get_by_id(id).unwrap().unwrap();

        assert!(matches!(
            store.update(id, "  ", "new body"),
            Err(BoardError::TitleRequired)
        ));

        let after = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn delete_removes_row() {
        let mut store = store();
        let id = store.create("t", "c", "a").unwrap();
        assert!(store.delete(id).unwrap());
        assert!(store.get_by_id(id).unwrap().is_none());
        assert!(!store.delete(id).unwrap());
    }

    #[test]
    fn delete_missing_id_returns_false() {
        let mut store = store();
        assert!(!store.delete(42).unwrap());
    }

    #[test]
    fn trigger_refreshes_updated_at_for_direct_sql() {
        let mut store = store();
        let id = store.create("t", "c", "a").unwrap();
        let before = store.get_by_id(id).unwrap().unwrap();

        sleep(Duration::from_millis(10));
        store
            .conn()
            .unwrap()
            .execute("UPDATE posts SET title = 'raw' WHERE id = ?1", params![id])
            .unwrap();

        let after = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(after.title, "raw");
        assert!(after.updated_at > before.updated_at);
        assert!(after.updated_at >= after.created_at);
    }

    #[test]
    fn close_is_idempotent_and_operations_fail_after() {
        let mut store = store();
        store.close().unwrap();
        store.close().unwrap();

        assert!(matches!(
            store.create("t", "c", "a"),
            Err(BoardError::Store(_))
        ));
        assert!(matches!(store.get_all(), Err(BoardError::Store(_))));
        assert!(matches!(store.delete(1), Err(BoardError::Store(_))));
    }

    #[test]
    fn open_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.db");
        let mut store = SqliteStore::open(&path).unwrap();
        store.create("t", "c", "a").unwrap();
        assert!(path.exists());
    }
}
