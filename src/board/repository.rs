//! Board repository for Corkboard.
//!
//! Boards are persisted whole: one row per board holding its JSON document.

use super::types::Board;
use crate::db::DbPool;
use crate::{CorkboardError, Result};

/// Repository for board documents.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get a board by name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Board>> {
        let document: Option<String> =
            sqlx::query_scalar("SELECT document FROM boards WHERE name = $1")
                .bind(name)
                .fetch_optional(self.pool)
                .await
                .map_err(|e| CorkboardError::Database(e.to_string()))?;

        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    /// Insert or replace a board document.
    ///
    /// Concurrent saves of the same board are last-write-wins.
    pub async fn save(&self, board: &Board) -> Result<()> {
        let document = serde_json::to_string(board)?;

        sqlx::query(
            "INSERT INTO boards (name, document) VALUES ($1, $2)
             ON CONFLICT(name) DO UPDATE
             SET document = excluded.document, updated_at = datetime('now')",
        )
        .bind(&board.name)
        .bind(&document)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(())
    }

    /// Count stored boards.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Reply, Thread};
    use crate::Database;
    use chrono::Utc;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_get_unknown_board() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        assert!(repo.get_by_name("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let mut board = Board::new("general");
        let thread_id = board.add_thread(Thread::new("hello", "pw", Utc::now()));
        let reply_id = board
            .thread_mut(&thread_id)
            .unwrap()
            .add_reply(Reply::new("hi", "rpw", Utc::now()));
        repo.save(&board).await.unwrap();

        let loaded = repo.get_by_name("general").await.unwrap().unwrap();
        let thread = loaded.thread(&thread_id).unwrap();
        assert_eq!(thread.text, "hello");
        assert_eq!(thread.delete_password, "pw");
        assert_eq!(thread.reply(&reply_id).unwrap().text, "hi");
    }

    #[tokio::test]
    async fn test_save_overwrites_document() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let mut board = Board::new("general");
        let id = board.add_thread(Thread::new("hello", "pw", Utc::now()));
        repo.save(&board).await.unwrap();

        board.thread_mut(&id).unwrap().report();
        repo.save(&board).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let loaded = repo.get_by_name("general").await.unwrap().unwrap();
        assert!(loaded.thread(&id).unwrap().reported);
    }

    #[tokio::test]
    async fn test_boards_are_isolated() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let mut a = Board::new("a");
        let id = a.add_thread(Thread::new("in a", "pw", Utc::now()));
        repo.save(&a).await.unwrap();
        repo.save(&Board::new("b")).await.unwrap();

        let b = repo.get_by_name("b").await.unwrap().unwrap();
        assert!(b.thread(&id).is_err());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported() {
        let db = setup_db().await;
        sqlx::query("INSERT INTO boards (name, document) VALUES ($1, $2)")
            .bind("broken")
            .bind("{not json")
            .execute(db.pool())
            .await
            .unwrap();

        let repo = BoardRepository::new(db.pool());
        let result = repo.get_by_name("broken").await;
        assert!(matches!(result, Err(CorkboardError::Document(_))));
    }
}
