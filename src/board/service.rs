//! Board service for Corkboard.
//!
//! Every operation loads one board document, applies a single mutation and
//! saves the whole document back.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::db::Database;
use crate::{CorkboardError, Result};

use super::repository::BoardRepository;
use super::types::{Board, Reply, Thread};
use super::view::{recent_threads, ThreadView};

/// Service for thread and reply operations on named boards.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn repo(&self) -> BoardRepository<'_> {
        BoardRepository::new(self.db.pool())
    }

    /// Load a board that must already exist for thread-level operations.
    async fn load(&self, board: &str) -> Result<Board> {
        self.repo()
            .get_by_name(board)
            .await?
            .ok_or_else(CorkboardError::thread_not_found)
    }

    /// Post a new thread, creating the board on first use.
    ///
    /// Returns the new thread's ID.
    pub async fn create_thread(&self, board: &str, text: &str, password: &str) -> Result<String> {
        let repo = self.repo();
        let mut doc = repo
            .get_by_name(board)
            .await?
            .unwrap_or_else(|| Board::new(board));

        let thread_id = doc.add_thread(Thread::new(text, password, Utc::now()));
        repo.save(&doc).await?;

        info!(board, thread_id = %thread_id, "Created thread");
        Ok(thread_id)
    }

    /// The ten most recently bumped threads with their three newest replies.
    ///
    /// Unknown boards yield an empty listing.
    pub async fn list_recent_threads(&self, board: &str) -> Result<Vec<ThreadView>> {
        let threads = match self.repo().get_by_name(board).await? {
            Some(doc) => recent_threads(&doc),
            None => Vec::new(),
        };
        debug!(board, count = threads.len(), "Listed recent threads");
        Ok(threads)
    }

    /// Flag a thread for moderation.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        let mut doc = self.load(board).await?;
        doc.thread_mut(thread_id)?.report();
        self.repo().save(&doc).await?;

        info!(board, thread_id, "Reported thread");
        Ok(())
    }

    /// Remove a thread and all its replies.
    pub async fn delete_thread(&self, board: &str, thread_id: &str, password: &str) -> Result<()> {
        let mut doc = self.load(board).await?;
        if let Err(e) = doc.remove_thread(thread_id, password) {
            if matches!(e, CorkboardError::WrongPassword) {
                warn!(board, thread_id, "Rejected thread deletion: incorrect password");
            }
            return Err(e);
        }
        self.repo().save(&doc).await?;

        info!(board, thread_id, "Deleted thread");
        Ok(())
    }

    /// Reply to a thread, bumping it.
    ///
    /// Returns the new reply's ID.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        password: &str,
    ) -> Result<String> {
        let mut doc = self.load(board).await?;
        let reply_id = doc
            .thread_mut(thread_id)?
            .add_reply(Reply::new(text, password, Utc::now()));
        self.repo().save(&doc).await?;

        info!(board, thread_id, reply_id = %reply_id, "Created reply");
        Ok(reply_id)
    }

    /// A thread with every reply.
    pub async fn get_thread(&self, board: &str, thread_id: &str) -> Result<ThreadView> {
        let doc = self.load(board).await?;
        let view = ThreadView::full(doc.thread(thread_id)?);
        debug!(board, thread_id, replies = view.replies.len(), "Fetched thread");
        Ok(view)
    }

    /// Flag a reply for moderation.
    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        let mut doc = self.load(board).await?;
        doc.thread_mut(thread_id)?.reply_mut(reply_id)?.report();
        self.repo().save(&doc).await?;

        info!(board, thread_id, reply_id, "Reported reply");
        Ok(())
    }

    /// Soft-delete a reply, replacing its text with the tombstone.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        password: &str,
    ) -> Result<()> {
        let mut doc = self.load(board).await?;
        let reply = doc.thread_mut(thread_id)?.reply_mut(reply_id)?;

        if reply.is_deleted() && reply.delete_password == password {
            debug!(board, thread_id, reply_id, "Reply already deleted");
            return Ok(());
        }
        if let Err(e) = reply.delete(password) {
            warn!(board, thread_id, reply_id, "Rejected reply deletion: incorrect password");
            return Err(e);
        }
        self.repo().save(&doc).await?;

        info!(board, thread_id, reply_id, "Deleted reply");
        Ok(())
    }
}
