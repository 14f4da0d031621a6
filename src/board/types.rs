//! Board document model for Corkboard.
//!
//! A board is stored as one document embedding its threads, which in turn
//! embed their replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collection::{Identified, OrderedCollection};
use crate::{CorkboardError, Result};

/// Text that replaces the body of a deleted reply.
pub const DELETED_TEXT: &str = "[deleted]";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Board document: a named container of threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique board name.
    pub name: String,
    /// Threads in posting order.
    #[serde(default)]
    pub threads: OrderedCollection<Thread>,
}

impl Board {
    /// Create an empty board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threads: OrderedCollection::new(),
        }
    }

    /// Append a thread and return its identifier.
    pub fn add_thread(&mut self, thread: Thread) -> String {
        self.threads.push(thread).id.clone()
    }

    /// Get a thread by ID.
    pub fn thread(&self, id: &str) -> Result<&Thread> {
        self.threads
            .get(id)
            .ok_or_else(CorkboardError::thread_not_found)
    }

    /// Get a thread by ID for mutation.
    pub fn thread_mut(&mut self, id: &str) -> Result<&mut Thread> {
        self.threads
            .get_mut(id)
            .ok_or_else(CorkboardError::thread_not_found)
    }

    /// Remove a thread if `password` matches its delete password.
    ///
    /// The board is left untouched on mismatch.
    pub fn remove_thread(&mut self, id: &str, password: &str) -> Result<Thread> {
        self.thread(id)?.check_password(password)?;
        self.threads
            .remove(id)
            .ok_or_else(CorkboardError::thread_not_found)
    }
}

/// Top-level post with nested replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Thread ID, unique within its board.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Plaintext secret required to delete the thread.
    pub delete_password: String,
    /// Whether the thread has been reported.
    #[serde(default)]
    pub reported: bool,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump (creation or latest reply).
    pub bumped_on: DateTime<Utc>,
    /// Replies in posting order.
    #[serde(default)]
    pub replies: OrderedCollection<Reply>,
}

impl Identified for Thread {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Thread {
    /// Create a new, unreported thread with no replies.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: now,
            bumped_on: now,
            replies: OrderedCollection::new(),
        }
    }

    /// Verify the delete password.
    pub fn check_password(&self, password: &str) -> Result<()> {
        if self.delete_password == password {
            Ok(())
        } else {
            Err(CorkboardError::WrongPassword)
        }
    }

    /// Flag the thread for moderation.
    pub fn report(&mut self) {
        self.reported = true;
    }

    /// Append a reply and bump the thread to the reply's creation time.
    pub fn add_reply(&mut self, reply: Reply) -> String {
        // bumped_on never precedes created_on, even with a skewed clock
        self.bumped_on = reply.created_on.max(self.created_on);
        self.replies.push(reply).id.clone()
    }

    /// Get a reply by ID.
    pub fn reply(&self, id: &str) -> Result<&Reply> {
        self.replies.get(id).ok_or_else(CorkboardError::reply_not_found)
    }

    /// Get a reply by ID for mutation.
    pub fn reply_mut(&mut self, id: &str) -> Result<&mut Reply> {
        self.replies
            .get_mut(id)
            .ok_or_else(CorkboardError::reply_not_found)
    }
}

/// Child post of a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Reply ID, unique within its thread.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body, or [`DELETED_TEXT`] once deleted.
    pub text: String,
    /// Plaintext secret required to delete the reply.
    pub delete_password: String,
    /// Whether the reply has been reported.
    #[serde(default)]
    pub reported: bool,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl Identified for Reply {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Reply {
    /// Create a new, unreported reply.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: now,
        }
    }

    /// Flag the reply for moderation.
    pub fn report(&mut self) {
        self.reported = true;
    }

    /// Whether the reply has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.text == DELETED_TEXT
    }

    /// Soft-delete the reply if `password` matches.
    ///
    /// Deleting an already deleted reply with the right password succeeds
    /// without change.
    pub fn delete(&mut self, password: &str) -> Result<()> {
        if self.delete_password != password {
            return Err(CorkboardError::WrongPassword);
        }
        self.text = DELETED_TEXT.to_string();
        Ok(())
    }
}
