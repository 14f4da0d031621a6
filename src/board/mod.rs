//! Board module for Corkboard.
//!
//! This module provides the message board core:
//! - The board document model (boards embedding threads embedding replies)
//! - Redacted public views and the recent-threads listing
//! - Document persistence
//! - Thread and reply operations with password-gated deletion

mod collection;
mod repository;
mod service;
mod types;
mod view;

pub use collection::{Identified, OrderedCollection};
pub use repository::BoardRepository;
pub use service::BoardService;
pub use types::{Board, Reply, Thread, DELETED_TEXT};
pub use view::{recent_threads, ReplyView, ThreadView, RECENT_REPLY_LIMIT, RECENT_THREAD_LIMIT};
