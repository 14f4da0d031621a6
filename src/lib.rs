//! Corkboard - an anonymous message board backend.
//!
//! Boards hold threads, threads hold replies. Everything is stored as one
//! JSON document per board and served over a small HTTP API.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{Board, BoardRepository, BoardService, Reply, ReplyView, Thread, ThreadView};
pub use config::Config;
pub use db::Database;
pub use error::{CorkboardError, Result};
pub use web::WebServer;
