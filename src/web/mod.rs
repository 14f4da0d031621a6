//! Web API module for Corkboard.
//!
//! This module provides the JSON/form HTTP surface for boards, threads and
//! replies.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_health_router, create_router};
pub use server::{shutdown_signal, WebServer};
