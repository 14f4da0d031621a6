//! Data Transfer Objects for the board API.
//!
//! Responses reuse the redacted views from [`crate::board`].

pub mod request;
pub mod validation;

pub use request::*;
pub use validation::ValidatedPayload;
