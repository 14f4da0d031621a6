//! Database schema and migrations for Corkboard.
//!
//! Migrations are applied sequentially when the database is first opened or
//! upgraded.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The schema_version table
/// tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Board documents
    r#"
-- One row per board; threads and replies are embedded in the JSON document
CREATE TABLE boards (
    name        TEXT PRIMARY KEY NOT NULL,
    document    TEXT NOT NULL,
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
];
