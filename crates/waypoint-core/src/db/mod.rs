//! SQLite management for the local document store.
//!
//! This module provides the synchronous, low-level side of
//! [`crate::store::SqliteStore`]: connection setup, schema management and
//! the document queries. Every collection shares one `documents` table and
//! fields are stored as a JSON object.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod document_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
