//! Document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    store::{Collection, Document, Fields, ListOrder, ListQuery, NewDocumentId},
};

const SELECT_COLUMNS: &str = "SELECT id, data, created_at, updated_at FROM documents";
const CHECK_DOCUMENT_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM documents WHERE collection = ?1 AND id = ?2)";
const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (collection, id, data, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_DOCUMENT_SQL: &str = "SELECT id, data, created_at, updated_at FROM documents WHERE collection = ?1 AND id = ?2";
const UPDATE_DOCUMENT_SQL: &str =
    "UPDATE documents SET data = ?1, updated_at = ?2 WHERE collection = ?3 AND id = ?4";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE collection = ?1 AND id = ?2";

impl super::Database {
    /// Helper function to construct a Document from a database row
    fn build_document_from_row(
        collection: Collection,
        row: &rusqlite::Row,
    ) -> rusqlite::Result<Document> {
        let data: String = row.get(1)?;
        let fields: Fields = serde_json::from_str(&data)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

        Ok(Document {
            id: row.get(0)?,
            collection,
            fields,
            created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Lists documents in creation order (or reverse), optionally filtered
    /// by id.
    pub fn list_documents(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Document>> {
        let direction = match query.order {
            ListOrder::Oldest => "ASC",
            ListOrder::Newest => "DESC",
        };
        // SQLite treats a negative limit as "no limit".
        let limit = query.limit.map(|l| l as i64).unwrap_or(-1);

        let mut docs = Vec::new();
        match &query.ids {
            Some(ids) => {
                let ids_json = serde_json::to_string(ids)?;
                let sql = format!(
                    "{SELECT_COLUMNS} WHERE collection = ?1 AND id IN (SELECT value FROM json_each(?2)) ORDER BY seq {direction} LIMIT ?3"
                );
                let mut stmt = self
                    .connection
                    .prepare(&sql)
                    .db_context("Failed to prepare document query")?;
                let rows = stmt
                    .query_map(params![collection.as_str(), ids_json, limit], |row| {
                        Self::build_document_from_row(collection, row)
                    })
                    .db_context("Failed to query documents")?;
                for row in rows {
                    docs.push(row.db_context("Failed to read document row")?);
                }
            }
            None => {
                let sql = format!(
                    "{SELECT_COLUMNS} WHERE collection = ?1 ORDER BY seq {direction} LIMIT ?2"
                );
                let mut stmt = self
                    .connection
                    .prepare(&sql)
                    .db_context("Failed to prepare document query")?;
                let rows = stmt
                    .query_map(params![collection.as_str(), limit], |row| {
                        Self::build_document_from_row(collection, row)
                    })
                    .db_context("Failed to query documents")?;
                for row in rows {
                    docs.push(row.db_context("Failed to read document row")?);
                }
            }
        }

        Ok(docs)
    }

    /// Retrieves a single document by id.
    pub fn get_document(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        self.connection
            .query_row(SELECT_DOCUMENT_SQL, params![collection.as_str(), id], |row| {
                Self::build_document_from_row(collection, row)
            })
            .optional()
            .db_context("Failed to get document")
    }

    /// Inserts a new document, generating an id when none is given.
    pub fn insert_document(
        &mut self,
        collection: Collection,
        id: &NewDocumentId,
        fields: Fields,
    ) -> Result<Document> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = match id {
            NewDocumentId::Given(id) => id.clone(),
            NewDocumentId::Unique => Uuid::new_v4().simple().to_string(),
        };

        let exists: bool = tx
            .query_row(CHECK_DOCUMENT_EXISTS_SQL, params![collection.as_str(), &id], |row| {
                row.get(0)
            })
            .db_context("Failed to check document existence")?;
        if exists {
            return Err(WaypointError::DocumentExists { collection, id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();
        let data = serde_json::to_string(&fields)?;

        tx.execute(
            INSERT_DOCUMENT_SQL,
            params![collection.as_str(), &id, data, &now_str, &now_str],
        )
        .db_context("Failed to insert document")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Document {
            id,
            collection,
            fields,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges `fields` into an existing document.
    pub fn update_document(
        &mut self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<Document> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing = tx
            .query_row(SELECT_DOCUMENT_SQL, params![collection.as_str(), id], |row| {
                Self::build_document_from_row(collection, row)
            })
            .optional()
            .db_context("Failed to load document for update")?;

        let mut document = existing.ok_or_else(|| WaypointError::DocumentNotFound {
            collection,
            id: id.to_string(),
        })?;

        document.fields.extend(fields);
        document.updated_at = Timestamp::now();
        let data = serde_json::to_string(&document.fields)?;

        tx.execute(
            UPDATE_DOCUMENT_SQL,
            params![
                data,
                document.updated_at.to_string(),
                collection.as_str(),
                id
            ],
        )
        .db_context("Failed to update document")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(document)
    }

    /// Deletes a document by id.
    pub fn delete_document(&mut self, collection: Collection, id: &str) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_DOCUMENT_SQL, params![collection.as_str(), id])
            .db_context("Failed to delete document")?;

        if rows == 0 {
            return Err(WaypointError::DocumentNotFound {
                collection,
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
