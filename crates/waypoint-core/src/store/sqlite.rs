//! Document store backed by a local SQLite file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;

use super::{Collection, Document, DocumentStore, Fields, ListQuery, NewDocumentId};
use crate::{
    db::Database,
    error::{Result, ResultExt, WaypointError},
};

/// [`DocumentStore`] over a SQLite database.
///
/// Each call opens its own connection on the blocking thread pool, so the
/// store can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed initializes) the database at `path`.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WaypointError>(())
        })
        .await
        .with_context("Task join error")??;

        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .with_context("Task join error")?
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Document>> {
        let query = query.clone();
        self.run(move |db| db.list_documents(collection, &query)).await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document> {
        let id = id.to_string();
        self.run(move |db| {
            db.get_document(collection, &id)?
                .ok_or(WaypointError::DocumentNotFound { collection, id })
        })
        .await
    }

    async fn create(
        &self,
        collection: Collection,
        id: NewDocumentId,
        fields: Fields,
    ) -> Result<Document> {
        self.run(move |db| db.insert_document(collection, &id, fields))
            .await
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> Result<Document> {
        let id = id.to_string();
        self.run(move |db| db.update_document(collection, &id, fields))
            .await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |db| db.delete_document(collection, &id)).await
    }
}
