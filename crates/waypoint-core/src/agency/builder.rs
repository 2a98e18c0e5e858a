//! Builder for creating and configuring Agency instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Agency;
use crate::{
    error::{Result, WaypointError},
    store::{DocumentStore, SqliteStore},
};

/// Builder for creating and configuring Agency instances.
#[derive(Clone, Default)]
pub struct AgencyBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl AgencyBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an existing store instead of opening a database.
    ///
    /// Takes precedence over any database path.
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured agency instance.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the database directory cannot
    /// be created, `WaypointError::XdgDirectory` if no default location is
    /// available, and `WaypointError::Database` if database initialization
    /// fails
    pub async fn build(self) -> Result<Agency> {
        if let Some(store) = self.store {
            return Ok(Agency::new(store));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening document store at {}", db_path.display());
        let store = SqliteStore::open(&db_path).await?;
        Ok(Agency::new(Arc::new(store)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}
