//! Document store boundary.
//!
//! Everything the editor persists goes through [`DocumentStore`], a small
//! id-keyed document API: list, get, create, update and delete. Documents
//! reference each other by storing arrays of ids; the store knows nothing
//! about itineraries.
//!
//! Two backends are provided:
//!
//! - [`SqliteStore`]: persistent store in a single SQLite file
//! - [`MemoryStore`]: in-process store that records every call and can
//!   inject failures, used to observe exactly which writes a save issues

use std::fmt;

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::{Fault, MemoryStore, Operation, StoreCall};
pub use sqlite::SqliteStore;

/// Field map of a document.
pub type Fields = Map<String, Value>;

/// Collections the application stores documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Itineraries,
    DayPlans,
    DayItems,
    Activities,
    Hotels,
    Destinations,
    PriceSegments,
    Settings,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Itineraries => "itineraries",
            Collection::DayPlans => "day_plans",
            Collection::DayItems => "day_items",
            Collection::Activities => "activities",
            Collection::Hotels => "hotels",
            Collection::Destinations => "destinations",
            Collection::PriceSegments => "price_segments",
            Collection::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub collection: Collection,
    pub fields: Fields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Id to create a document under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewDocumentId {
    /// Let the store generate a unique id
    Unique,

    /// Use a caller-chosen id; fails with `DocumentExists` if taken
    Given(String),
}

/// Ordering of list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Creation order
    #[default]
    Oldest,

    /// Reverse creation order
    Newest,
}

/// Filters for [`DocumentStore::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Restrict results to these ids; `None` means the whole collection
    pub ids: Option<Vec<String>>,
    pub limit: Option<usize>,
    pub order: ListOrder,
}

impl ListQuery {
    /// Every document in the collection, oldest first.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only the documents whose id is in `ids`.
    pub fn by_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.order = ListOrder::Newest;
        self
    }

    /// Whether a document id passes the id filter.
    pub(crate) fn admits(&self, id: &str) -> bool {
        self.ids
            .as_ref()
            .map_or(true, |ids| ids.iter().any(|candidate| candidate == id))
    }
}

/// Async document store API consumed by the loader, the reconciler and the
/// agency service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists documents of a collection matching `query`.
    async fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Document>>;

    /// Fetches one document; `DocumentNotFound` if it does not exist.
    async fn get(&self, collection: Collection, id: &str) -> Result<Document>;

    /// Creates a document and returns it with its assigned id.
    async fn create(
        &self,
        collection: Collection,
        id: NewDocumentId,
        fields: Fields,
    ) -> Result<Document>;

    /// Merges `fields` into an existing document.
    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> Result<Document>;

    /// Deletes a document; `DocumentNotFound` if it does not exist.
    async fn delete(&self, collection: Collection, id: &str) -> Result<()>;
}
