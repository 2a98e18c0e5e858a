//! In-process document store with a call log and fault injection.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use jiff::Timestamp;

use super::{
    Collection, Document, DocumentStore, Fields, ListOrder, ListQuery, NewDocumentId,
};
use crate::error::{Result, WaypointError};

/// Kind of store operation, used to match calls and faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// One recorded call against the store, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List {
        collection: Collection,
    },
    Get {
        collection: Collection,
        id: String,
    },
    Create {
        collection: Collection,
        id: String,
        fields: Fields,
    },
    Update {
        collection: Collection,
        id: String,
        fields: Fields,
    },
    Delete {
        collection: Collection,
        id: String,
    },
}

impl StoreCall {
    pub fn operation(&self) -> Operation {
        match self {
            StoreCall::List { .. } => Operation::List,
            StoreCall::Get { .. } => Operation::Get,
            StoreCall::Create { .. } => Operation::Create,
            StoreCall::Update { .. } => Operation::Update,
            StoreCall::Delete { .. } => Operation::Delete,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            StoreCall::List { collection }
            | StoreCall::Get { collection, .. }
            | StoreCall::Create { collection, .. }
            | StoreCall::Update { collection, .. }
            | StoreCall::Delete { collection, .. } => *collection,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            StoreCall::List { .. } => None,
            StoreCall::Get { id, .. }
            | StoreCall::Create { id, .. }
            | StoreCall::Update { id, .. }
            | StoreCall::Delete { id, .. } => Some(id),
        }
    }

    pub fn fields(&self) -> Option<&Fields> {
        match self {
            StoreCall::Create { fields, .. } | StoreCall::Update { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// True for create, update and delete.
    pub fn is_write(&self) -> bool {
        matches!(
            self.operation(),
            Operation::Create | Operation::Update | Operation::Delete
        )
    }
}

/// A failure to inject into matching calls.
///
/// ```rust
/// use waypoint_core::store::{Collection, Fault, MemoryStore, Operation};
///
/// let store = MemoryStore::new();
/// store.inject(Fault::on(Operation::Delete, Collection::DayItems).for_id("item-1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    operation: Operation,
    collection: Collection,
    id: Option<String>,
    remaining: Option<usize>,
    after_commit: bool,
}

impl Fault {
    /// Fails every `operation` on `collection` until cleared.
    pub fn on(operation: Operation, collection: Collection) -> Self {
        Self {
            operation,
            collection,
            id: None,
            remaining: None,
            after_commit: false,
        }
    }

    /// Restricts the fault to one document id.
    pub fn for_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Fires only for the next matching call.
    pub fn once(mut self) -> Self {
        self.remaining = Some(1);
        self
    }

    /// Applies the operation before reporting failure, like a write whose
    /// response was lost.
    pub fn after_commit(mut self) -> Self {
        self.after_commit = true;
        self
    }

    fn matches(&self, call: &StoreCall) -> bool {
        self.operation == call.operation()
            && self.collection == call.collection()
            && self.remaining != Some(0)
            && match (&self.id, call.id()) {
                (Some(expected), Some(actual)) => expected == actual,
                (Some(_), None) => false,
                (None, _) => true,
            }
    }
}

#[derive(Debug, Default)]
struct State {
    documents: Vec<Document>,
    calls: Vec<StoreCall>,
    faults: Vec<Fault>,
    next_id: u64,
}

impl State {
    fn position(&self, collection: Collection, id: &str) -> Option<usize> {
        self.documents
            .iter()
            .position(|d| d.collection == collection && d.id == id)
    }

    /// Records the call and returns the fault that fires for it, if any.
    fn record(&mut self, call: StoreCall) -> Option<Fault> {
        let fault = self.faults.iter_mut().find(|f| f.matches(&call)).map(|f| {
            if let Some(remaining) = f.remaining.as_mut() {
                *remaining -= 1;
            }
            f.clone()
        });
        self.calls.push(call);
        fault
    }
}

/// Document store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document directly, bypassing the call log.
    pub fn seed(&self, collection: Collection, id: &str, fields: Fields) {
        let now = Timestamp::now();
        let mut state = self.lock();
        if let Some(position) = state.position(collection, id) {
            state.documents.remove(position);
        }
        state.documents.push(Document {
            id: id.to_string(),
            collection,
            fields,
            created_at: now,
            updated_at: now,
        });
    }

    /// Looks a document up directly, bypassing the call log.
    pub fn document(&self, collection: Collection, id: &str) -> Option<Document> {
        let state = self.lock();
        state
            .position(collection, id)
            .map(|p| state.documents[p].clone())
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.lock()
            .documents
            .iter()
            .filter(|d| d.collection == collection)
            .count()
    }

    pub fn inject(&self, fault: Fault) {
        self.lock().faults.push(fault);
    }

    pub fn clear_faults(&self) {
        self.lock().faults.clear();
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Only create, update and delete calls, in order.
    pub fn writes(&self) -> Vec<StoreCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.is_write())
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn injected(call: &StoreCall) -> WaypointError {
    WaypointError::store(format!(
        "injected {:?} failure on {}{}",
        call.operation(),
        call.collection(),
        call.id().map(|id| format!("/{id}")).unwrap_or_default()
    ))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Document>> {
        let mut state = self.lock();
        let call = StoreCall::List { collection };
        if state.record(call.clone()).is_some() {
            return Err(injected(&call));
        }

        let mut docs: Vec<Document> = state
            .documents
            .iter()
            .filter(|d| d.collection == collection && query.admits(&d.id))
            .cloned()
            .collect();
        if query.order == ListOrder::Newest {
            docs.reverse();
        }
        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }
        Ok(docs)
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Document> {
        let mut state = self.lock();
        let call = StoreCall::Get {
            collection,
            id: id.to_string(),
        };
        if state.record(call.clone()).is_some() {
            return Err(injected(&call));
        }

        state
            .position(collection, id)
            .map(|p| state.documents[p].clone())
            .ok_or_else(|| WaypointError::DocumentNotFound {
                collection,
                id: id.to_string(),
            })
    }

    async fn create(
        &self,
        collection: Collection,
        id: NewDocumentId,
        fields: Fields,
    ) -> Result<Document> {
        let mut state = self.lock();
        let id = match id {
            NewDocumentId::Given(id) => id,
            NewDocumentId::Unique => {
                state.next_id += 1;
                format!("doc-{:04}", state.next_id)
            }
        };
        let call = StoreCall::Create {
            collection,
            id: id.clone(),
            fields: fields.clone(),
        };
        let fault = state.record(call.clone());
        if matches!(&fault, Some(f) if !f.after_commit) {
            return Err(injected(&call));
        }

        if state.position(collection, &id).is_some() {
            return Err(WaypointError::DocumentExists { collection, id });
        }

        let now = Timestamp::now();
        let document = Document {
            id,
            collection,
            fields,
            created_at: now,
            updated_at: now,
        };
        state.documents.push(document.clone());

        match fault {
            Some(_) => Err(injected(&call)),
            None => Ok(document),
        }
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> Result<Document> {
        let mut state = self.lock();
        let call = StoreCall::Update {
            collection,
            id: id.to_string(),
            fields: fields.clone(),
        };
        let fault = state.record(call.clone());
        if matches!(&fault, Some(f) if !f.after_commit) {
            return Err(injected(&call));
        }

        let position =
            state
                .position(collection, id)
                .ok_or_else(|| WaypointError::DocumentNotFound {
                    collection,
                    id: id.to_string(),
                })?;
        let document = &mut state.documents[position];
        document.fields.extend(fields);
        document.updated_at = Timestamp::now();
        let document = document.clone();

        match fault {
            Some(_) => Err(injected(&call)),
            None => Ok(document),
        }
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<()> {
        let mut state = self.lock();
        let call = StoreCall::Delete {
            collection,
            id: id.to_string(),
        };
        let fault = state.record(call.clone());
        if matches!(&fault, Some(f) if !f.after_commit) {
            return Err(injected(&call));
        }

        let position =
            state
                .position(collection, id)
                .ok_or_else(|| WaypointError::DocumentNotFound {
                    collection,
                    id: id.to_string(),
                })?;
        state.documents.remove(position);

        match fault {
            Some(_) => Err(injected(&call)),
            None => Ok(()),
        }
    }
}
