//! Node identifiers for the itinerary graph.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix used when a local marker is rendered as text.
pub const LOCAL_MARKER_PREFIX: &str = "local-";

/// Identity of a day-plan or item in the in-memory graph.
///
/// A node is either already stored under a store-assigned id, or it was
/// created locally and carries a client-generated marker until the next
/// successful save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum NodeId {
    /// Stored in the document store under this id
    Persisted(String),

    /// Created in the editor, not yet written to the store
    Local(Uuid),
}

impl NodeId {
    /// Generates a fresh local marker.
    pub fn local() -> Self {
        NodeId::Local(Uuid::new_v4())
    }

    /// Wraps a store-assigned id.
    pub fn persisted(id: impl Into<String>) -> Self {
        NodeId::Persisted(id.into())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, NodeId::Local(_))
    }

    /// The store id, if this node has been persisted.
    pub fn persisted_id(&self) -> Option<&str> {
        match self {
            NodeId::Persisted(id) => Some(id),
            NodeId::Local(_) => None,
        }
    }

    /// The document id a create call should use for this node.
    ///
    /// Local markers map to their UUID so that repeating a create after a
    /// lost response targets the same document.
    pub fn document_key(&self) -> String {
        match self {
            NodeId::Persisted(id) => id.clone(),
            NodeId::Local(uuid) => uuid.simple().to_string(),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Persisted(id) => f.write_str(id),
            NodeId::Local(uuid) => write!(f, "{LOCAL_MARKER_PREFIX}{uuid}"),
        }
    }
}
