//! Label lookup.
//!
//! Maps the opaque node labels supplied by callers onto the contiguous
//! `NodeId`s used internally.

use std::collections::HashMap;

use mst_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Node;

/// Label -> id lookup for a set of nodes.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    by_label: HashMap<String, NodeId>,
}

impl LabelIndex {
    /// Index a slice of nodes. On duplicate labels the first node wins.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut by_label = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_label.entry(node.label.clone()).or_insert(node.id);
        }
        Self { by_label }
    }

    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Like `get`, but reports a missing label as `UnknownNode`.
    pub fn resolve(&self, label: &str) -> GraphResult<NodeId> {
        self.get(label).ok_or_else(|| GraphError::UnknownNode {
            label: label.to_string(),
        })
    }
}
