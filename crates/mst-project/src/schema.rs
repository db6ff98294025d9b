//! Graph definition file schema.

use serde::{Deserialize, Serialize};

/// A named, versioned adjacency definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDef {
    pub version: u32,
    pub name: String,
    /// Default start node for stepping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(default)]
    pub neighbors: Vec<NeighborDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeighborDef {
    pub node: String,
    pub weight: f64,
}

impl GraphDef {
    /// The configured start node, falling back to the first declared node.
    pub fn start_or_first(&self) -> Option<&str> {
        self.start
            .as_deref()
            .or_else(|| self.nodes.first().map(|n| n.id.as_str()))
    }
}

impl NodeDef {
    pub fn new(id: impl Into<String>, neighbors: &[(&str, f64)]) -> Self {
        Self {
            id: id.into(),
            neighbors: neighbors
                .iter()
                .map(|&(node, weight)| NeighborDef {
                    node: node.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}
