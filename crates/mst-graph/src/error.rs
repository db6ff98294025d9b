//! Graph-specific error types.

use mst_core::{Weight, WeightError};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while building or querying a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A lookup referenced a label that is not a node of the graph.
    #[error("Unknown node: {label}")]
    UnknownNode { label: String },

    /// The adjacency definition is not a valid undirected graph.
    #[error("Malformed graph: {0}")]
    Malformed(#[from] MalformedGraph),
}

impl GraphError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, GraphError::Malformed(_))
    }
}

/// Reasons an adjacency definition is rejected at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedGraph {
    #[error("node {label} is declared more than once")]
    DuplicateNode { label: String },

    #[error("graph has {count} nodes, more than node ids can address")]
    TooManyNodes { count: usize },

    #[error("node {from} lists neighbor {to}, which is not a declared node")]
    DanglingNeighbor { from: String, to: String },

    #[error("edge {from} -> {to}: {source}")]
    InvalidWeight {
        from: String,
        to: String,
        source: WeightError,
    },

    /// `from -> (to, weight)` appears more often than `to -> (from, weight)`.
    #[error("edge {from} -> {to} (weight {weight}) has no matching {to} -> {from} entry")]
    Asymmetric {
        from: String,
        to: String,
        weight: Weight,
    },
}
