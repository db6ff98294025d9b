//! mst-graph: immutable weighted undirected graph model.
//!
//! Provides:
//! - Core graph data structures (Node, Neighbor, Edge, GraphModel)
//! - Incremental graph builder with symmetry/weight validation
//! - Label index mapping node labels to compact ids
//!
//! # Example
//!
//! ```
//! use mst_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B", 2.0).unwrap();
//! builder.add_edge("B", "C", 1.0).unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.neighbors_of("B").unwrap().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult, MalformedGraph};
pub use graph::{Edge, GraphModel, Neighbor, Node};
pub use indexing::LabelIndex;
pub use mst_core::{NodeId, Weight};
