//! Core graph data structures.

use mst_core::{NodeId, Weight};

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::indexing::LabelIndex;

/// A labelled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
}

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}

/// A logical undirected edge, reported once regardless of how many
/// adjacency lists mention it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: Weight,
}

/// A validated, immutable weighted undirected graph.
///
/// Stores:
/// - All nodes in a vector indexed by their ids.
/// - Compact adjacency: for each node, its neighbors in declaration order.
///
/// Construction guarantees that every weight is finite and non-negative and
/// that every `u -> (v, w)` entry has a matching `v -> (u, w)` entry.
#[derive(Debug, Clone)]
pub struct GraphModel {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: LabelIndex,

    /// Node i's neighbors are in neighbors[neighbor_offsets[i]..neighbor_offsets[i+1]].
    pub(crate) neighbor_offsets: Vec<usize>,
    pub(crate) neighbors: Vec<Neighbor>,
}

impl GraphModel {
    /// Build a graph from a label -> `[(neighbor label, weight)]` mapping.
    ///
    /// Node ids follow the order of the outer iterator.
    pub fn from_adjacency<I, L, N, M>(adjacency: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (L, N)>,
        L: Into<String>,
        N: IntoIterator<Item = (M, Weight)>,
        M: Into<String>,
    {
        let mut builder = GraphBuilder::new();
        for (label, neighbors) in adjacency {
            builder.add_adjacency(label, neighbors)?;
        }
        builder.build()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by id (returns None if id out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Label of a node (panics if the id did not come from this graph).
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.slot()].label
    }

    pub fn has_node(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    /// Resolve a label to its id.
    pub fn node_id(&self, label: &str) -> GraphResult<NodeId> {
        self.index.resolve(label)
    }

    /// Neighbors of a node in declaration order (empty if id out of bounds).
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        let idx = id.slot();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.neighbor_offsets[idx];
        let end = self.neighbor_offsets[idx + 1];
        &self.neighbors[start..end]
    }

    /// Neighbors of the node with the given label.
    pub fn neighbors_of(&self, label: &str) -> GraphResult<&[Neighbor]> {
        let id = self.index.resolve(label)?;
        Ok(self.neighbors(id))
    }

    /// Every logical edge once, ordered by lower endpoint then adjacency order.
    ///
    /// Symmetry means each `u -> v` entry with `u < v` has exactly one partner
    /// `v -> u`, so keeping the `u <= v` half yields each edge once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().flat_map(move |node| {
            self.neighbors(node.id)
                .iter()
                .filter(move |n| node.id <= n.node)
                .map(move |n| Edge {
                    a: node.id,
                    b: n.node,
                    weight: n.weight,
                })
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> GraphModel {
        GraphModel::from_adjacency([
            ("A", vec![("B", 1.0), ("C", 4.0)]),
            ("B", vec![("A", 1.0), ("C", 2.0)]),
            ("C", vec![("A", 4.0), ("B", 2.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn neighbors_keep_declaration_order() {
        let graph = triangle();
        let c = graph.node_id("C").unwrap();
        let labels: Vec<&str> = graph
            .neighbors(c)
            .iter()
            .map(|n| graph.label(n.node))
            .collect();
        assert_eq!(labels, ["A", "B"]);
    }

    #[test]
    fn edges_are_deduplicated() {
        let graph = triangle();
        let edges: Vec<(&str, &str, Weight)> = graph
            .edges()
            .map(|e| (graph.label(e.a), graph.label(e.b), e.weight))
            .collect();
        assert_eq!(edges, [("A", "B", 1.0), ("A", "C", 4.0), ("B", "C", 2.0)]);
    }

    #[test]
    fn out_of_bounds_id_has_no_neighbors() {
        let graph = triangle();
        assert!(graph.neighbors(NodeId::from_index(99)).is_empty());
        assert!(graph.node(NodeId::from_index(99)).is_none());
    }
}
