//! Incremental graph builder.

use std::collections::HashMap;

use mst_core::{NodeId, Weight, check_weight};
use tracing::debug;

use crate::error::{GraphResult, MalformedGraph};
use crate::graph::{GraphModel, Neighbor, Node};
use crate::indexing::LabelIndex;
use crate::validate;

/// A neighbor entry whose target label is resolved at build time, so
/// adjacency lists may mention nodes declared later.
#[derive(Debug, Clone)]
struct PendingNeighbor {
    from: NodeId,
    to: String,
    weight: Weight,
}

/// Id for the node stored at `slot`, rejecting counts past the id range.
fn id_for_slot(slot: usize) -> Result<NodeId, MalformedGraph> {
    NodeId::from_slot(slot).ok_or(MalformedGraph::TooManyNodes {
        count: slot.saturating_add(1),
    })
}

/// Builder for constructing a graph incrementally.
///
/// Use `add_adjacency` to declare a node together with its adjacency list
/// (mirroring a label -> neighbors mapping), or `add_edge` to add both
/// directions of an undirected edge at once. Then call `build()` to validate
/// and freeze the result into an immutable `GraphModel`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    first_declared: HashMap<String, NodeId>,
    pending: Vec<PendingNeighbor>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node and return its id.
    ///
    /// Declaring the same label twice is reported by `build()`.
    pub fn add_node(&mut self, label: impl Into<String>) -> GraphResult<NodeId> {
        let label = label.into();
        let id = id_for_slot(self.labels.len())?;
        self.first_declared.entry(label.clone()).or_insert(id);
        self.labels.push(label);
        Ok(id)
    }

    /// Id of an already declared node, declaring it if needed.
    pub fn ensure_node(&mut self, label: &str) -> GraphResult<NodeId> {
        match self.first_declared.get(label) {
            Some(&id) => Ok(id),
            None => self.add_node(label),
        }
    }

    /// Append one directed adjacency entry `from -> (to, weight)`.
    ///
    /// `from` must be an id returned by this builder.
    pub fn add_neighbor(&mut self, from: NodeId, to: impl Into<String>, weight: Weight) {
        self.pending.push(PendingNeighbor {
            from,
            to: to.into(),
            weight,
        });
    }

    /// Declare a node with its full adjacency list.
    pub fn add_adjacency<N, M>(
        &mut self,
        label: impl Into<String>,
        neighbors: N,
    ) -> GraphResult<NodeId>
    where
        N: IntoIterator<Item = (M, Weight)>,
        M: Into<String>,
    {
        let id = self.add_node(label)?;
        for (to, weight) in neighbors {
            self.add_neighbor(id, to, weight);
        }
        Ok(id)
    }

    /// Add an undirected edge, writing both adjacency entries.
    ///
    /// Endpoints are declared on first mention. A self-loop is written once.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> GraphResult<()> {
        let ia = self.ensure_node(a)?;
        let ib = self.ensure_node(b)?;
        self.add_neighbor(ia, b, weight);
        if ia != ib {
            self.add_neighbor(ib, a, weight);
        }
        Ok(())
    }

    /// Build and validate the graph, returning an immutable `GraphModel`.
    pub fn build(self) -> GraphResult<GraphModel> {
        validate::validate_unique_labels(&self.labels)?;

        let nodes = self
            .labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                Ok(Node {
                    id: id_for_slot(i)?,
                    label,
                })
            })
            .collect::<Result<Vec<Node>, MalformedGraph>>()?;
        let index = LabelIndex::from_nodes(&nodes);

        let mut per_node: Vec<Vec<Neighbor>> = vec![Vec::new(); nodes.len()];
        for entry in self.pending {
            let from_label = &nodes[entry.from.slot()].label;
            let to = index
                .get(&entry.to)
                .ok_or_else(|| MalformedGraph::DanglingNeighbor {
                    from: from_label.clone(),
                    to: entry.to.clone(),
                })?;
            let weight =
                check_weight(entry.weight).map_err(|source| MalformedGraph::InvalidWeight {
                    from: from_label.clone(),
                    to: entry.to.clone(),
                    source,
                })?;
            per_node[entry.from.slot()].push(Neighbor { node: to, weight });
        }

        let (neighbor_offsets, neighbors) = Self::build_adjacency(per_node);
        validate::validate_symmetry(&nodes, &neighbor_offsets, &neighbors)?;

        debug!(
            nodes = nodes.len(),
            entries = neighbors.len(),
            "graph model built"
        );

        Ok(GraphModel {
            nodes,
            index,
            neighbor_offsets,
            neighbors,
        })
    }

    /// Flatten per-node lists into offsets + one contiguous vector.
    fn build_adjacency(per_node: Vec<Vec<Neighbor>>) -> (Vec<usize>, Vec<Neighbor>) {
        let mut offsets = Vec::with_capacity(per_node.len() + 1);
        let mut flat = Vec::with_capacity(per_node.iter().map(Vec::len).sum());
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }
        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_assigns_ids_in_order() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("A").unwrap();
        let b = builder.add_node("B").unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(builder.ensure_node("A").unwrap(), a);
        assert_eq!(builder.ensure_node("C").unwrap().index(), 2);
    }

    #[test]
    fn node_count_past_id_range_is_malformed() {
        assert_eq!(id_for_slot(3), Ok(NodeId::from_index(3)));
        assert!(matches!(
            id_for_slot(u32::MAX as usize),
            Err(MalformedGraph::TooManyNodes { .. })
        ));
        assert!(matches!(
            id_for_slot(usize::MAX),
            Err(MalformedGraph::TooManyNodes { count: usize::MAX })
        ));
    }

    #[test]
    fn forward_references_resolve() {
        let mut builder = GraphBuilder::new();
        builder.add_adjacency("A", [("B", 2.0)]).unwrap();
        builder.add_adjacency("B", [("A", 2.0)]).unwrap();
        let graph = builder.build().unwrap();
        let b = graph.node_id("B").unwrap();
        assert_eq!(graph.neighbors_of("A").unwrap()[0].node, b);
    }

    #[test]
    fn add_edge_writes_both_directions() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("X", "Y", 5.0).unwrap();
        builder.add_edge("Y", "Y", 1.0).unwrap();
        let graph = builder.build().unwrap();
        assert_eq!(graph.neighbors_of("X").unwrap().len(), 1);
        assert_eq!(graph.neighbors_of("Y").unwrap().len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn dangling_neighbor_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_adjacency("A", [("Q", 1.0)]).unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            GraphError::Malformed(MalformedGraph::DanglingNeighbor {
                from: "A".into(),
                to: "Q".into(),
            })
        );
    }

    #[test]
    fn negative_weight_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", -1.0).unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            GraphError::Malformed(MalformedGraph::InvalidWeight { .. })
        ));
    }

    #[test]
    fn duplicate_declaration_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A").unwrap();
        builder.add_node("A").unwrap();
        assert!(builder.build().unwrap_err().is_malformed());
    }

    #[test]
    fn empty_builder_builds_empty_graph() {
        let graph = GraphBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
