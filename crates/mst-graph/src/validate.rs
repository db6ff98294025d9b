//! Graph validation logic.

use std::collections::{HashMap, HashSet};

use mst_core::NodeId;

use crate::error::MalformedGraph;
use crate::graph::{Neighbor, Node};

/// Each label may be declared once.
pub(crate) fn validate_unique_labels(labels: &[String]) -> Result<(), MalformedGraph> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(MalformedGraph::DuplicateNode {
                label: label.clone(),
            });
        }
    }
    Ok(())
}

/// Every `u -> (v, w)` must be matched by a `v -> (u, w)`, counting
/// repeated entries. Weights are compared bit-for-bit; callers fold `-0.0`
/// beforehand.
pub(crate) fn validate_symmetry(
    nodes: &[Node],
    neighbor_offsets: &[usize],
    neighbors: &[Neighbor],
) -> Result<(), MalformedGraph> {
    let entries = || {
        nodes.iter().flat_map(move |node| {
            let idx = node.id.slot();
            neighbors[neighbor_offsets[idx]..neighbor_offsets[idx + 1]]
                .iter()
                .map(move |n| (node.id, *n))
        })
    };

    // Positive balance: more u -> v than v -> u.
    let mut balance: HashMap<(NodeId, NodeId, u64), i64> = HashMap::new();
    for (from, n) in entries() {
        let bits = n.weight.to_bits();
        *balance.entry((from, n.node, bits)).or_insert(0) += 1;
        *balance.entry((n.node, from, bits)).or_insert(0) -= 1;
    }

    // Report the first offending entry in declaration order.
    for (from, n) in entries() {
        if balance[&(from, n.node, n.weight.to_bits())] > 0 {
            return Err(MalformedGraph::Asymmetric {
                from: nodes[from.slot()].label.clone(),
                to: nodes[n.node.slot()].label.clone(),
                weight: n.weight,
            });
        }
    }

    Ok(())
}
