//! Plain-text rendering of graph and stepper state.

use mst_graph::GraphModel;
use mst_prim::PrimStepper;

/// One line per logical edge. Tree edges are marked when a stepper is given.
pub fn edges(graph: &GraphModel, stepper: Option<&PrimStepper<'_>>) -> String {
    let mut out = String::new();
    for edge in graph.edges() {
        let in_tree = stepper.is_some_and(|s| s.is_tree_edge(edge.a, edge.b));
        let marker = if in_tree { "  [tree]" } else { "" };
        out.push_str(&format!(
            "  {} -- {}  ({}){}\n",
            graph.label(edge.a),
            graph.label(edge.b),
            edge.weight,
            marker
        ));
    }
    out
}

/// Visited set and running tree weight on one line.
pub fn state(stepper: &PrimStepper<'_>) -> String {
    let graph = stepper.graph();
    let visited: Vec<&str> = stepper
        .current_visited()
        .iter()
        .map(|&id| graph.label(id))
        .collect();
    format!(
        "visited: [{}]  tree weight: {}",
        visited.join(", "),
        stepper.tree_weight()
    )
}
