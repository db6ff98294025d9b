//! Per-step results handed to the presentation layer.

use mst_core::{NodeId, Weight};
use mst_graph::GraphModel;

pub(crate) const WAITING_DESCRIPTION: &str = "waiting to start";

/// An accepted spanning tree edge, oriented from the already visited node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl TreeEdge {
    /// True if this edge joins `u` and `v` in either direction.
    pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
        (self.from == u && self.to == v) || (self.from == v && self.to == u)
    }
}

/// What a single `step()` call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepAction {
    /// The root node was accepted; no edge was added.
    Started { node: NodeId },
    /// A node was accepted through this edge.
    EdgeAdded(TreeEdge),
    /// The frontier is exhausted.
    Finished,
}

impl StepAction {
    /// Human-readable line for this action, using the graph's labels.
    pub fn describe(&self, graph: &GraphModel) -> String {
        match *self {
            StepAction::Started { node } => format!("starting from node {}", graph.label(node)),
            StepAction::EdgeAdded(edge) => format!(
                "edge added: {} --{}--> {}",
                graph.label(edge.from),
                edge.weight,
                graph.label(edge.to)
            ),
            StepAction::Finished => "minimum spanning tree complete".to_string(),
        }
    }
}

/// Snapshot of the stepper after a call to `step()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub action: StepAction,
    pub description: String,
    /// Visited nodes in acceptance order.
    pub visited: Vec<NodeId>,
    /// Tree edges in the order they were added.
    pub tree: Vec<TreeEdge>,
}

/// Outcome of `PrimStepper::step`.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Exactly one new node was visited.
    Advanced(StepReport),
    /// Nothing left to visit; repeated calls keep returning this.
    Completed(StepReport),
}

impl StepResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepResult::Completed(_))
    }

    pub fn report(&self) -> &StepReport {
        match self {
            StepResult::Advanced(report) | StepResult::Completed(report) => report,
        }
    }

    pub fn into_report(self) -> StepReport {
        match self {
            StepResult::Advanced(report) | StepResult::Completed(report) => report,
        }
    }

    pub fn description(&self) -> &str {
        &self.report().description
    }
}
