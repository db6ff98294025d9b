//! Incremental Prim traversal.

use mst_core::{NodeId, Weight};
use mst_graph::{GraphError, GraphModel, GraphResult};
use tracing::{debug, info};

use crate::frontier::Frontier;
use crate::step::{StepAction, StepReport, StepResult, TreeEdge, WAITING_DESCRIPTION};

/// Runs Prim's algorithm one accepted node at a time.
///
/// The stepper borrows an immutable graph and owns all traversal state. Each
/// call to [`step`](Self::step) pops frontier entries until it finds one that
/// reaches an unvisited node, accepts that node, and returns. Once the
/// frontier is exhausted the stepper is finished and further calls are
/// no-ops that report completion again.
///
/// On completion the tree spans the component reachable from the start node
/// with minimum total weight. Equal-weight candidates are taken in the order
/// they were discovered.
#[derive(Debug, Clone)]
pub struct PrimStepper<'g> {
    graph: &'g GraphModel,
    start: NodeId,
    visited: Vec<bool>,
    order: Vec<NodeId>,
    tree: Vec<TreeEdge>,
    frontier: Frontier,
    description: String,
    finished: bool,
}

impl<'g> PrimStepper<'g> {
    /// Create a stepper rooted at the node labelled `start`.
    pub fn new(graph: &'g GraphModel, start: &str) -> GraphResult<Self> {
        let start = graph.node_id(start)?;
        Ok(Self::rooted(graph, start))
    }

    /// Create a stepper rooted at a node id of `graph`.
    pub fn from_id(graph: &'g GraphModel, start: NodeId) -> GraphResult<Self> {
        if graph.node(start).is_none() {
            return Err(GraphError::UnknownNode {
                label: format!("#{start}"),
            });
        }
        Ok(Self::rooted(graph, start))
    }

    fn rooted(graph: &'g GraphModel, start: NodeId) -> Self {
        Self {
            graph,
            start,
            visited: vec![false; graph.node_count()],
            order: Vec::with_capacity(graph.node_count()),
            tree: Vec::with_capacity(graph.node_count().saturating_sub(1)),
            frontier: Frontier::seeded(start),
            description: WAITING_DESCRIPTION.to_string(),
            finished: false,
        }
    }

    /// Advance by exactly one accepted node, or report completion.
    pub fn step(&mut self) -> StepResult {
        if self.finished {
            return StepResult::Completed(self.report(StepAction::Finished));
        }

        while let Some(entry) = self.frontier.pop() {
            if self.visited[entry.to.slot()] {
                debug!(
                    to = self.graph.label(entry.to),
                    weight = entry.weight,
                    "discarding stale frontier entry"
                );
                continue;
            }

            self.visited[entry.to.slot()] = true;
            self.order.push(entry.to);

            let action = match entry.from {
                Some(from) => {
                    let edge = TreeEdge {
                        from,
                        to: entry.to,
                        weight: entry.weight,
                    };
                    self.tree.push(edge);
                    StepAction::EdgeAdded(edge)
                }
                None => StepAction::Started { node: entry.to },
            };

            for neighbor in self.graph.neighbors(entry.to) {
                if !self.visited[neighbor.node.slot()] {
                    self.frontier
                        .push(neighbor.weight, Some(entry.to), neighbor.node);
                }
            }

            self.description = action.describe(self.graph);
            info!(
                step = self.order.len(),
                frontier = self.frontier.len(),
                "{}",
                self.description
            );
            return StepResult::Advanced(self.report(action));
        }

        self.finished = true;
        self.description = StepAction::Finished.describe(self.graph);
        info!(
            visited = self.order.len(),
            tree_weight = self.tree_weight(),
            "{}",
            self.description
        );
        StepResult::Completed(self.report(StepAction::Finished))
    }

    /// Step until completion and return the final report.
    pub fn run_to_completion(&mut self) -> StepReport {
        loop {
            if let StepResult::Completed(report) = self.step() {
                return report;
            }
        }
    }

    /// Iterator over the remaining `Advanced` reports; stops at completion.
    pub fn steps(&mut self) -> impl Iterator<Item = StepReport> + '_ {
        std::iter::from_fn(move || match self.step() {
            StepResult::Advanced(report) => Some(report),
            StepResult::Completed(_) => None,
        })
    }

    fn report(&self, action: StepAction) -> StepReport {
        StepReport {
            action,
            description: self.description.clone(),
            visited: self.order.clone(),
            tree: self.tree.clone(),
        }
    }

    pub fn graph(&self) -> &'g GraphModel {
        self.graph
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Visited nodes in acceptance order.
    pub fn current_visited(&self) -> &[NodeId] {
        &self.order
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.slot()).copied().unwrap_or(false)
    }

    /// Tree edges in the order they were added.
    pub fn current_tree(&self) -> &[TreeEdge] {
        &self.tree
    }

    /// Description of the most recent step.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sum of tree edge weights; `0.0` (never `-0.0`) for an empty tree.
    pub fn tree_weight(&self) -> Weight {
        self.tree.iter().fold(0.0, |acc, e| acc + e.weight)
    }

    /// True if the tree so far contains an edge joining `u` and `v`.
    pub fn is_tree_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.tree.iter().any(|e| e.connects(u, v))
    }

    /// Pending candidates, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
