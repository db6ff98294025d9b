//! mst-prim: incremental Prim's algorithm.
//!
//! Provides:
//! - `Frontier`: min-first candidate edge queue with lazy deletion
//! - `PrimStepper`: advances the minimum spanning tree one node per call
//! - Step reports describing each accepted node for a presentation layer
//!
//! # Example
//!
//! ```
//! use mst_graph::GraphModel;
//! use mst_prim::{PrimStepper, StepResult};
//!
//! let graph = GraphModel::from_adjacency([
//!     ("A", vec![("B", 2.0)]),
//!     ("B", vec![("A", 2.0)]),
//! ])
//! .unwrap();
//!
//! let mut stepper = PrimStepper::new(&graph, "A").unwrap();
//! assert_eq!(stepper.step().description(), "starting from node A");
//! assert_eq!(stepper.step().description(), "edge added: A --2--> B");
//! assert!(matches!(stepper.step(), StepResult::Completed(_)));
//! assert_eq!(stepper.tree_weight(), 2.0);
//! ```

pub mod frontier;
pub mod step;
pub mod stepper;

pub use frontier::{Frontier, FrontierEntry};
pub use step::{StepAction, StepReport, StepResult, TreeEdge};
pub use stepper::PrimStepper;
