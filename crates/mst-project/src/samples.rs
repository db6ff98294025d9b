//! Built-in sample definitions.

use crate::validate::LATEST_VERSION;
use crate::schema::{GraphDef, NodeDef};

/// The five-node walkthrough graph, started from `A`.
pub fn five_nodes() -> GraphDef {
    GraphDef {
        version: LATEST_VERSION,
        name: "Five node sample".to_string(),
        start: Some("A".to_string()),
        nodes: vec![
            NodeDef::new("A", &[("B", 2.0), ("C", 3.0)]),
            NodeDef::new("B", &[("A", 2.0), ("C", 1.0), ("D", 1.0)]),
            NodeDef::new("C", &[("A", 3.0), ("B", 1.0), ("D", 4.0), ("E", 5.0)]),
            NodeDef::new("D", &[("B", 1.0), ("C", 4.0), ("E", 1.0)]),
            NodeDef::new("E", &[("C", 5.0), ("D", 1.0)]),
        ],
    }
}
