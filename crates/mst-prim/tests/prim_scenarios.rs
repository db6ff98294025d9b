//! End-to-end stepping scenarios.

use mst_graph::{GraphError, GraphModel, MalformedGraph};
use mst_prim::{PrimStepper, StepAction, StepResult};

fn five_nodes() -> GraphModel {
    GraphModel::from_adjacency([
        ("A", vec![("B", 2.0), ("C", 3.0)]),
        ("B", vec![("A", 2.0), ("C", 1.0), ("D", 1.0)]),
        ("C", vec![("A", 3.0), ("B", 1.0), ("D", 4.0), ("E", 5.0)]),
        ("D", vec![("B", 1.0), ("C", 4.0), ("E", 1.0)]),
        ("E", vec![("C", 5.0), ("D", 1.0)]),
    ])
    .unwrap()
}

fn labelled_tree(graph: &GraphModel, stepper: &PrimStepper<'_>) -> Vec<(String, String)> {
    stepper
        .current_tree()
        .iter()
        .map(|e| (graph.label(e.from).to_string(), graph.label(e.to).to_string()))
        .collect()
}

#[test]
fn five_node_walkthrough_from_a() {
    let graph = five_nodes();
    let mut stepper = PrimStepper::new(&graph, "A").unwrap();

    let expected = [
        "starting from node A",
        "edge added: A --2--> B",
        "edge added: B --1--> C",
        "edge added: B --1--> D",
        "edge added: D --1--> E",
    ];
    for (i, line) in expected.iter().enumerate() {
        match stepper.step() {
            StepResult::Advanced(report) => {
                assert_eq!(report.description, *line);
                assert_eq!(report.visited.len(), i + 1);
                assert_eq!(report.tree.len(), i);
            }
            StepResult::Completed(_) => panic!("completed early at step {i}"),
        }
    }

    let visited: Vec<&str> = stepper
        .current_visited()
        .iter()
        .map(|&id| graph.label(id))
        .collect();
    assert_eq!(visited, ["A", "B", "C", "D", "E"]);

    let done = stepper.step();
    assert!(done.is_completed());
    assert_eq!(done.description(), "minimum spanning tree complete");
    assert!(stepper.is_finished());
    assert_eq!(stepper.tree_weight(), 5.0);
    assert_eq!(
        labelled_tree(&graph, &stepper),
        [
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string()),
            ("B".to_string(), "D".to_string()),
            ("D".to_string(), "E".to_string()),
        ]
    );
}

#[test]
fn completed_is_idempotent() {
    let graph = five_nodes();
    let mut stepper = PrimStepper::new(&graph, "A").unwrap();
    let first = stepper.run_to_completion();

    for _ in 0..3 {
        let again = stepper.step();
        assert!(again.is_completed());
        assert_eq!(again.report(), &first);
        assert_eq!(again.report().action, StepAction::Finished);
    }
    assert_eq!(stepper.current_visited().len(), 5);
    assert_eq!(stepper.current_tree().len(), 4);
}

#[test]
fn visited_grows_by_one_per_advance() {
    let graph = five_nodes();
    let mut stepper = PrimStepper::new(&graph, "D").unwrap();
    let mut previous = 0;
    loop {
        let result = stepper.step();
        let visited = result.report().visited.len();
        if result.is_completed() {
            assert_eq!(visited, previous);
            break;
        }
        assert_eq!(visited, previous + 1);
        let mut seen = result.report().visited.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), visited);
        previous = visited;
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = five_nodes();
    let runs: Vec<_> = (0..4)
        .map(|_| {
            let mut stepper = PrimStepper::new(&graph, "C").unwrap();
            stepper.run_to_completion().tree
        })
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn disconnected_node_is_never_visited() {
    let graph = GraphModel::from_adjacency([
        ("A", vec![("B", 1.0)]),
        ("B", vec![("A", 1.0)]),
        ("C", vec![]),
    ])
    .unwrap();
    let mut stepper = PrimStepper::new(&graph, "A").unwrap();
    let report = stepper.run_to_completion();

    let c = graph.node_id("C").unwrap();
    assert_eq!(report.visited.len(), 2);
    assert!(!stepper.is_visited(c));
    assert_eq!(
        labelled_tree(&graph, &stepper),
        [("A".to_string(), "B".to_string())]
    );
}

#[test]
fn asymmetric_input_never_reaches_the_stepper() {
    let err =
        GraphModel::from_adjacency([("A", vec![("B", 2.0)]), ("B", vec![])]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Malformed(MalformedGraph::Asymmetric { .. })
    ));
}

#[test]
fn equal_weights_follow_discovery_order() {
    // Both B and C are reachable from A at weight 1; B was listed first.
    let graph = GraphModel::from_adjacency([
        ("A", vec![("B", 1.0), ("C", 1.0)]),
        ("B", vec![("A", 1.0)]),
        ("C", vec![("A", 1.0)]),
    ])
    .unwrap();
    let mut stepper = PrimStepper::new(&graph, "A").unwrap();
    stepper.step();
    assert_eq!(stepper.step().description(), "edge added: A --1--> B");
    assert_eq!(stepper.step().description(), "edge added: A --1--> C");
}
