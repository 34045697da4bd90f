use path_search::graph::{AdjacencyList, Graph, Neighbors, WeightedEdges, WeightedGraph};
use path_search::Error;

#[test]
fn test_adjacency_list_keeps_order_and_duplicates() {
    let mut graph = AdjacencyList::new();
    graph.add_edge("a", "c");
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");

    let a = graph.index_of(&"a").unwrap();
    let neighbors: Vec<&str> = graph
        .neighbors(a)
        .map(|v| *graph.node(v).unwrap())
        .collect();

    assert_eq!(neighbors, vec!["c", "b", "c"]);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph: AdjacencyList<u32> = AdjacencyList::new();
    let first = graph.add_node(7);
    let again = graph.add_node(7);

    assert_eq!(first, again);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains(&7));
    assert!(!graph.contains(&8));
}

#[test]
fn test_unknown_vertex_has_no_neighbors() {
    let graph: AdjacencyList<u32> = AdjacencyList::new();
    assert_eq!(graph.neighbors(42).count(), 0);

    let weighted: WeightedGraph<u32, u32> = WeightedGraph::new();
    assert_eq!(weighted.outgoing_edges(42).count(), 0);
    assert_eq!(weighted.edge_weight(0, 1), None);
}

#[test]
fn test_adjacency_json_preserves_key_order() {
    let graph: AdjacencyList<String> =
        AdjacencyList::from_json(r#"{"zebra": ["apple"], "mango": [], "apple": ["zebra"]}"#).unwrap();

    let order: Vec<&str> = (0..graph.node_count())
        .map(|i| graph.node(i).unwrap().as_str())
        .collect();
    // Keys first, in document order; "apple" is a key, not just zebra's neighbor
    assert_eq!(order, vec!["zebra", "mango", "apple"]);
}

#[test]
fn test_weighted_json_preserves_key_order() {
    let graph: WeightedGraph<String, u32> =
        WeightedGraph::from_json(r#"{"s": {"y": 2, "x": 1}, "x": {}, "y": {}}"#).unwrap();

    let s = graph.index_of(&"s".to_string()).unwrap();
    let targets: Vec<&str> = graph
        .outgoing_edges(s)
        .map(|(v, _)| graph.node(v).unwrap().as_str())
        .collect();
    // Edge order follows the neighbor map, vertex order follows the keys
    assert_eq!(targets, vec!["y", "x"]);
    assert_eq!(graph.index_of(&"x".to_string()), Some(1));
    assert_eq!(graph.index_of(&"y".to_string()), Some(2));
}

#[test]
fn test_neighbor_only_nodes_come_after_keys() {
    let graph: WeightedGraph<&str, u32> = vec![
        ("start", vec![("leaf", 1), ("b", 1)]),
        ("b", vec![("leaf", 2)]),
    ]
    .into_iter()
    .collect();

    assert_eq!(graph.index_of(&"start"), Some(0));
    assert_eq!(graph.index_of(&"b"), Some(1));
    assert_eq!(graph.index_of(&"leaf"), Some(2));
}

#[test]
fn test_integer_node_ids_from_json() {
    let graph: WeightedGraph<u32, u32> = WeightedGraph::from_json(r#"{"1": {"2": 5}, "2": {}}"#).unwrap();

    let from = graph.index_of(&1).unwrap();
    let to = graph.index_of(&2).unwrap();
    assert_eq!(graph.edge_weight(from, to), Some(5));
}

#[test]
fn test_invalid_json() {
    let result = WeightedGraph::<String, u32>::from_json(r#"{"a": ["b"]}"#);
    assert!(matches!(result, Err(Error::Json(_))));

    let result = AdjacencyList::<String>::from_json("not json");
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_add_edge_replaces_weight() {
    let mut graph = WeightedGraph::new();
    assert!(graph.add_edge("a", "b", 5u32));
    assert!(!graph.add_edge("a", "b", 3u32));

    let a = graph.index_of(&"a").unwrap();
    let b = graph.index_of(&"b").unwrap();
    assert_eq!(graph.edge_weight(a, b), Some(3));
    assert_eq!(graph.edge_count(), 1);
    // Directed: no edge back
    assert_eq!(graph.edge_weight(b, a), None);
}

#[test]
fn test_validate_non_negative() {
    let mut graph = WeightedGraph::new();
    graph.add_edge("a", "b", 1.0);
    graph.add_edge("b", "c", 0.0);
    assert!(graph.validate_non_negative().is_ok());

    graph.add_edge("c", "a", -1.0);
    match graph.validate_non_negative() {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!(from, "\"c\"");
            assert_eq!(to, "\"a\"");
            assert_eq!(weight, "-1.0");
        }
        other => panic!("expected a negative weight error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_nan() {
    let mut graph = WeightedGraph::new();
    graph.add_edge("a", "b", f64::NAN);

    assert!(matches!(
        graph.validate_non_negative(),
        Err(Error::UnorderedWeight { .. })
    ));
}

#[test]
fn test_from_iterator() {
    let graph: AdjacencyList<&str> = vec![("a", vec!["b"]), ("b", vec!["a", "c"])]
        .into_iter()
        .collect();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);

    let weighted: WeightedGraph<&str, u8> = vec![("a", vec![("b", 1)]), ("c", vec![])]
        .into_iter()
        .collect();
    assert_eq!(weighted.node_count(), 3);
    assert_eq!(weighted.edge_count(), 1);
}
