use path_search::sort::{quick_sort, selection_sort};
use path_search::{bfs, dijkstra, AdjacencyList, WeightedGraph};
use rand::Rng;

const EDIBLE_ITEMS: &str = r#"{
    "apple": ["pie", "snack", "juice"],
    "orange": ["juice", "snack", "salad"],
    "juice": ["grape", "apple", "orange"],
    "grape": ["juice", "wine"],
    "snack": ["chips", "apple", "orange"],
    "potato": ["chips", "salad"],
    "wine": ["grape", "barley"],
    "barley": ["wine", "grain"],
    "grain": ["wheat", "oat", "barley"],
    "oat": ["grain"],
    "chips": ["paint", "potato"],
    "pie": ["apple"],
    "salad": ["orange", "barley", "potato"]
}"#;

const WEIGHTED_GRAPHS: [(&str, &str); 3] = [
    (
        "two detours",
        r#"{
            "start": {"a": 6, "b": 2},
            "a": {"finish": 1},
            "b": {"a": 3, "finish": 5},
            "finish": {}
        }"#,
    ),
    (
        "four waypoints",
        r#"{
            "start": {"a": 5, "b": 2},
            "a": {"c": 4, "d": 2},
            "b": {"a": 8, "d": 7},
            "c": {"d": 6, "finish": 2},
            "d": {"finish": 1},
            "finish": {}
        }"#,
    ),
    (
        "with a cycle",
        r#"{
            "start": {"a": 10},
            "a": {"b": 20},
            "b": {"c": 1, "finish": 30},
            "c": {"a": 1},
            "finish": {}
        }"#,
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("--- Breadth-first search over edible items ---");
    let items: AdjacencyList<String> = AdjacencyList::from_json(EDIBLE_ITEMS)?;
    for (start, goal) in [("apple", "paint"), ("juice", "wine"), ("chips", "potato")] {
        let outcome = bfs(&items, &start.to_string(), |item| item == goal);
        match outcome.depth() {
            Some(depth) => println!("{} -> {}: depth {}", start, goal, depth),
            None => println!("{} -> {}: not reachable", start, goal),
        }
    }

    println!("\n--- Dijkstra shortest paths ---");
    for (name, json) in WEIGHTED_GRAPHS {
        let graph: WeightedGraph<String, u32> = WeightedGraph::from_json(json)?;
        graph.validate_non_negative()?;
        let outcome = dijkstra(&graph, &"start".to_string(), &"finish".to_string());
        println!("{}: {}", name, outcome);
    }

    println!("\n--- Sorting ---");
    let mut rng = rand::thread_rng();
    let unsorted: Vec<u32> = (0..20).map(|_| rng.gen_range(0..100)).collect();
    println!("Unsorted: {:?}", unsorted);
    println!("Quicksort: {:?}", quick_sort(&unsorted));
    println!("Selection sort: {:?}", selection_sort(unsorted));

    Ok(())
}
