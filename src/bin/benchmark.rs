use std::env;
use std::time::{Duration, Instant};

use path_search::graph::generators::random_weighted_graph;
use path_search::graph::{Graph, WeightedGraph};
use path_search::{Dijkstra, Frontier, ShortestPathSolver, ShortestPathTree};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark one frontier on a graph
fn benchmark_frontier(
    frontier: Frontier,
    graph: &WeightedGraph<usize, u64>,
    source: usize,
) -> (Duration, ShortestPathTree<'_, usize, u64>) {
    println!("Running {:?} on graph with {} vertices...", frontier, graph.node_count());

    let dijkstra = Dijkstra::new().with_frontier(frontier);
    let start = Instant::now();
    let tree = dijkstra.solve(graph, &source);
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", tree.reachable().len(), duration);
    (duration, tree)
}

fn main() {
    env_logger::init();

    // Graph sizes come from the command line, e.g. `benchmark 1000 5000`
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![100, 1_000, 5_000]
    } else {
        args.iter().filter_map(|arg| arg.parse().ok()).collect()
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: linear scan vs binary heap frontier");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        if size == 0 {
            continue;
        }
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_weighted_graph(size, edge_factor, 100, &mut rng);
        let source = 0;

        let (scan_time, scan_tree) = benchmark_frontier(Frontier::LinearScan, &graph, source);
        let (heap_time, heap_tree) = benchmark_frontier(Frontier::BinaryHeap, &graph, source);

        // Both frontiers share the tie-break, so the trees must match exactly
        let mismatches = (0..size)
            .filter(|v| scan_tree.path_to(v) != heap_tree.path_to(v))
            .count();
        if mismatches > 0 {
            println!("WARNING: {} vertices differ between frontiers", mismatches);
        }

        results.push((size, scan_time, heap_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Scan (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, scan_time, heap_time) in &results {
        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            scan_time.as_millis(),
            heap_time.as_millis(),
            speedup
        );
    }
}
