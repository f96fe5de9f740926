//! Build a random station network and compare both MST solvers.

use anyhow::Result;
use station_path_planner::utils::sample;
use station_path_planner::{Algorithm, GraphView, PathPlanner, PlannerConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Station Path Planner Demo ===\n");

    let mut rng = rand::thread_rng();
    let mut planner = PathPlanner::new(PlannerConfig::default());
    println!("Network: {}", planner.config().name);

    println!("\nAdding stations...");
    for i in 0..8 {
        let station = sample::random_station(&mut rng, format!("Random {i}"));
        let adjacency = sample::random_adjacency(&mut rng, planner.station_count());
        println!(
            "  {} at ({:.4}, {:.4})",
            station.title, station.lat_lng.lat, station.lat_lng.lng
        );
        planner.add_station(station, &adjacency)?;
    }

    println!("\n--- Original Graph ---");
    println!("Stations: {}", planner.station_count());
    println!("Edges: {}", planner.graph().edge_count());
    println!("Total weight: {}", planner.graph().total_weight());

    for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
        let result = planner.solve(algorithm)?;
        println!("\n--- {algorithm:?} ---");
        println!("Tree edges: {}", planner.station_count() - 1);
        println!("Tree weight: {}", result.total_weight);
        println!("Elapsed: {:.4} ms", result.elapsed_ms);
    }

    planner.set_active_view(GraphView::Original);

    println!("\n--- Export ---");
    println!("{}", planner.export()?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
