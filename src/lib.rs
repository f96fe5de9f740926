//! # Station Path Planner
//!
//! A library for building weighted undirected graphs of geographic stations
//! and computing minimum spanning trees over them, comparing total edge
//! weight and computation time against the original graph.
//!
//! ## Features
//!
//! - **Graph module**: station list plus symmetric adjacency matrix with
//!   append-only growth and full validation on every mutation
//! - **Solvers**: Prim's and Kruskal's algorithms as pure functions over
//!   adjacency matrices
//! - **Planner module**: stateful store with cached per-algorithm results,
//!   view selection, and synchronous change notification
//! - **Portable format**: JSON export/import with full re-validation on load
//!
//! ## Quick Start
//!
//! ```rust
//! use station_path_planner::{Algorithm, PathPlanner, PlannerConfig, Station};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut planner = PathPlanner::new(PlannerConfig::default());
//!
//!     planner.add_station(Station::new("North", -34.52, -58.70), &[])?;
//!     planner.add_station(Station::new("South", -34.61, -58.38), &[Some(4.0)])?;
//!     planner.add_station(Station::new("West", -34.57, -58.45), &[Some(2.0), Some(3.0)])?;
//!
//!     let result = planner.solve(Algorithm::Kruskal)?;
//!     println!("tree weight: {}", result.total_weight);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod planner;
pub mod utils;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use graph::{kruskal_mst, prim_mst, total_weight, Algorithm, LatLng, Station, StationGraph};
pub use planner::{GraphView, PathPlanner, PortableGraph, SolveResult, SubscriberId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
