//! Solver output packaging.

/// Output of a successful solver run.
///
/// Held by the planner store per algorithm and discarded whenever the graph
/// mutates, since a cached tree no longer describes the new graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Spanning-tree adjacency matrix
    pub matrix: Vec<Vec<f64>>,
    /// Wall-clock time spent inside the solver, in milliseconds
    pub elapsed_ms: f64,
    /// Total weight of the spanning tree
    pub total_weight: f64,
}
