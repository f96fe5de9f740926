//! Station graph model and minimum spanning tree solvers.
//!
//! This module provides:
//! - A station list with a symmetric weighted adjacency matrix
//! - Append-only growth with full validation on every mutation
//! - Prim's and Kruskal's algorithms as pure functions over matrices
//! - The weight-sum rule shared by graphs and spanning trees

mod kruskal;
mod prim;
mod station;

pub use kruskal::kruskal_mst;
pub use prim::prim_mst;
pub use station::{LatLng, Station};

use crate::config::PlannerConfig;
use crate::error::PlannerError;

/// MST solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    /// Run the selected solver over an adjacency matrix.
    pub fn run(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PlannerError> {
        match self {
            Algorithm::Prim => prim_mst(matrix),
            Algorithm::Kruskal => kruskal_mst(matrix),
        }
    }
}

/// A candidate edge between two station indices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Upper-triangle edges of a symmetric matrix, ascending by weight.
///
/// Collection is row-major and the sort is stable, so equal weights keep
/// their row-major order. Both solvers rely on that tie-break.
pub(crate) fn candidate_edges(matrix: &[Vec<f64>]) -> Vec<Edge> {
    let n = matrix.len();
    let mut edges = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = matrix[i][j];
            if weight != 0.0 {
                edges.push(Edge {
                    from: i,
                    to: j,
                    weight,
                });
            }
        }
    }

    edges.sort_by(|a, b| {
        a.weight
            .partial_cmp(&b.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    edges
}

/// Total weight of a matrix: the sum of every cell divided by two.
///
/// Both symmetric halves and the zero diagonal are included in the sum, so
/// the result equals the sum of edge weights with each edge counted once.
/// An empty matrix weighs zero.
pub fn total_weight(matrix: &[Vec<f64>]) -> f64 {
    let total: f64 = matrix.iter().flat_map(|row| row.iter()).sum();
    total / 2.0
}

/// An ordered station list with a symmetric weighted adjacency matrix.
///
/// `matrix[i][j]` holds the path weight between stations `i` and `j`; zero
/// means no edge. The matrix is always square with side equal to the station
/// count, symmetric, and zero on the diagonal. Growth is append-only: there
/// is no removal or edit operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationGraph {
    stations: Vec<Station>,
    matrix: Vec<Vec<f64>>,
}

impl StationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            matrix: Vec::new(),
        }
    }

    /// Assemble a graph from parts whose invariants were already checked.
    pub(crate) fn from_parts(stations: Vec<Station>, matrix: Vec<Vec<f64>>) -> Self {
        Self { stations, matrix }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of distinct edges in the graph.
    pub fn edge_count(&self) -> usize {
        let n = self.matrix.len();
        let mut count = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix[i][j] != 0.0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total weight of the graph per the weight-sum rule.
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.matrix)
    }

    /// Whether a station with exactly these coordinates is stored.
    ///
    /// Exact equality, no tolerance. The probe title is irrelevant because
    /// [`Station::same_coordinates`] ignores it.
    pub fn station_exists(&self, lat: f64, lng: f64) -> bool {
        let probe = Station::new("", lat, lng);
        self.stations
            .iter()
            .any(|station| station.same_coordinates(&probe))
    }

    /// Append a station together with its adjacency to every existing station.
    ///
    /// `adjacency` must hold one entry per existing station, in station
    /// order; `None` (or zero) means no edge. Validation runs to completion
    /// before any state is touched, so a failed call leaves the graph
    /// unchanged.
    ///
    /// # Errors
    ///
    /// In precedence order: [`PlannerError::OutOfRange`],
    /// [`PlannerError::DuplicateStation`],
    /// [`PlannerError::AdjacencyLengthMismatch`],
    /// [`PlannerError::InvalidWeight`].
    pub fn add_station(
        &mut self,
        station: Station,
        adjacency: &[Option<f64>],
    ) -> Result<(), PlannerError> {
        let lat = station.latitude();
        let lng = station.longitude();

        if !(PlannerConfig::MIN_LAT..=PlannerConfig::MAX_LAT).contains(&lat)
            || !(PlannerConfig::MIN_LNG..=PlannerConfig::MAX_LNG).contains(&lng)
        {
            return Err(PlannerError::OutOfRange { lat, lng });
        }

        if self.station_exists(lat, lng) {
            return Err(PlannerError::DuplicateStation { lat, lng });
        }

        if adjacency.len() != self.stations.len() {
            return Err(PlannerError::AdjacencyLengthMismatch {
                expected: self.stations.len(),
                got: adjacency.len(),
            });
        }

        for &weight in adjacency.iter().flatten() {
            if weight != 0.0
                && !(PlannerConfig::MIN_PATH_WEIGHT..=PlannerConfig::MAX_PATH_WEIGHT)
                    .contains(&weight)
            {
                return Err(PlannerError::InvalidWeight { weight });
            }
        }

        let index = self.stations.len();
        self.stations.push(station);

        for (row, entry) in self.matrix.iter_mut().zip(adjacency) {
            row.push(entry.unwrap_or(0.0));
        }
        let mut new_row: Vec<f64> = adjacency.iter().map(|entry| entry.unwrap_or(0.0)).collect();
        new_row.push(0.0); // zero diagonal
        self.matrix.push(new_row);

        tracing::debug!(station = index, "station appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_stations(count: usize) -> StationGraph {
        let mut graph = StationGraph::new();
        for i in 0..count {
            let adjacency: Vec<Option<f64>> = (0..i).map(|_| Some(1.0)).collect();
            graph
                .add_station(
                    Station::new(format!("S{i}"), i as f64, -(i as f64)),
                    &adjacency,
                )
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_add_station_then_exists() {
        let mut graph = StationGraph::new();

        graph
            .add_station(Station::new("Central", -34.5, -58.7), &[])
            .unwrap();

        assert!(graph.station_exists(-34.5, -58.7));
        assert!(!graph.station_exists(-34.5, -58.6));
    }

    #[test]
    fn test_matrix_stays_symmetric_with_zero_diagonal() {
        let mut graph = StationGraph::new();
        graph.add_station(Station::new("A", 0.0, 0.0), &[]).unwrap();
        graph
            .add_station(Station::new("B", 1.0, 1.0), &[Some(3.0)])
            .unwrap();
        graph
            .add_station(Station::new("C", 2.0, 2.0), &[None, Some(5.0)])
            .unwrap();

        let matrix = graph.matrix();
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix[i].len(), 3);
            assert_eq!(matrix[i][i], 0.0);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }

        // None means no edge.
        assert_eq!(matrix[0][2], 0.0);
        assert_eq!(matrix[1][2], 5.0);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut graph = StationGraph::new();

        let err = graph
            .add_station(Station::new("Bad", 91.0, 0.0), &[])
            .unwrap_err();
        assert!(matches!(err, PlannerError::OutOfRange { .. }));

        let err = graph
            .add_station(Station::new("Bad", 0.0, -180.5), &[])
            .unwrap_err();
        assert!(matches!(err, PlannerError::OutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_station_rejected_regardless_of_title() {
        let mut graph = StationGraph::new();
        graph
            .add_station(Station::new("Original", 10.0, 20.0), &[])
            .unwrap();

        let err = graph
            .add_station(Station::new("Different title", 10.0, 20.0), &[Some(1.0)])
            .unwrap_err();
        assert!(matches!(err, PlannerError::DuplicateStation { .. }));
    }

    #[test]
    fn test_out_of_range_takes_precedence_over_duplicate() {
        let mut graph = StationGraph::new();
        graph
            .add_station(Station::new("Edge", 90.0, 0.0), &[])
            .unwrap();

        let err = graph
            .add_station(Station::new("Bad", 90.5, 0.0), &[Some(1.0)])
            .unwrap_err();
        assert!(matches!(err, PlannerError::OutOfRange { .. }));
    }

    #[test]
    fn test_adjacency_length_mismatch() {
        let mut graph = graph_with_stations(2);

        let err = graph
            .add_station(Station::new("New", 50.0, 50.0), &[Some(1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::AdjacencyLengthMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_weight_above_maximum_rejected() {
        let mut graph = graph_with_stations(1);

        let err = graph
            .add_station(Station::new("New", 50.0, 50.0), &[Some(11.0)])
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidWeight { .. }));
    }

    #[test]
    fn test_weight_below_minimum_rejected() {
        let mut graph = graph_with_stations(1);

        let err = graph
            .add_station(Station::new("New", 50.0, 50.0), &[Some(0.5)])
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidWeight { .. }));
    }

    #[test]
    fn test_failed_add_leaves_graph_untouched() {
        let mut graph = graph_with_stations(2);
        let before = graph.clone();

        let _ = graph
            .add_station(Station::new("New", 50.0, 50.0), &[Some(1.0), Some(11.0)])
            .unwrap_err();

        assert_eq!(graph, before);
    }

    #[test]
    fn test_total_weight_empty_graph_is_zero() {
        let graph = StationGraph::new();
        assert_eq!(graph.total_weight(), 0.0);
    }

    #[test]
    fn test_total_weight_counts_each_edge_once() {
        let matrix = vec![
            vec![0.0, 2.0, 4.0],
            vec![2.0, 0.0, 0.0],
            vec![4.0, 0.0, 0.0],
        ];

        assert_eq!(total_weight(&matrix), 6.0);
    }

    #[test]
    fn test_edge_count() {
        let mut graph = StationGraph::new();
        graph.add_station(Station::new("A", 0.0, 0.0), &[]).unwrap();
        graph
            .add_station(Station::new("B", 1.0, 1.0), &[Some(3.0)])
            .unwrap();
        graph
            .add_station(Station::new("C", 2.0, 2.0), &[Some(2.0), None])
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_candidate_edges_sorted_with_stable_ties() {
        let matrix = vec![
            vec![0.0, 2.0, 1.0],
            vec![2.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];

        let edges = candidate_edges(&matrix);
        let as_tuples: Vec<(usize, usize, f64)> =
            edges.iter().map(|e| (e.from, e.to, e.weight)).collect();

        // (0,2) precedes (1,2) in row-major order, so it wins the weight tie.
        assert_eq!(as_tuples, vec![(0, 2, 1.0), (1, 2, 1.0), (0, 1, 2.0)]);
    }
}
