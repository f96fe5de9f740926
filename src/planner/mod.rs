//! Planner store: graph ownership, solver orchestration, views, observers.
//!
//! [`PathPlanner`] is the single mutable resource of the crate. It owns the
//! station graph, caches one result per solver, tracks which matrix is
//! selected for presentation, and notifies registered observers after every
//! state change. All operations are synchronous and run to completion before
//! returning; state is fully updated before any notification fires.

mod portable;
mod result;

pub use portable::PortableGraph;
pub use result::SolveResult;

use std::fmt;
use std::time::Instant;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::graph::{total_weight, Algorithm, Station, StationGraph};

/// Which matrix is currently selected for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphView {
    /// The source graph
    #[default]
    Original,
    /// The cached Prim spanning tree
    Prim,
    /// The cached Kruskal spanning tree
    Kruskal,
}

/// Handle returned by [`PathPlanner::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

struct Subscriber {
    id: SubscriberId,
    callback: Box<dyn FnMut()>,
}

/// Stateful store over a [`StationGraph`] with cached solver results.
pub struct PathPlanner {
    config: PlannerConfig,
    graph: StationGraph,
    view: GraphView,
    prim_result: Option<SolveResult>,
    kruskal_result: Option<SolveResult>,
    subscribers: Vec<Subscriber>,
    next_subscriber: u64,
}

impl PathPlanner {
    /// Create an empty planner
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            graph: StationGraph::new(),
            view: GraphView::Original,
            prim_result: None,
            kruskal_result: None,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn graph(&self) -> &StationGraph {
        &self.graph
    }

    pub fn stations(&self) -> &[Station] {
        self.graph.stations()
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        self.graph.matrix()
    }

    pub fn station_count(&self) -> usize {
        self.graph.station_count()
    }

    /// Whether a station with exactly these coordinates is stored.
    pub fn station_exists(&self, lat: f64, lng: f64) -> bool {
        self.graph.station_exists(lat, lng)
    }

    /// The cached result for an algorithm, if a solve has succeeded since
    /// the last graph mutation.
    pub fn result(&self, algorithm: Algorithm) -> Option<&SolveResult> {
        match algorithm {
            Algorithm::Prim => self.prim_result.as_ref(),
            Algorithm::Kruskal => self.kruskal_result.as_ref(),
        }
    }

    /// Append a station; see [`StationGraph::add_station`] for the
    /// validation rules.
    ///
    /// A successful append discards both cached solver results (they
    /// describe the previous graph), leaves the active view unchanged, and
    /// notifies observers. A failed append changes nothing.
    pub fn add_station(
        &mut self,
        station: Station,
        adjacency: &[Option<f64>],
    ) -> Result<(), PlannerError> {
        self.graph.add_station(station, adjacency)?;

        self.prim_result = None;
        self.kruskal_result = None;
        self.notify_subscribers();
        Ok(())
    }

    /// Select which matrix is presented. Always legal, even when the
    /// selected result has not been computed yet.
    pub fn set_active_view(&mut self, view: GraphView) {
        self.view = view;
        tracing::debug!(?view, "active view changed");
        self.notify_subscribers();
    }

    pub fn active_view(&self) -> GraphView {
        self.view
    }

    /// The matrix selected by the active view.
    ///
    /// Selecting [`GraphView::Prim`] or [`GraphView::Kruskal`] before that
    /// result exists yields an empty matrix.
    pub fn active_matrix(&self) -> &[Vec<f64>] {
        match self.view {
            GraphView::Original => self.graph.matrix(),
            GraphView::Prim => self
                .prim_result
                .as_ref()
                .map(|result| result.matrix.as_slice())
                .unwrap_or(&[]),
            GraphView::Kruskal => self
                .kruskal_result
                .as_ref()
                .map(|result| result.matrix.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Solve the current graph with the chosen algorithm.
    ///
    /// Measures wall-clock time around the solver call, stores the result in
    /// the slot keyed by the algorithm, switches the active view to it, and
    /// notifies observers. On failure nothing changes: a previously cached
    /// result for the algorithm stays in place, since only a successful run
    /// replaces it.
    ///
    /// # Errors
    ///
    /// [`PlannerError::InsufficientStations`] with fewer than two stations;
    /// [`PlannerError::DisconnectedGraph`] when the graph has no spanning
    /// tree.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<SolveResult, PlannerError> {
        let count = self.graph.station_count();
        if count < 2 {
            return Err(PlannerError::InsufficientStations { count });
        }

        let start = Instant::now();
        let tree = algorithm.run(self.graph.matrix())?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;

        let result = SolveResult {
            total_weight: total_weight(&tree),
            matrix: tree,
            elapsed_ms,
        };
        tracing::debug!(
            ?algorithm,
            elapsed_ms,
            weight = result.total_weight,
            "solve finished"
        );

        match algorithm {
            Algorithm::Prim => {
                self.prim_result = Some(result.clone());
                self.view = GraphView::Prim;
            }
            Algorithm::Kruskal => {
                self.kruskal_result = Some(result.clone());
                self.view = GraphView::Kruskal;
            }
        }
        self.notify_subscribers();
        Ok(result)
    }

    /// Serialize the station list and matrix to the portable text form.
    pub fn export(&self) -> Result<String, PlannerError> {
        let portable = PortableGraph::from_graph(&self.graph);
        Ok(serde_json::to_string(&portable)?)
    }

    /// Replace the store contents from exported text.
    ///
    /// The payload is parsed and fully re-validated before anything is
    /// touched, so a failed import leaves the prior state unchanged. On
    /// success the stations and matrix are replaced wholesale, both cached
    /// solver results are discarded, and observers are notified. The active
    /// view is left as-is.
    ///
    /// # Errors
    ///
    /// [`PlannerError::MalformedInput`] when the text is not valid JSON or
    /// lacks the `locations`/`matrix` keys; [`PlannerError::Validation`]
    /// when it parses but carries a wrong-typed field or violates a
    /// structural rule.
    pub fn import(&mut self, text: &str) -> Result<(), PlannerError> {
        let graph = PortableGraph::parse(text)?.into_graph()?;

        self.graph = graph;
        self.prim_result = None;
        self.kruskal_result = None;
        tracing::debug!(stations = self.graph.station_count(), "graph imported");
        self.notify_subscribers();
        Ok(())
    }

    /// Register an observer callback.
    ///
    /// The callback is invoked once immediately so the new observer can
    /// render the current state, then once per subsequent state change
    /// (station added, view changed, solve completed, import completed).
    /// Dispatch is synchronous and fire-and-forget.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut() + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;

        let mut callback = Box::new(callback);
        callback();
        self.subscribers.push(Subscriber { id, callback });
        tracing::debug!(id = id.0, "subscriber added");
        id
    }

    /// Remove an observer; true when something was removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);

        let removed = self.subscribers.len() < before;
        if removed {
            tracing::debug!(id = id.0, "subscriber removed");
        }
        removed
    }

    fn notify_subscribers(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)();
        }
        tracing::debug!(count = self.subscribers.len(), "subscribers notified");
    }
}

impl Default for PathPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl fmt::Debug for PathPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathPlanner")
            .field("stations", &self.graph.station_count())
            .field("view", &self.view)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
