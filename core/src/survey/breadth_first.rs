use super::state::SurveyState;
use super::{Color, Survey};
use crate::error::SurveyError;
use crate::graph::{Graph, Vertex};
use std::collections::VecDeque;
use tracing::trace;

/// Level-order survey. Records, for every discovered vertex, the number of
/// edges from its root.
#[derive(Debug, Clone)]
pub struct BreadthFirstSurvey {
    state: SurveyState,
    distance: Vec<Option<usize>>,
    edge_count: usize,
    queue: VecDeque<Vertex>,
}

impl BreadthFirstSurvey {
    pub fn new(graph: &Graph) -> Self {
        Self::with_start(graph, 0)
    }

    pub fn with_start(graph: &Graph, start: Vertex) -> Self {
        Self {
            state: SurveyState::new(graph.vertex_count(), start),
            distance: vec![None; graph.vertex_count()],
            edge_count: graph.edge_count(),
            queue: VecDeque::new(),
        }
    }

    pub fn distances(&self) -> &[Option<usize>] {
        &self.distance
    }

    pub fn distance(&self, vertex: Vertex) -> Option<usize> {
        self.distance.get(vertex).copied().flatten()
    }

    /// Distance value the classic tables print for unreached vertices:
    /// one more than the edge count, so no real distance can equal it.
    pub fn infinite_distance(&self) -> usize {
        1 + self.edge_count
    }

    pub fn infinite_time(&self) -> usize {
        self.vertex_count()
    }

    pub fn null_vertex(&self) -> Vertex {
        self.vertex_count()
    }

    fn trace_queue(&self) {
        trace!(queue = ?self.queue, "bfs control queue");
    }
}

impl Survey for BreadthFirstSurvey {
    fn reset(&mut self, graph: &Graph) {
        self.queue.clear();
        self.edge_count = graph.edge_count();
        if self.state.reset(graph.vertex_count()) {
            self.distance = vec![None; graph.vertex_count()];
        } else {
            self.distance.fill(None);
        }
    }

    fn search_all(&mut self, graph: &Graph) -> Result<(), SurveyError> {
        self.reset(graph);
        for root in self.state.root_order() {
            if self.state.is_white(root) {
                self.search_from(graph, root)?;
            }
        }
        Ok(())
    }

    fn search_from(&mut self, graph: &Graph, root: Vertex) -> Result<(), SurveyError> {
        self.state.check(graph, root)?;
        if !self.state.is_white(root) {
            return Ok(());
        }

        self.distance[root] = Some(0);
        self.state.discover(root, None);
        self.queue.push_back(root);
        self.trace_queue();

        while let Some(&front) = self.queue.front() {
            let next_distance = self.distance[front].map(|d| d + 1);
            for &neighbor in graph.neighbors(front) {
                if self.state.is_white(neighbor) {
                    self.distance[neighbor] = next_distance;
                    self.state.discover(neighbor, Some(front));
                    self.queue.push_back(neighbor);
                    self.trace_queue();
                }
            }

            self.queue.pop_front();
            self.trace_queue();
            self.state.finish(front);
        }

        Ok(())
    }

    fn set_start(&mut self, start: Vertex) {
        self.state.start = start;
    }

    fn start(&self) -> Vertex {
        self.state.start
    }

    fn colors(&self) -> &[Color] {
        &self.state.colors
    }

    fn discovery_times(&self) -> &[Option<usize>] {
        &self.state.discovery
    }

    fn parents(&self) -> &[Option<Vertex>] {
        &self.state.parents
    }
}
