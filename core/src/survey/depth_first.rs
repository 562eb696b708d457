use super::state::SurveyState;
use super::{Color, Survey};
use crate::error::SurveyError;
use crate::graph::{Graph, Vertex};
use tracing::trace;

/// Iterative depth-first survey.
///
/// Each vertex on the control stack keeps a cursor into its adjacency list,
/// so resuming a vertex continues the neighbor scan where it stopped
/// instead of restarting it. Discovery and finish times come from one
/// shared clock and therefore lie in `[0, 2 * vertex_count)`.
#[derive(Debug, Clone)]
pub struct DepthFirstSurvey {
    state: SurveyState,
    finish: Vec<Option<usize>>,
    cursor: Vec<usize>,
    stack: Vec<Vertex>,
}

impl DepthFirstSurvey {
    pub fn new(graph: &Graph) -> Self {
        Self::with_start(graph, 0)
    }

    pub fn with_start(graph: &Graph, start: Vertex) -> Self {
        Self {
            state: SurveyState::new(graph.vertex_count(), start),
            finish: vec![None; graph.vertex_count()],
            cursor: vec![0; graph.vertex_count()],
            stack: Vec::new(),
        }
    }

    pub fn finish_times(&self) -> &[Option<usize>] {
        &self.finish
    }

    pub fn finish_time(&self, vertex: Vertex) -> Option<usize> {
        self.finish.get(vertex).copied().flatten()
    }

    pub fn infinite_time(&self) -> usize {
        2 * self.vertex_count()
    }

    pub fn null_vertex(&self) -> Vertex {
        self.vertex_count()
    }

    /// Advances the cursor of `vertex` past neighbors that are no longer
    /// white and returns the first white one, if any.
    fn next_neighbor(&mut self, graph: &Graph, vertex: Vertex) -> Option<Vertex> {
        let neighbors = graph.neighbors(vertex);
        while let Some(&neighbor) = neighbors.get(self.cursor[vertex]) {
            if self.state.is_white(neighbor) {
                return Some(neighbor);
            }
            self.cursor[vertex] += 1;
        }
        None
    }

    fn trace_stack(&self) {
        trace!(stack = ?self.stack, "dfs control stack");
    }
}

impl Survey for DepthFirstSurvey {
    fn reset(&mut self, graph: &Graph) {
        self.stack.clear();
        if self.state.reset(graph.vertex_count()) {
            self.finish = vec![None; graph.vertex_count()];
            self.cursor = vec![0; graph.vertex_count()];
        } else {
            self.finish.fill(None);
            self.cursor.fill(0);
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

        self.state.discover(root, None);
        self.stack.push(root);
        self.trace_stack();

        while let Some(&top) = self.stack.last() {
            match self.next_neighbor(graph, top) {
                Some(child) => {
                    self.state.discover(child, Some(top));
                    self.stack.push(child);
                }
                None => {
                    self.stack.pop();
                    self.state.finish(top);
                    self.finish[top] = Some(self.state.tick());
                }
            }
            self.trace_stack();
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
