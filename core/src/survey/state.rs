use super::Color;
use crate::error::SurveyError;
use crate::graph::{Graph, Vertex};
use std::iter::Chain;
use std::ops::Range;

/// Per-vertex bookkeeping common to both survey strategies.
#[derive(Debug, Clone)]
pub(super) struct SurveyState {
    pub start: Vertex,
    time: usize,
    pub colors: Vec<Color>,
    pub discovery: Vec<Option<usize>>,
    pub parents: Vec<Option<Vertex>>,
}

impl SurveyState {
    pub fn new(vertex_count: usize, start: Vertex) -> Self {
        Self {
            start,
            time: 0,
            colors: vec![Color::White; vertex_count],
            discovery: vec![None; vertex_count],
            parents: vec![None; vertex_count],
        }
    }

    /// Returns true when the arrays had to be resized.
    pub fn reset(&mut self, vertex_count: usize) -> bool {
        self.time = 0;
        if self.colors.len() != vertex_count {
            self.colors = vec![Color::White; vertex_count];
            self.discovery = vec![None; vertex_count];
            self.parents = vec![None; vertex_count];
            return true;
        }

        self.colors.fill(Color::White);
        self.discovery.fill(None);
        self.parents.fill(None);
        false
    }

    pub fn check(&self, graph: &Graph, root: Vertex) -> Result<(), SurveyError> {
        if self.colors.len() != graph.vertex_count() {
            return Err(SurveyError::StaleSurvey {
                survey: self.colors.len(),
                graph: graph.vertex_count(),
            });
        }
        if root >= self.colors.len() {
            return Err(SurveyError::VertexOutOfRange {
                vertex: root,
                count: self.colors.len(),
            });
        }
        Ok(())
    }

    pub fn is_white(&self, vertex: Vertex) -> bool {
        self.colors[vertex] == Color::White
    }

    pub fn discover(&mut self, vertex: Vertex, parent: Option<Vertex>) {
        self.discovery[vertex] = Some(self.tick());
        self.parents[vertex] = parent;
        self.colors[vertex] = Color::Grey;
    }

    pub fn finish(&mut self, vertex: Vertex) {
        self.colors[vertex] = Color::Black;
    }

    pub fn tick(&mut self) -> usize {
        let now = self.time;
        self.time += 1;
        now
    }

    /// Roots for a full survey: `start..n` followed by `0..start`.
    pub fn root_order(&self) -> Chain<Range<Vertex>, Range<Vertex>> {
        let vertex_count = self.colors.len();
        let start = self.start.min(vertex_count);
        (start..vertex_count).chain(0..start)
    }
}
