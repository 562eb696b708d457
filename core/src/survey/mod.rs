//! Breadth-first and depth-first surveys over a [`Graph`].
//!
//! Both strategies share the per-vertex state machine (color, discovery
//! time, parent) held in [`state::SurveyState`] and differ in their control
//! discipline: a FIFO queue for breadth-first, a LIFO stack with resumable
//! neighbor cursors for depth-first.
//!
//! A survey does not hold on to the graph. Every operation takes the graph
//! it should run against, and callers must `reset` and search again after
//! mutating the graph; results computed before the mutation are silently
//! stale otherwise.

mod breadth_first;
mod depth_first;
pub mod report;
mod state;

pub use breadth_first::BreadthFirstSurvey;
pub use depth_first::DepthFirstSurvey;

use crate::error::SurveyError;
use crate::graph::{Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Not discovered yet.
    White,
    /// Discovered, still on the control queue or stack.
    Grey,
    /// Finished.
    Black,
}

impl Color {
    pub fn as_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Grey => 'g',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Capabilities shared by every survey strategy.
pub trait Survey {
    /// Clears all per-vertex state, resizing to `graph` if its vertex count
    /// changed. The configured start vertex is kept.
    fn reset(&mut self, graph: &Graph);

    /// Surveys every vertex: roots are taken from the start vertex upwards,
    /// wrapping around to 0. Always begins with a reset.
    fn search_all(&mut self, graph: &Graph) -> Result<(), SurveyError>;

    /// Surveys the component reachable from `root` only. Calling it on an
    /// already-discovered root does nothing.
    fn search_from(&mut self, graph: &Graph, root: Vertex) -> Result<(), SurveyError>;

    fn set_start(&mut self, start: Vertex);

    fn start(&self) -> Vertex;

    fn colors(&self) -> &[Color];

    fn discovery_times(&self) -> &[Option<usize>];

    fn parents(&self) -> &[Option<Vertex>];

    fn reset_from(&mut self, graph: &Graph, start: Vertex) {
        self.set_start(start);
        self.reset(graph);
    }

    fn vertex_count(&self) -> usize {
        self.colors().len()
    }

    fn color(&self, vertex: Vertex) -> Option<Color> {
        self.colors().get(vertex).copied()
    }

    fn discovery_time(&self, vertex: Vertex) -> Option<usize> {
        self.discovery_times().get(vertex).copied().flatten()
    }

    fn parent(&self, vertex: Vertex) -> Option<Vertex> {
        self.parents().get(vertex).copied().flatten()
    }

    /// Tree path from `vertex` up to its root, `vertex` first. Empty when
    /// the vertex was never discovered.
    fn path_to_root(&self, vertex: Vertex) -> Vec<Vertex> {
        if self.discovery_time(vertex).is_none() {
            return Vec::new();
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyAlgorithm {
    #[default]
    Bfs,
    Dfs,
}

impl SurveyAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyAlgorithm::Bfs => "bfs",
            SurveyAlgorithm::Dfs => "dfs",
        }
    }
}

impl From<&str> for SurveyAlgorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => SurveyAlgorithm::Dfs,
            _ => SurveyAlgorithm::Bfs,
        }
    }
}

impl From<String> for SurveyAlgorithm {
    fn from(s: String) -> Self {
        SurveyAlgorithm::from(s.as_str())
    }
}

impl fmt::Display for SurveyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
