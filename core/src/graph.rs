use crate::error::GraphError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Dense vertex identifier in `[0, vertex_count)`.
pub type Vertex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    #[default]
    Undirected,
    Directed,
}

/// Adjacency-list graph. Undirected graphs store every edge in both
/// endpoint lists; directed graphs store it once, at the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Vertex>>,
    directedness: Directedness,
}

impl Graph {
    pub fn undirected() -> Self {
        Self::with_vertices(0, Directedness::Undirected)
    }

    pub fn directed() -> Self {
        Self::with_vertices(0, Directedness::Directed)
    }

    pub fn with_vertices(vertex_count: usize, directedness: Directedness) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directedness,
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness == Directedness::Directed
    }

    /// Grows or shrinks the vertex set. Shrinking drops every edge that
    /// touches a removed vertex.
    pub fn set_vertex_count(&mut self, vertex_count: usize) {
        if vertex_count < self.adjacency.len() {
            self.adjacency.truncate(vertex_count);
            for neighbors in &mut self.adjacency {
                neighbors.retain(|&neighbor| neighbor < vertex_count);
            }
        } else {
            self.adjacency.resize_with(vertex_count, Vec::new);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.iter().map(Vec::len).sum();
        match self.directedness {
            Directedness::Directed => stored,
            Directedness::Undirected => stored / 2,
        }
    }

    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.adjacency[from].push(to);
        if self.directedness == Directedness::Undirected {
            self.adjacency[to].push(from);
        }
        Ok(())
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(&to))
    }

    /// Neighbors of `vertex` in adjacency order; empty for unknown vertices.
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn out_degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    pub fn in_degree(&self, vertex: Vertex) -> usize {
        match self.directedness {
            Directedness::Undirected => self.out_degree(vertex),
            Directedness::Directed => self
                .adjacency
                .iter()
                .flatten()
                .filter(|&&neighbor| neighbor == vertex)
                .count(),
        }
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Randomizes the order of every adjacency list independently. Vertex
    /// ids and the edge set are unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for neighbors in &mut self.adjacency {
            neighbors.shuffle(rng);
        }
    }

    /// Graph with every edge reversed. An undirected graph is its own
    /// reversal.
    pub fn reversed(&self) -> Graph {
        if self.directedness == Directedness::Undirected {
            return self.clone();
        }

        let mut reversed = Graph::with_vertices(self.vertex_count(), Directedness::Directed);
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            for &to in neighbors {
                reversed.adjacency[to].push(from);
            }
        }
        reversed
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                count: self.vertex_count(),
            })
        }
    }
}
