//! Plain-text graph files and small structural reports.
//!
//! Graph files start with optional `#` documentation lines, followed by the
//! vertex count and then `from to` pairs, all as whitespace-separated
//! decimal integers.

use crate::error::GraphError;
use crate::graph::{Directedness, Graph, Vertex};
use crate::mapped_file::read_mapped_text;
use std::{collections::VecDeque, fmt::Write as _, fs, path::Path};

pub fn load_graph_file(path: &Path, directedness: Directedness) -> Result<Graph, GraphError> {
    read_mapped_text(path, |text| parse_graph(text, directedness))?
}

pub fn parse_graph(text: &str, directedness: Directedness) -> Result<Graph, GraphError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.starts_with('#'))
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));

    let (line, token) = tokens.next().ok_or_else(|| GraphError::Parse {
        line: 1,
        reason: "vertex size not readable".to_string(),
    })?;
    let vertex_count = parse_vertex(line, token)?;
    let mut graph = Graph::with_vertices(vertex_count, directedness);

    while let Some((from_line, from_token)) = tokens.next() {
        let from = parse_vertex(from_line, from_token)?;
        let (to_line, to_token) = tokens.next().ok_or_else(|| GraphError::Parse {
            line: from_line,
            reason: format!("edge from {} has no destination", from),
        })?;
        let to = parse_vertex(to_line, to_token)?;
        graph.add_edge(from, to)?;
    }

    Ok(graph)
}

fn parse_vertex(line: usize, token: &str) -> Result<Vertex, GraphError> {
    token.parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("expected an unsigned integer, found {:?}", token),
    })
}

/// Serializes `graph` in the graph file format. Undirected edges are
/// written once, from the smaller endpoint. An undirected self-loop is
/// stored twice in its own list and written once per stored pair.
pub fn format_graph(graph: &Graph) -> String {
    let mut output = format!("{}\n", graph.vertex_count());
    for from in 0..graph.vertex_count() {
        let mut loop_copies = 0;
        for &to in graph.neighbors(from) {
            let write = if graph.is_directed() || from < to {
                true
            } else if from == to {
                loop_copies += 1;
                loop_copies % 2 == 1
            } else {
                false
            };
            if write {
                let _ = writeln!(output, "{}\t{}", from, to);
            }
        }
    }
    output
}

pub fn save_graph_file(path: &Path, graph: &Graph) -> Result<(), GraphError> {
    fs::write(path, format_graph(graph))?;
    Ok(())
}

/// One line per vertex: `[v]->a,b,c`.
pub fn format_adjacency_list(graph: &Graph) -> String {
    let mut output = String::new();
    for vertex in 0..graph.vertex_count() {
        let neighbors = graph
            .neighbors(vertex)
            .iter()
            .map(Vertex::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(output, "[{}]->{}", vertex, neighbors);
    }
    output
}

/// Every stored edge `(v, w)` for which `(w, v)` is missing.
pub fn asymmetric_edges(graph: &Graph) -> Vec<(Vertex, Vertex)> {
    let mut asymmetric = Vec::new();
    for from in 0..graph.vertex_count() {
        for &to in graph.neighbors(from) {
            if !graph.has_edge(to, from) {
                asymmetric.push((from, to));
            }
        }
    }
    asymmetric
}

pub fn is_symmetric(graph: &Graph) -> bool {
    asymmetric_edges(graph).is_empty()
}

/// `distribution[d]` is the number of vertices with out-degree `d`.
pub fn out_degree_distribution(graph: &Graph) -> Vec<usize> {
    let max_degree = (0..graph.vertex_count())
        .map(|vertex| graph.out_degree(vertex))
        .max()
        .unwrap_or(0);

    let mut distribution = vec![0; max_degree + 1];
    for vertex in 0..graph.vertex_count() {
        distribution[graph.out_degree(vertex)] += 1;
    }
    distribution
}

/// Kahn's topological sort. Returns the order found and whether it covers
/// every vertex, which holds exactly when the directed graph is acyclic.
/// On a cyclic graph the order is partial and omits every vertex on or
/// behind a cycle.
pub fn topological_sort(graph: &Graph) -> (Vec<Vertex>, bool) {
    let mut in_degree = vec![0usize; graph.vertex_count()];
    for from in 0..graph.vertex_count() {
        for &to in graph.neighbors(from) {
            in_degree[to] += 1;
        }
    }

    let mut ready: VecDeque<Vertex> = (0..graph.vertex_count())
        .filter(|&vertex| in_degree[vertex] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.vertex_count());

    while let Some(vertex) = ready.pop_front() {
        order.push(vertex);
        for &next in graph.neighbors(vertex) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    let is_acyclic = order.len() == graph.vertex_count();
    (order, is_acyclic)
}
