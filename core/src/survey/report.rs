//! Orderings and tables derived from a finished survey.

use super::{BreadthFirstSurvey, Color, DepthFirstSurvey, Survey};
use crate::graph::Vertex;
use std::fmt::Write as _;

/// Finished vertices in the order they were discovered.
pub fn discovery_order<S: Survey + ?Sized>(survey: &S) -> Vec<Vertex> {
    order_by(survey.colors(), survey.discovery_times())
}

/// Finished vertices in the order they were finished.
pub fn finishing_order(survey: &DepthFirstSurvey) -> Vec<Vertex> {
    order_by(survey.colors(), survey.finish_times())
}

fn order_by(colors: &[Color], times: &[Option<usize>]) -> Vec<Vertex> {
    let mut timed: Vec<(usize, Vertex)> = colors
        .iter()
        .zip(times)
        .enumerate()
        .filter(|(_, (color, _))| **color == Color::Black)
        .filter_map(|(vertex, (_, time))| time.map(|t| (t, vertex)))
        .collect();
    timed.sort_unstable();
    timed.into_iter().map(|(_, vertex)| vertex).collect()
}

/// Breadth-first discovery order grouped first by search tree, then by
/// distance from that tree's root.
pub fn level_order(survey: &BreadthFirstSurvey) -> Vec<Vec<Vec<Vertex>>> {
    let mut trees: Vec<Vec<Vec<Vertex>>> = Vec::new();

    for vertex in discovery_order(survey) {
        let Some(distance) = survey.distance(vertex) else {
            continue;
        };

        if distance == 0 {
            trees.push(vec![vec![vertex]]);
            continue;
        }

        let Some(levels) = trees.last_mut() else {
            continue;
        };
        if levels.len() <= distance {
            levels.resize_with(distance + 1, Vec::new);
        }
        levels[distance].push(vertex);
    }

    trees
}

/// Renders `[ ( 0 ) ( 1 2 ) ] [ ( 5 ) ]`: one bracket per tree, one
/// parenthesis per level.
pub fn format_level_order(trees: &[Vec<Vec<Vertex>>]) -> String {
    trees
        .iter()
        .map(|levels| {
            let inner = levels
                .iter()
                .map(|level| format!("( {} )", join_vertices(level)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("[ {} ]", inner)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn join_vertices(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(Vertex::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

const COLUMN_WIDTHS: [usize; 5] = [8, 10, 11, 12, 13];

/// The breadth-first survey data table. Unreached entries print their
/// classic sentinel values.
pub fn format_bfs_table(survey: &BreadthFirstSurvey) -> String {
    let rows = (0..survey.vertex_count()).map(|vertex| {
        [
            survey
                .distance(vertex)
                .unwrap_or(survey.infinite_distance())
                .to_string(),
            survey
                .discovery_time(vertex)
                .unwrap_or(survey.infinite_time())
                .to_string(),
        ]
    });
    format_table("bf survey data", ["distance", "dtime"], survey, rows)
}

pub fn format_dfs_table(survey: &DepthFirstSurvey) -> String {
    let rows = (0..survey.vertex_count()).map(|vertex| {
        [
            survey
                .discovery_time(vertex)
                .unwrap_or(survey.infinite_time())
                .to_string(),
            survey
                .finish_time(vertex)
                .unwrap_or(survey.infinite_time())
                .to_string(),
        ]
    });
    format_table("df survey data", ["dtime", "ftime"], survey, rows)
}

fn format_table<S: Survey>(
    title: &str,
    headers: [&str; 2],
    survey: &S,
    rows: impl Iterator<Item = [String; 2]>,
) -> String {
    let [c1, c2, c3, c4, c5] = COLUMN_WIDTHS;
    let mut output = String::new();

    let _ = writeln!(output);
    let _ = writeln!(output, "{:>w$}", title, w = c1 + c2 - 2);
    let _ = writeln!(output, "{:>w$}", "=".repeat(title.len()), w = c1 + c2 - 2);
    let _ = writeln!(
        output,
        "{:>c1$}{:>c2$}{:>c3$}{:>c4$}{:>c5$}",
        "vertex", headers[0], headers[1], "parent", "color"
    );
    let _ = writeln!(
        output,
        "{:>c1$}{:>c2$}{:>c3$}{:>c4$}{:>c5$}",
        "------",
        "-".repeat(headers[0].len()),
        "-".repeat(headers[1].len()),
        "------",
        "-----"
    );

    for (vertex, [first, second]) in rows.enumerate() {
        let parent = survey
            .parent(vertex)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "NULL".to_string());
        let color = survey.color(vertex).map(Color::as_char).unwrap_or('w');
        let _ = writeln!(
            output,
            "{:>c1$}{:>c2$}{:>c3$}{:>c4$}{:>c5$}",
            vertex, first, second, parent, color
        );
    }

    output
}
