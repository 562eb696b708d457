use moviematch_core::graph_util::{asymmetric_edges, out_degree_distribution, topological_sort};
use moviematch_core::survey::report::{
    discovery_order, finishing_order, format_bfs_table, format_dfs_table, format_level_order,
    join_vertices, level_order,
};
use moviematch_core::{
    BreadthFirstSurvey, DepthFirstSurvey, Graph, Survey, SurveyAlgorithm, SurveyError, Vertex,
};
use std::fmt::Write as _;

/// Surveys `graph` and renders the orderings followed by the survey data
/// table. A single survey covers only the component of `start`.
pub fn format_survey(
    graph: &Graph,
    algorithm: SurveyAlgorithm,
    single: bool,
    start: Vertex,
) -> Result<String, SurveyError> {
    let mut output = String::new();
    match algorithm {
        SurveyAlgorithm::Bfs => {
            let mut survey = BreadthFirstSurvey::with_start(graph, start);
            run(&mut survey, graph, single, start)?;
            let _ = writeln!(output, "level order: {}", format_level_order(&level_order(&survey)));
            let _ = writeln!(output, "discovery order: {}", join_vertices(&discovery_order(&survey)));
            output.push_str(&format_bfs_table(&survey));
        }
        SurveyAlgorithm::Dfs => {
            let mut survey = DepthFirstSurvey::with_start(graph, start);
            run(&mut survey, graph, single, start)?;
            let _ = writeln!(output, "preorder: {}", join_vertices(&discovery_order(&survey)));
            let _ = writeln!(output, "postorder: {}", join_vertices(&finishing_order(&survey)));
            output.push_str(&format_dfs_table(&survey));
        }
    }
    Ok(output)
}

fn run<S: Survey>(survey: &mut S, graph: &Graph, single: bool, start: Vertex) -> Result<(), SurveyError> {
    if single {
        survey.reset(graph);
        survey.search_from(graph, start)
    } else {
        survey.search_all(graph)
    }
}

pub fn format_graph_info(graph: &Graph) -> String {
    let mut output = String::new();
    let kind = if graph.is_directed() { "directed" } else { "undirected" };
    let _ = writeln!(output, "{} graph", kind);
    let _ = writeln!(output, "  vertices: {}", graph.vertex_count());
    let _ = writeln!(output, "  edges:    {}", graph.edge_count());

    let asymmetric = asymmetric_edges(graph);
    if asymmetric.is_empty() {
        let _ = writeln!(output, "  symmetric: yes");
    } else {
        let _ = writeln!(output, "  symmetric: no ({} one-way edges)", asymmetric.len());
    }

    if graph.is_directed() {
        let (order, is_acyclic) = topological_sort(graph);
        if is_acyclic {
            let _ = writeln!(output, "  topological order: {}", join_vertices(&order));
        } else {
            let _ = writeln!(
                output,
                "  acyclic: no (partial order: {})",
                join_vertices(&order)
            );
        }
    }

    let _ = writeln!(output, "  out-degree distribution:");
    for (degree, count) in out_degree_distribution(graph).into_iter().enumerate() {
        if count > 0 {
            let _ = writeln!(output, "    {:>4}: {}", degree, count);
        }
    }
    output
}
