use super::fixtures::{diamond_with_tail, graph_from_edges, random_graph};
use moviematch_core::{BreadthFirstSurvey, Color, Directedness, Survey, SurveyError};

#[test]
fn test_bfs_single_source_distances() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);

    bfs.search_from(&graph, 0).unwrap();

    assert_eq!(
        bfs.distances(),
        &[Some(0), Some(1), Some(1), Some(2), Some(3), None, None]
    );
    assert_eq!(
        bfs.parents(),
        &[None, Some(0), Some(0), Some(1), Some(3), None, None]
    );
    assert_eq!(
        bfs.discovery_times(),
        &[Some(0), Some(1), Some(2), Some(3), Some(4), None, None]
    );
}

#[test]
fn test_bfs_leaves_other_components_untouched() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);

    bfs.search_from(&graph, 0).unwrap();

    for vertex in 0..=4 {
        assert_eq!(bfs.color(vertex), Some(Color::Black));
    }
    for vertex in 5..=6 {
        assert_eq!(bfs.color(vertex), Some(Color::White));
        assert_eq!(bfs.distance(vertex), None);
        assert_eq!(bfs.discovery_time(vertex), None);
        assert_eq!(bfs.parent(vertex), None);
    }
}

#[test]
fn test_bfs_full_survey_wraps_around_from_start() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::with_start(&graph, 5);

    bfs.search_all(&graph).unwrap();

    assert!(bfs.colors().iter().all(|&color| color == Color::Black));
    assert_eq!(bfs.discovery_time(5), Some(0));
    assert_eq!(bfs.discovery_time(6), Some(1));
    assert_eq!(bfs.discovery_time(0), Some(2));
    assert_eq!(bfs.distance(0), Some(0));
    assert_eq!(bfs.parent(0), None);
    assert_eq!(bfs.distance(4), Some(3));
}

#[test]
fn test_bfs_full_survey_roots_isolated_vertices() {
    let graph = graph_from_edges(3, &[(0, 1)], Directedness::Undirected);
    let mut bfs = BreadthFirstSurvey::new(&graph);

    bfs.search_all(&graph).unwrap();

    assert_eq!(bfs.color(2), Some(Color::Black));
    assert_eq!(bfs.distance(2), Some(0));
    assert_eq!(bfs.parent(2), None);
}

#[test]
fn test_bfs_parent_walk_matches_distance() {
    for seed in 0..10 {
        let graph = random_graph(seed, 60, 90, Directedness::Undirected);
        let mut bfs = BreadthFirstSurvey::new(&graph);
        bfs.search_from(&graph, 0).unwrap();

        for vertex in 0..graph.vertex_count() {
            let Some(distance) = bfs.distance(vertex) else {
                assert_eq!(bfs.color(vertex), Some(Color::White));
                assert_eq!(bfs.parent(vertex), None);
                continue;
            };

            assert_eq!(bfs.color(vertex), Some(Color::Black));
            if let Some(parent) = bfs.parent(vertex) {
                assert_eq!(bfs.distance(parent), Some(distance - 1));
                assert!(graph.has_edge(parent, vertex));
            }

            let path = bfs.path_to_root(vertex);
            assert_eq!(path.len(), distance + 1);
            assert_eq!(path.last(), Some(&0));
        }
    }
}

#[test]
fn test_bfs_discovery_times_follow_level_order() {
    let graph = random_graph(42, 80, 120, Directedness::Undirected);
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 3).unwrap();

    let mut discovered: Vec<(usize, usize)> = (0..graph.vertex_count())
        .filter_map(|v| Some((bfs.discovery_time(v)?, bfs.distance(v)?)))
        .collect();
    discovered.sort_unstable();

    for (expected_time, &(time, _)) in discovered.iter().enumerate() {
        assert_eq!(time, expected_time);
    }
    assert!(discovered.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn test_bfs_distances_ignore_adjacency_order() {
    let mut graph = random_graph(7, 50, 80, Directedness::Undirected);
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 0).unwrap();
    let before = bfs.distances().to_vec();

    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(99);
    graph.shuffle(&mut rng);
    bfs.reset(&graph);
    bfs.search_from(&graph, 0).unwrap();

    assert_eq!(bfs.distances(), before.as_slice());
}

#[test]
fn test_bfs_reset_then_search_is_deterministic() {
    let graph = random_graph(11, 40, 70, Directedness::Undirected);
    let mut bfs = BreadthFirstSurvey::with_start(&graph, 13);
    bfs.search_all(&graph).unwrap();
    let first = bfs.clone();

    bfs.reset(&graph);
    assert!(bfs.colors().iter().all(|&color| color == Color::White));
    bfs.search_all(&graph).unwrap();

    assert_eq!(bfs.colors(), first.colors());
    assert_eq!(bfs.distances(), first.distances());
    assert_eq!(bfs.discovery_times(), first.discovery_times());
    assert_eq!(bfs.parents(), first.parents());
}

#[test]
fn test_bfs_repeated_search_is_a_no_op() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 0).unwrap();
    let first = bfs.clone();

    bfs.search_from(&graph, 0).unwrap();
    bfs.search_from(&graph, 3).unwrap();

    assert_eq!(bfs.discovery_times(), first.discovery_times());
    assert_eq!(bfs.distances(), first.distances());
}

#[test]
fn test_bfs_reset_from_changes_start_only() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 0).unwrap();

    bfs.reset_from(&graph, 6);

    assert_eq!(bfs.start(), 6);
    assert!(bfs.distances().iter().all(Option::is_none));
    bfs.search_all(&graph).unwrap();
    assert_eq!(bfs.discovery_time(6), Some(0));
}

#[test]
fn test_bfs_sentinels_are_out_of_range() {
    let graph = diamond_with_tail();
    let bfs = BreadthFirstSurvey::new(&graph);

    assert_eq!(bfs.infinite_distance(), 7);
    assert_eq!(bfs.infinite_time(), 7);
    assert_eq!(bfs.null_vertex(), 7);
}

#[test]
fn test_bfs_directed_follows_edge_direction() {
    let graph = graph_from_edges(4, &[(0, 1), (1, 2), (3, 0)], Directedness::Directed);
    let mut bfs = BreadthFirstSurvey::new(&graph);

    bfs.search_from(&graph, 0).unwrap();

    assert_eq!(bfs.distance(2), Some(2));
    assert_eq!(bfs.color(3), Some(Color::White));
}

#[test]
fn test_bfs_rejects_stale_survey() {
    let mut graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    graph.set_vertex_count(8);

    assert_eq!(
        bfs.search_from(&graph, 0),
        Err(SurveyError::StaleSurvey { survey: 7, graph: 8 })
    );

    bfs.reset(&graph);
    assert_eq!(bfs.vertex_count(), 8);
    assert!(bfs.search_from(&graph, 7).is_ok());
}

#[test]
fn test_bfs_rejects_out_of_range_root() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);

    assert_eq!(
        bfs.search_from(&graph, 9),
        Err(SurveyError::VertexOutOfRange { vertex: 9, count: 7 })
    );
}
