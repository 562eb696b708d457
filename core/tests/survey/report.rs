use super::fixtures::diamond_with_tail;
use moviematch_core::survey::report::{
    discovery_order, finishing_order, format_bfs_table, format_dfs_table, format_level_order,
    level_order,
};
use moviematch_core::{BreadthFirstSurvey, DepthFirstSurvey, Survey};

fn table_row<'a>(table: &'a str, vertex: &str) -> Vec<&'a str> {
    table
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .find(|columns| columns.first() == Some(&vertex))
        .unwrap()
}

#[test]
fn test_level_order_groups_trees_and_levels() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_all(&graph).unwrap();

    let trees = level_order(&bfs);

    assert_eq!(
        trees,
        vec![
            vec![vec![0], vec![1, 2], vec![3], vec![4]],
            vec![vec![5], vec![6]],
        ]
    );
    assert_eq!(
        format_level_order(&trees),
        "[ ( 0 ) ( 1 2 ) ( 3 ) ( 4 ) ] [ ( 5 ) ( 6 ) ]"
    );
}

#[test]
fn test_partial_survey_orders_only_finished_vertices() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 5).unwrap();

    assert_eq!(discovery_order(&bfs), vec![5, 6]);
}

#[test]
fn test_preorder_and_postorder() {
    let graph = diamond_with_tail();
    let mut dfs = DepthFirstSurvey::new(&graph);
    dfs.search_from(&graph, 0).unwrap();

    assert_eq!(discovery_order(&dfs), vec![0, 1, 3, 2, 4]);
    assert_eq!(finishing_order(&dfs), vec![2, 4, 3, 1, 0]);
}

#[test]
fn test_bfs_table_prints_sentinels_for_unreached() {
    let graph = diamond_with_tail();
    let mut bfs = BreadthFirstSurvey::new(&graph);
    bfs.search_from(&graph, 0).unwrap();

    let table = format_bfs_table(&bfs);

    assert!(table.contains("bf survey data"));
    assert_eq!(table_row(&table, "0"), vec!["0", "0", "0", "NULL", "b"]);
    assert_eq!(table_row(&table, "3"), vec!["3", "2", "3", "1", "b"]);
    assert_eq!(table_row(&table, "5"), vec!["5", "7", "7", "NULL", "w"]);
}

#[test]
fn test_dfs_table_prints_finish_times() {
    let graph = diamond_with_tail();
    let mut dfs = DepthFirstSurvey::new(&graph);
    dfs.search_from(&graph, 0).unwrap();

    let table = format_dfs_table(&dfs);

    assert!(table.contains("df survey data"));
    assert_eq!(table_row(&table, "2"), vec!["2", "3", "4", "3", "b"]);
    assert_eq!(table_row(&table, "6"), vec!["6", "14", "14", "NULL", "w"]);
}
