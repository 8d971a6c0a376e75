use anyhow::Result;
use dsi_progress_logger::prelude::*;
use tree_analyzer::algo::visits::breadth_first;
use tree_analyzer::algo::*;
use tree_analyzer::graph::{Graph, Tree};
use tree_analyzer::parser::GraphReader;

fn tree_from(input: &str) -> Result<Tree> {
    let graph = GraphReader::new(input.as_bytes()).read(no_logging![])?;
    Ok(Tree::from_graph(graph, no_logging![])?)
}

#[test]
fn test_example() -> Result<()> {
    let tree = tree_from("4\n1 2\n-\n3\n-\n")?;

    let branches = branch_lengths(&tree, no_logging![]);
    assert_eq!(branches.min, 1);
    assert_eq!(branches.shallowest_leaf, 1);
    assert_eq!(branches.max, 2);
    assert_eq!(branches.farthest, 3);

    assert_eq!(diameter(&tree, no_logging![]).length, 3);
    assert_eq!(shortest_path(&tree, 1, 3, no_logging![]), vec![1, 0, 2, 3]);
    assert_eq!(shortest_path(&tree, 3, 1, no_logging![]), vec![3, 2, 0, 1]);
    Ok(())
}

#[test]
fn test_single_vertex() -> Result<()> {
    let tree = tree_from("1\n-\n")?;
    let analysis = Analysis::compute(&tree, 0, 0, no_logging![])?;
    assert_eq!(analysis.root, 0);
    assert_eq!(analysis.num_vertices, 1);
    assert_eq!(analysis.num_edges, 0);
    assert_eq!(analysis.branches.min, 0);
    assert_eq!(analysis.branches.max, 0);
    assert_eq!(analysis.diameter.length, 0);
    assert_eq!(analysis.path, vec![0]);
    Ok(())
}

#[test]
fn test_analysis_output() -> Result<()> {
    let tree = tree_from("4\n1 2\n-\n3\n-\n")?;
    let analysis = Analysis::compute(&tree, 1, 3, no_logging![])?;
    assert_eq!(
        analysis.to_string(),
        "Root Vertex: 0\n\
         Vertices Count: 4\n\
         Edges Count: 3\n\
         Length of Minimal Branch: 1\n\
         Length of Maximal Branch: 2\n\
         Diameter Length: 3\n\
         Shortest Path Between 1 and 3: 1 0 2 3"
    );
    Ok(())
}

#[test]
fn test_analysis_out_of_range() -> Result<()> {
    let tree = tree_from("2\n1\n-\n")?;
    assert_eq!(
        Analysis::compute(&tree, 0, 2, no_logging![]),
        Err(QueryError::OutOfRange {
            vertex: 2,
            num_vertices: 2
        })
    );
    Ok(())
}

#[test]
fn test_parse_vertex() {
    assert_eq!(parse_vertex("0", 1), Ok(0));
    assert_eq!(parse_vertex("-0", 1), Ok(0));
    assert!(matches!(parse_vertex("1", 1), Err(QueryError::OutOfRange { .. })));
    assert!(matches!(parse_vertex("0", 0), Err(QueryError::OutOfRange { .. })));
    assert!(matches!(parse_vertex("-1", 5), Err(QueryError::NotAVertex(_))));
    assert!(matches!(parse_vertex("2.5", 5), Err(QueryError::NotAVertex(_))));
    assert!(matches!(parse_vertex("1.0", 5), Err(QueryError::NotAVertex(_))));
    assert!(matches!(parse_vertex("+1", 5), Err(QueryError::NotAVertex(_))));
    assert!(matches!(parse_vertex("2x", 5), Err(QueryError::NotAVertex(_))));
    assert!(matches!(parse_vertex("", 5), Err(QueryError::NotAVertex(_))));
}

#[test]
fn test_root_not_zero() -> Result<()> {
    // 3 is the root; the deepest leaf is 1, at distance 3.
    let tree = tree_from("5\n1\n-\n-\n2 4\n0\n")?;
    assert_eq!(tree.root(), 3);

    let branches = branch_lengths(&tree, no_logging![]);
    assert_eq!(branches.min, 1);
    assert_eq!(branches.shallowest_leaf, 2);
    assert_eq!(branches.max, 3);
    assert_eq!(branches.farthest, 1);

    let diameter = diameter(&tree, no_logging![]);
    assert_eq!(diameter.length, 4);
    assert_eq!(diameter.endpoints, (1, 2));
    assert_eq!(shortest_path(&tree, 2, 1, no_logging![]), vec![2, 3, 4, 0, 1]);
    Ok(())
}

#[test]
fn test_star() -> Result<()> {
    let tree = tree_from("5\n-\n-\n0 1 3 4\n-\n-\n")?;
    let branches = branch_lengths(&tree, no_logging![]);
    assert_eq!((branches.min, branches.max), (1, 1));
    assert_eq!(branches.shallowest_leaf, 0);
    assert_eq!(branches.farthest, 0);
    for start in 0..5 {
        assert_eq!(diameter_from(&tree, start, no_logging![]).length, 2);
    }
    assert_eq!(shortest_path(&tree, 0, 4, no_logging![]), vec![0, 2, 4]);
    Ok(())
}

#[test]
fn test_visit_reuse() -> Result<()> {
    let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
    let tree = Tree::from_graph(graph, no_logging![])?;
    let mut visit = breadth_first::Seq::new(&tree);

    visit.visit(3, Some(3), no_logging![]);
    assert_eq!(visit.distance(3), Some(0));
    assert_eq!(visit.distance(2), None);

    visit.visit(0, None, no_logging![]);
    assert_eq!(visit.distance(3), Some(2));
    assert_eq!(visit.pred(0), None);
    assert!(visit.distances().iter().all(Option::is_some));

    // Stale state from the previous visit must not leak.
    visit.visit(1, Some(0), no_logging![]);
    assert_eq!(visit.distance(1), Some(0));
    assert_eq!(visit.pred(1), None);
    assert_eq!(visit.distance(0), Some(1));
    assert_eq!(visit.distance(3), None);
    assert_eq!(visit.preds_from(0).collect::<Vec<_>>(), vec![0, 1]);
    Ok(())
}

#[test]
fn test_early_exit() -> Result<()> {
    // A path 0 - 1 - 2 - 3 - 4.
    let graph = Graph::from_children([vec![1], vec![2], vec![3], vec![4], vec![]]);
    let tree = Tree::from_graph(graph, no_logging![])?;
    let mut visit = breadth_first::Seq::new(&tree);
    visit.visit(0, Some(2), no_logging![]);
    // 3 is discovered when 2 is dequeued, which does not happen.
    assert_eq!(visit.distance(2), Some(2));
    assert_eq!(visit.distance(3), None);
    assert_eq!(visit.distance(4), None);
    Ok(())
}
