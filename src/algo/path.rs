use crate::algo::visits::breadth_first;
use crate::graph::Tree;
use dsi_progress_logger::ProgressLog;

/// Returns the vertices of the path from `source` to `destination`, both
/// included, in traversal order.
///
/// # Panics
///
/// If `source` or `destination` is not a vertex of `tree`.
///
/// # Examples
/// ```
/// # use tree_analyzer::algo::shortest_path;
/// # use tree_analyzer::graph::{Graph, Tree};
/// # use dsi_progress_logger::no_logging;
/// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
/// let tree = Tree::from_graph(graph, no_logging![]).unwrap();
/// assert_eq!(shortest_path(&tree, 1, 3, no_logging![]), vec![1, 0, 2, 3]);
/// assert_eq!(shortest_path(&tree, 2, 2, no_logging![]), vec![2]);
/// ```
pub fn shortest_path(
    tree: &Tree,
    source: usize,
    destination: usize,
    pl: &mut impl ProgressLog,
) -> Vec<usize> {
    let mut visit = breadth_first::Seq::new(tree);
    shortest_path_with(&mut visit, source, destination, pl)
}

/// Computes a shortest path on the tree of `visit`, reusing its state.
///
/// The visit starts from `destination` and stops as soon as `source` is
/// dequeued; then predecessors are followed from `source`, which yields the
/// path already in source-to-destination order.
pub fn shortest_path_with(
    visit: &mut breadth_first::Seq<'_, Tree>,
    source: usize,
    destination: usize,
    pl: &mut impl ProgressLog,
) -> Vec<usize> {
    pl.item_name("vertex");
    pl.expected_updates(None);
    pl.start(format!(
        "Searching for a path between {source} and {destination}..."
    ));
    visit.visit(destination, Some(source), pl);
    pl.done();

    visit.preds_from(source).collect()
}
