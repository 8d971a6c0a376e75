use crate::algo::visits::breadth_first;
use crate::graph::Tree;
use crate::utils::math::{argmax, filtered_argmin};
use dsi_progress_logger::ProgressLog;

/// The lengths of the shortest and longest branches of a tree, that is, the
/// minimum distance of a leaf from the root and the maximum distance of any
/// vertex from the root.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct BranchLengths {
    /// The length of the shortest branch.
    pub min: usize,
    /// The leaf closest to the root (smallest id in case of ties).
    pub shallowest_leaf: usize,
    /// The length of the longest branch.
    pub max: usize,
    /// The vertex farthest from the root (smallest id in case of ties).
    pub farthest: usize,
}

/// Computes the branch lengths of `tree`.
///
/// # Examples
/// ```
/// # use tree_analyzer::algo::branch_lengths;
/// # use tree_analyzer::graph::{Graph, Tree};
/// # use dsi_progress_logger::no_logging;
/// let graph = Graph::from_children([vec![1, 2], vec![], vec![3], vec![]]);
/// let tree = Tree::from_graph(graph, no_logging![]).unwrap();
/// let branches = branch_lengths(&tree, no_logging![]);
/// assert_eq!((branches.min, branches.max), (1, 2));
/// assert_eq!(branches.farthest, 3);
/// ```
pub fn branch_lengths(tree: &Tree, pl: &mut impl ProgressLog) -> BranchLengths {
    let mut visit = breadth_first::Seq::new(tree);
    branch_lengths_with(&mut visit, pl)
}

/// Computes the branch lengths of the tree of `visit`, reusing its state.
pub fn branch_lengths_with(
    visit: &mut breadth_first::Seq<'_, Tree>,
    pl: &mut impl ProgressLog,
) -> BranchLengths {
    let tree = visit.graph();

    pl.item_name("vertex");
    pl.expected_updates(Some(tree.num_vertices()));
    pl.start("Computing branch lengths...");
    visit.visit(tree.root(), None, pl);
    pl.done();

    let distances = visit.distances();
    let shallowest_leaf = filtered_argmin(distances, |vertex, distance| {
        tree.is_leaf(vertex) && distance.is_some()
    })
    .expect("a finite tree has a leaf");
    let farthest = argmax(distances).expect("a tree has at least one vertex");

    BranchLengths {
        min: visit
            .distance(shallowest_leaf)
            .expect("all vertices of a tree are reachable from the root"),
        shallowest_leaf,
        max: visit
            .distance(farthest)
            .expect("all vertices of a tree are reachable from the root"),
        farthest,
    }
}
